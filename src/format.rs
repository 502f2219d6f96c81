//! Format backends: pure functions that patch a file's content in memory.
//!
//! [`Format::from_path`] picks a backend from the file extension. Every
//! backend follows the same contract: update the key if present, append it if
//! absent, leave everything else as it was. I/O lives in
//! [`persist`](crate::persist); nothing here touches the filesystem.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Which backend handles a target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `key=value` lines. Used for any extension other than `.ini` / `.json`.
    Plain,
    /// Same line semantics as [`Format::Plain`]; `[section]` headers are not
    /// interpreted.
    Ini,
    /// A JSON object; dotted keys address nested objects.
    Json,
}

/// Why a JSON document could not be patched.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("malformed JSON: {0}")]
    Parse(serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
    /// `segment` exists on the path but holds a non-object value.
    #[error("'{segment}' is not an object")]
    Conflict { segment: String },
    #[error("cannot serialize JSON: {0}")]
    Serialize(serde_json::Error),
}

impl Format {
    /// Select the backend by extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("ini") => Format::Ini,
            Some("json") => Format::Json,
            _ => Format::Plain,
        }
    }

    /// Apply `key = value` to `content`, returning the full new content.
    ///
    /// Line backends work on raw bytes, so files that are not valid UTF-8
    /// are patched without touching the other lines. JSON must be UTF-8.
    pub fn patch(self, content: &[u8], key: &str, value: &str) -> Result<Vec<u8>, PatchError> {
        match self {
            Format::Plain | Format::Ini => Ok(set_line(content, key, value)),
            Format::Json => set_json(content, key, value),
        }
    }
}

/// Replace every line starting with `key=`, or append one if none does.
///
/// Each resulting line is `\n`-terminated; a trailing `\r` on an input line
/// is dropped. A line matches by literal prefix, so `host` never matches
/// `hostname=...`.
pub fn set_line(content: &[u8], key: &str, value: &str) -> Vec<u8> {
    let prefix = format!("{key}=");
    let replacement = format!("{key}={value}");
    let mut found = false;
    let mut out = Vec::with_capacity(content.len() + replacement.len() + 1);

    for line in split_lines(content) {
        if line.starts_with(prefix.as_bytes()) {
            out.extend_from_slice(replacement.as_bytes());
            found = true;
        } else {
            out.extend_from_slice(line);
        }
        out.push(b'\n');
    }

    if !found {
        out.extend_from_slice(replacement.as_bytes());
        out.push(b'\n');
    }
    out
}

fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n')
        .filter(move |_| !content.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Set a dotted `key` to the string `value` inside a JSON object document.
///
/// Missing intermediate objects are created. Existing values elsewhere keep
/// their JSON type and key order. Output uses 2-space indentation.
pub fn set_json(content: &[u8], key: &str, value: &str) -> Result<Vec<u8>, PatchError> {
    let mut root: Value = serde_json::from_slice(content).map_err(PatchError::Parse)?;
    let Value::Object(map) = &mut root else {
        return Err(PatchError::NotAnObject);
    };

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, key),
    };

    let mut current = map;
    if let Some(parents) = parents {
        for segment in parents.split('.') {
            current = ensure_object(current, segment)?;
        }
    }
    current.insert(leaf.to_string(), Value::String(value.to_string()));

    let mut out = serde_json::to_vec_pretty(&root).map_err(PatchError::Serialize)?;
    out.push(b'\n');
    Ok(out)
}

/// Return the child object at `segment`, inserting an empty one if absent.
fn ensure_object<'a>(
    map: &'a mut Map<String, Value>,
    segment: &str,
) -> Result<&'a mut Map<String, Value>, PatchError> {
    match map
        .entry(segment)
        .or_insert_with(|| Value::Object(Map::new()))
    {
        Value::Object(child) => Ok(child),
        _ => Err(PatchError::Conflict {
            segment: segment.to_string(),
        }),
    }
}
