//! Value persistence: read a target file, patch it in memory, write it back.
//!
//! The target file must already exist; nothing is created from scratch. Each
//! save is two separate open cycles (read-all, then truncate-write) with no
//! locking, so a concurrent external edit between them is lost.

use std::path::Path;

use tracing::debug;

use crate::error::ConfiguratorError;
use crate::format::{Format, PatchError};

/// Write `value` under `key` in `file_path`, using the backend implied by the
/// file extension. Returns the backend that handled the write.
pub fn save_value(file_path: &Path, key: &str, value: &str) -> Result<Format, ConfiguratorError> {
    let format = Format::from_path(file_path);
    debug!(path = %file_path.display(), ?format, key, "saving value");

    let content = std::fs::read(file_path).map_err(|e| ConfiguratorError::FileOpen {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    let new_content = format
        .patch(&content, key, value)
        .map_err(|e| patch_error(e, file_path, key))?;

    std::fs::write(file_path, new_content).map_err(|e| ConfiguratorError::Write {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %file_path.display(), key, "value saved");
    Ok(format)
}

fn patch_error(err: PatchError, path: &Path, key: &str) -> ConfiguratorError {
    match err {
        PatchError::Parse(source) => ConfiguratorError::Parse {
            path: path.to_path_buf(),
            source,
        },
        PatchError::NotAnObject => ConfiguratorError::NotAnObject {
            path: path.to_path_buf(),
        },
        PatchError::Conflict { segment } => ConfiguratorError::StructuralConflict {
            path: path.to_path_buf(),
            key: key.into(),
            segment,
        },
        PatchError::Serialize(source) => ConfiguratorError::Serialize {
            path: path.to_path_buf(),
            source,
        },
    }
}
