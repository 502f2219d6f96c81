//! Per-type validation of operator input.
//!
//! [`validate_value`] decides whether a trimmed input string satisfies a
//! step's declared [`ValueType`]. It is a pure function of its three inputs:
//! no I/O, no retries. The caller decides whether a rejection means
//! re-prompting, skipping, or aborting.
//!
//! The `Display` text of each [`ValidationError`] is the message shown to the
//! operator, so it always names the rejected input or the allowed set.

use std::net::IpAddr;
use std::path::Path;

use thiserror::Error;

use crate::types::ValueType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected an integer, got '{0}'")]
    NotAnInteger(String),

    #[error("expected true or false, got '{0}'")]
    NotABool(String),

    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    #[error("port must be between 1 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("value must be one of: {}", .allowed.join(", "))]
    NotInEnum { allowed: Vec<String> },

    #[error("unknown type: {0}")]
    UnknownType(String),
}

/// Check `input` against the rules of `value_type`.
///
/// `enum_values` is only consulted for [`ValueType::Enum`]; matching there is
/// exact and case-sensitive.
pub fn validate_value(
    value_type: &ValueType,
    input: &str,
    enum_values: &[String],
) -> Result<(), ValidationError> {
    match value_type {
        ValueType::String | ValueType::Any => Ok(()),
        ValueType::Int => input
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| ValidationError::NotAnInteger(input.into())),
        ValueType::Bool => {
            if input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case("false") {
                Ok(())
            } else {
                Err(ValidationError::NotABool(input.into()))
            }
        }
        ValueType::Ip => input
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidIp(input.into())),
        ValueType::Port => match input.parse::<i64>() {
            Ok(p) if (1..=65535).contains(&p) => Ok(()),
            _ => Err(ValidationError::InvalidPort(input.into())),
        },
        ValueType::Path => {
            if is_resolvable_path(input) {
                Ok(())
            } else {
                Err(ValidationError::InvalidPath(input.into()))
            }
        }
        ValueType::Enum => {
            if enum_values.iter().any(|v| v == input) {
                Ok(())
            } else {
                Err(ValidationError::NotInEnum {
                    allowed: enum_values.to_vec(),
                })
            }
        }
        ValueType::Unknown(name) => Err(ValidationError::UnknownType(name.clone())),
    }
}

/// Whether `input` can be made absolute against the working directory.
/// Existence is not checked; the empty string resolves to the working
/// directory itself.
pub(crate) fn is_resolvable_path(input: &str) -> bool {
    if input.contains('\0') {
        return false;
    }
    input.is_empty() || std::path::absolute(Path::new(input)).is_ok()
}
