//! Argument checkers shared by the value-object constructors.

use chrono::{DateTime, Utc};

use crate::types::TimestampInput;
use crate::{Result, SampleError};

/// Unwrap a mandatory value or fail with `RequiredValue`.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(SampleError::RequiredValue { name })
}

/// Accept only timezone-aware timestamps.
pub(crate) fn check_timestamp(value: TimestampInput, name: &'static str) -> Result<DateTime<Utc>> {
    match value {
        TimestampInput::Aware(ts) => Ok(ts),
        TimestampInput::Naive(_) => {
            tracing::debug!(field = name, "rejecting naive timestamp");
            Err(SampleError::NaiveTimestamp { name })
        }
    }
}

/// Trim a required string and check it for length and control characters.
pub(crate) fn check_string(
    value: Option<&str>,
    name: &'static str,
    max_len: Option<usize>,
) -> Result<String> {
    check_optional_string(value, name, max_len)?.ok_or(SampleError::MissingParameter { name })
}

/// Like [`check_string`], but an absent or blank value yields `None`.
pub(crate) fn check_optional_string(
    value: Option<&str>,
    name: &'static str,
    max_len: Option<usize>,
) -> Result<Option<String>> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    // Cc only; format characters such as U+200B are accepted.
    if trimmed.chars().any(char::is_control) {
        return Err(SampleError::illegal(format!(
            "{name} contains control characters"
        )));
    }
    if let Some(max) = max_len.filter(|max| trimmed.chars().count() > *max) {
        return Err(SampleError::illegal(format!(
            "{name} exceeds maximum length of {max}"
        )));
    }
    Ok(Some(trimmed.to_string()))
}
