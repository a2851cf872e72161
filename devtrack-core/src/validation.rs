//! Input validation helpers
//!
//! These functions never talk to the terminal themselves; callers hand in
//! the raw text (or a closure producing it) and decide how to report
//! failures.

use anyhow::Result;
use thiserror::Error;

use crate::models::{Priority, ProjectStatus};

/// Reasons a numeric entry can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is not a valid whole number")]
    NotAnInteger(String),

    #[error("the number must be greater than zero (got {0})")]
    NotPositive(i128),

    #[error("the number is too large (maximum {max}, got {0})", max = u32::MAX)]
    OutOfRange(i128),
}

/// Parses a strictly positive integer
pub fn parse_positive_integer(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotAnInteger(trimmed.to_string()))?;

    if value <= 0 {
        return Err(ValidationError::NotPositive(value));
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange(value))
}

/// Keeps reading lines until one parses as a positive integer.
///
/// `on_invalid` is called with the specific reason for every rejected line.
/// There is no attempt limit: the loop ends on valid input or when
/// `read_line` fails (for example because the user cancelled the prompt),
/// in which case the error is returned unchanged.
pub fn validate_positive_integer<R, E>(mut read_line: R, mut on_invalid: E) -> Result<u32>
where
    R: FnMut() -> Result<String>,
    E: FnMut(&ValidationError),
{
    loop {
        let line = read_line()?;
        match parse_positive_integer(&line) {
            Ok(value) => return Ok(value),
            Err(e) => on_invalid(&e),
        }
    }
}

/// Returns true when `value` names one of the known project statuses
pub fn validate_status(value: &str) -> bool {
    ProjectStatus::from_label(value).is_some()
}

/// Resolves a status for a new project, falling back to Pending.
///
/// The flag is true when the fallback was used so the caller can warn.
pub fn parse_status_or_default(value: &str) -> (ProjectStatus, bool) {
    match ProjectStatus::from_label(value) {
        Some(status) => (status, false),
        None => (ProjectStatus::Pending, true),
    }
}

/// Maps free text to a priority; anything unrecognised becomes Medium
pub fn validate_priority(value: &str) -> Priority {
    Priority::from_label(value).unwrap_or_default()
}
