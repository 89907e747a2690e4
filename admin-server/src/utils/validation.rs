//! Input validation helpers
//!
//! Length limits count characters, not bytes: Vietnamese names are mostly
//! multi-byte in UTF-8.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, branch, table, employee display name
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and order notes
pub const MAX_NOTE_LEN: usize = 500;

/// Short text: phone, role, menu type, category, weight
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Menu item codes and usernames (also used as record keys)
pub const MAX_CODE_LEN: usize = 32;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Branch addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an identifier-like code: ASCII letters, digits, `_` and `-`.
pub fn validate_code(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_CODE_LEN)?;
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::validation(format!(
            "{field} may only contain letters, digits, '_' and '-'"
        )));
    }
    Ok(())
}

/// Validate that an amount or quantity is not negative.
pub fn validate_non_negative(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

/// Validate an optional amount or quantity.
pub fn validate_optional_non_negative(value: Option<i64>, field: &str) -> Result<(), AppError> {
    value.map_or(Ok(()), |v| validate_non_negative(v, field))
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}
