//! Request field validation helpers.

use crate::server::error::validation::ValidationError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Largest size or row offset the store accepts as a bound parameter.
const MAX_ROWS: u64 = i64::MAX as u64;

/// Returns the value of a required text field, rejecting absent or blank values.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Resolves page and size against their defaults, both must be at least 1.
///
/// The size and the offset of the requested page, `(page - 1) * size`, must also fit in an
/// `i64` row count.
pub fn page_and_size(page: Option<u64>, size: Option<u64>) -> Result<(u64, u64), ValidationError> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page < 1 {
        return Err(ValidationError::InvalidValue {
            field: "page",
            reason: "must be at least 1".to_string(),
        });
    }

    if size < 1 {
        return Err(ValidationError::InvalidValue {
            field: "size",
            reason: "must be at least 1".to_string(),
        });
    }

    if size > MAX_ROWS {
        return Err(ValidationError::InvalidValue {
            field: "size",
            reason: format!("must be at most {}", MAX_ROWS),
        });
    }

    match (page - 1).checked_mul(size) {
        Some(offset) if offset <= MAX_ROWS => Ok((page, size)),
        _ => Err(ValidationError::InvalidValue {
            field: "page",
            reason: "offset of the requested page is out of range".to_string(),
        }),
    }
}

/// Sorted copy of a client supplied ID list with duplicates removed.
pub fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
