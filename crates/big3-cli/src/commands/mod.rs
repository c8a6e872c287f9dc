use big3_core::ValidationError;

pub mod config;
pub mod exercises;
pub mod workout;

/// Convert a position typed by the user (1-based) to an index.
pub(crate) fn one_based(field: &str, n: usize) -> Result<usize, ValidationError> {
    n.checked_sub(1).ok_or_else(|| ValidationError::InvalidValue {
        field: field.into(),
        message: "positions start at 1".into(),
    })
}
