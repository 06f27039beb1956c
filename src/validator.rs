use thiserror::Error;

use crate::dataset::Dataset;

/// Why a parsed dataset was rejected.
///
/// The `Display` text is the user-facing status message, shown verbatim
/// in the file-status line of the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Dataset must have at least 1 row and 1 column, and a header.")]
    EmptyOrMalformed,

    #[error("Dataset must be entirely numerical, except for the header.")]
    NonNumericColumn,
}

/// Check a dataset for the minimal shape and type constraints.
///
/// Pure and deterministic: no side effects, same verdict for the same
/// dataset every time.
///
/// - Zero rows or zero columns fail with [`ValidationError::EmptyOrMalformed`].
/// - Any textual (non-numeric, non-missing) cell fails with
///   [`ValidationError::NonNumericColumn`].
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    if dataset.n_rows() < 1 || dataset.n_cols() < 1 {
        return Err(ValidationError::EmptyOrMalformed);
    }

    for row in &dataset.rows {
        if row.iter().any(|cell| !cell.is_numeric()) {
            return Err(ValidationError::NonNumericColumn);
        }
    }

    Ok(())
}
