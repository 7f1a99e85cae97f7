use thiserror::Error;

use crate::types::Field;

/// Structural failure of a single input row.
///
/// The display text is what ends up in the report, suffixed with the line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid number of columns")]
    ColumnCount,
    #[error("{0} is missing")]
    Missing(Field),
    #[error("{0} is not a valid number")]
    InvalidNumber(Field),
    #[error("{0} is not a valid text")]
    InvalidText(Field),
    #[error("Row is not an object")]
    NotAnObject,
    #[error("Row contains invalid UTF-8")]
    InvalidEncoding,
    #[error("Malformed row: {0}")]
    Malformed(String)
}
