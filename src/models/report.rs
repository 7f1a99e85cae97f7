use serde::Serialize;

use crate::models::RowValue;
use crate::types::{LineNumber, Reference};

pub const DUPLICATE_REFERENCE: &str = "Duplicate reference";
pub const BALANCE_MISMATCH: &str = "Ending balance did not match";

/// One entry of the diagnostic output stream.
///
/// `reference` and `description` are only present when the originating row was structurally valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub reference: Option<Reference>,
    pub description: Option<String>,
    pub error_message: String
}

impl Report {
    pub fn invalid_row(error: &str, line_number: LineNumber) -> Self {
        Self {
            reference: None,
            description: None,
            error_message: format!("{error} at line {line_number}")
        }
    }

    pub fn for_row(row: &RowValue, message: &str) -> Self {
        Self {
            reference: Some(row.reference),
            description: Some(row.description.clone()),
            error_message: message.to_string()
        }
    }
}
