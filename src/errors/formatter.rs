use serde::Serialize;
use tracing::{debug, error};

use crate::errors::messages::INTERNAL_ERROR;
use crate::errors::{Locale, UploadError};

const INTERNAL_SERVER_ERROR: u16 = 500;
const INTERNAL_POINTER: &str = "/server/internal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub pointer: String
}

/// Status plus the error list that goes back to the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: u16,
    pub errors: Vec<ErrorResponse>
}

/// Turns a failed upload into a client facing error body.
///
/// With `expose_internal_errors` unset, fatal failures only ever show a fixed localized message.
#[derive(Debug, Clone, Copy)]
pub struct ErrorFormatter {
    expose_internal_errors: bool,
    locale: Locale
}

impl ErrorFormatter {
    pub fn new(expose_internal_errors: bool, locale: Locale) -> Self {
        Self { expose_internal_errors, locale }
    }

    pub fn format(&self, failure: &UploadError) -> ErrorBody {
        match failure {
            UploadError::Status(status) => {
                debug!("Got status error: {status}");

                ErrorBody {
                    status: status.status,
                    errors: vec![ErrorResponse {
                        code: status.code.to_string(),
                        message: self.locale.message(status.code, &status.args),
                        pointer: status.pointer.to_string()
                    }]
                }
            }
            other => {
                error!("Upload failed: {other}");

                let message = if self.expose_internal_errors {
                    other.to_string()
                } else {
                    self.locale.message(INTERNAL_ERROR, &[])
                };

                ErrorBody {
                    status: INTERNAL_SERVER_ERROR,
                    errors: vec![ErrorResponse {
                        code: INTERNAL_ERROR.to_string(),
                        message,
                        pointer: INTERNAL_POINTER.to_string()
                    }]
                }
            }
        }
    }
}
