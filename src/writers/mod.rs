mod csv_writer;
mod json_writer;
mod response;

use crate::errors::UploadError;
use crate::models::Report;

pub use csv_writer::CsvReportWriter;
pub use json_writer::JsonReportWriter;
pub use response::{attachment, ReportResponse, ResponseSink, CONTENT_DISPOSITION};

/// Streams reports for exactly one batch.
///
/// `finish` terminates the envelope and flushes. A writer dropped without `finish` releases
/// its sink on a best-effort basis and only logs failures.
pub trait ReportWriter {
    fn write(&mut self, report: &Report) -> Result<(), UploadError>;
    fn finish(self: Box<Self>) -> Result<(), UploadError>;
}
