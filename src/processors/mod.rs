mod csv_processor;
mod json_processor;
mod registry;

use std::io::BufRead;

use crate::errors::UploadError;
use crate::models::RowResult;
use crate::types::BatchId;
use crate::writers::{ReportResponse, ReportWriter};

pub use csv_processor::CsvProcessor;
pub use json_processor::JsonProcessor;
pub use registry::ProcessorRegistry;

/// Lazy, single pass sequence of decoded rows.
///
/// Row-level problems arrive as `Ok(RowResult::Invalid)`. An `Err` is a transport failure,
/// after which the sequence ends. Dropping the stream releases the underlying input.
pub type RowStream<'a> = Box<dyn Iterator<Item = Result<RowResult, UploadError>> + 'a>;

/// One supported upload format: how to read it and how to write its report.
pub trait FileProcessor: Send + Sync {
    /// The file extension (without the dot) this processor handles.
    fn supports(&self) -> &'static str;

    fn read<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RowStream<'a>, UploadError>;

    /// Sets the response metadata and opens a report writer on its body.
    fn create_writer<'a>(&self, batch_id: BatchId, response: &'a mut dyn ReportResponse) -> Result<Box<dyn ReportWriter + 'a>, UploadError>;
}
