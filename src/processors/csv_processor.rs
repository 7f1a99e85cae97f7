use std::io::{BufRead, Read};

use csv::{ErrorKind, Reader, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::errors::UploadError;
use crate::models::{RowResult, RowValue};
use crate::processors::{FileProcessor, RowStream};
use crate::types::{BatchId, DecodeError, LineNumber};
use crate::writers::{attachment, CsvReportWriter, ReportResponse, ReportWriter, CONTENT_DISPOSITION};

pub struct CsvProcessor;

impl FileProcessor for CsvProcessor {
    fn supports(&self) -> &'static str {
        "csv"
    }

    fn read<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RowStream<'a>, UploadError> {
        Ok(Box::new(CsvRowReader::new(input)))
    }

    fn create_writer<'a>(&self, batch_id: BatchId, response: &'a mut dyn ReportResponse) -> Result<Box<dyn ReportWriter + 'a>, UploadError> {
        response.set_content_type("text/csv");
        response.set_header(CONTENT_DISPOSITION, attachment(batch_id, self.supports()));

        Ok(Box::new(CsvReportWriter::new(response.body())?))
    }
}

/// Reads CSV rows after skipping exactly one header line.
pub struct CsvRowReader<R: Read> {
    reader: Reader<R>,
    record: StringRecord,
    line_number: LineNumber,
    finished: bool
}

impl<R: Read> CsvRowReader<R> {
    pub fn new(input: R) -> Self {
        //NOTE: flexible so that a wrong column count is reported per row rather than by the csv crate
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        Self {
            reader,
            record: StringRecord::new(),
            line_number: 0,
            finished: false
        }
    }
}

impl<R: Read> Iterator for CsvRowReader<R> {
    type Item = Result<RowResult, UploadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.reader.read_record(&mut self.record) {
            Ok(false) => {
                self.finished = true;
                None
            }
            Ok(true) => {
                self.line_number += 1;
                Some(Ok(RowResult::decoded(RowValue::from_record(&self.record), self.line_number)))
            }
            Err(error) if error.is_io_error() => {
                self.finished = true;
                Some(Err(error.into()))
            }
            Err(error) => {
                self.line_number += 1;
                let decode_error = match error.kind() {
                    ErrorKind::Utf8 { .. } => DecodeError::InvalidEncoding,
                    _ => DecodeError::Malformed(error.to_string())
                };

                Some(Ok(RowResult::decoded(Err(decode_error), self.line_number)))
            }
        }
    }
}

impl<R: Read> Drop for CsvRowReader<R> {
    fn drop(&mut self) {
        if self.finished {
            debug!("CSV input released after [{}] rows", self.line_number);
        } else {
            warn!("CSV input released early after [{}] rows", self.line_number);
        }
    }
}
