use std::io::Write;

use tracing::warn;

use crate::errors::UploadError;
use crate::models::Report;
use crate::writers::ReportWriter;

/// Writes reports as the elements of a single JSON array.
pub struct JsonReportWriter<'a> {
    body: &'a mut dyn Write,
    written: usize,
    finished: bool
}

impl<'a> JsonReportWriter<'a> {
    pub fn new(body: &'a mut dyn Write) -> Result<Self, UploadError> {
        body.write_all(b"[")?;

        Ok(Self {
            body,
            written: 0,
            finished: false
        })
    }

    fn close(&mut self) -> Result<(), UploadError> {
        self.finished = true;
        self.body.write_all(b"]")?;
        self.body.flush()?;

        Ok(())
    }
}

impl ReportWriter for JsonReportWriter<'_> {
    fn write(&mut self, report: &Report) -> Result<(), UploadError> {
        if self.written > 0 {
            self.body.write_all(b",")?;
        }

        serde_json::to_writer(&mut *self.body, report)?;
        self.written += 1;

        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<(), UploadError> {
        self.close()
    }
}

impl Drop for JsonReportWriter<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(error) = self.close() {
            warn!("Failed to close JSON report after [{}] entries: {error}", self.written);
        }
    }
}
