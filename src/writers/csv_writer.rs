use std::io::Write;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::errors::UploadError;
use crate::models::Report;
use crate::writers::ReportWriter;

const HEADERS: [&str; 3] = ["Reference", "Description", "Error Message"];

/// Writes reports as always-quoted CSV with a fixed three column header.
pub struct CsvReportWriter<'a> {
    writer: Writer<&'a mut dyn Write>
}

impl<'a> CsvReportWriter<'a> {
    pub fn new(body: &'a mut dyn Write) -> Result<Self, UploadError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(body);

        writer.write_record(HEADERS)?;

        Ok(Self { writer })
    }
}

impl ReportWriter for CsvReportWriter<'_> {
    fn write(&mut self, report: &Report) -> Result<(), UploadError> {
        let reference = report.reference.map(|reference| reference.to_string()).unwrap_or_default();
        let description = report.description.as_deref().unwrap_or_default();

        self.writer.write_record([reference.as_str(), description, report.error_message.as_str()])?;

        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<(), UploadError> {
        self.writer.flush()?;

        Ok(())
    }
}
