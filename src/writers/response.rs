use std::io::Write;

use tracing::warn;

use crate::errors::UploadError;
use crate::types::BatchId;

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// The outgoing side of an upload: response metadata plus a streaming body.
pub trait ReportResponse {
    fn set_content_type(&mut self, content_type: &str);
    fn set_header(&mut self, name: &str, value: String);
    fn body(&mut self) -> &mut dyn Write;
}

pub fn attachment(batch_id: BatchId, extension: &str) -> String {
    format!("attachment; filename=upload-report-{batch_id}.{extension}")
}

/// A `ReportResponse` over any `Write`, used for stdout and in-memory buffers alike.
pub struct ResponseSink<W: Write> {
    content_type: Option<String>,
    headers: Vec<(String, String)>,
    body: W
}

impl<W: Write> ResponseSink<W> {
    pub fn new(body: W) -> Self {
        Self {
            content_type: None,
            headers: Vec::new(),
            body
        }
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .rev()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn into_body(self) -> W {
        self.body
    }

    /// Flushes the body once the upload is done and hands back its outcome.
    ///
    /// A flush failure only replaces a successful outcome. After a failed upload it is logged.
    pub fn complete<T>(self, outcome: Result<T, UploadError>) -> Result<T, UploadError> {
        let mut body = self.into_body();

        match (outcome, body.flush()) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(flush_error)) => Err(flush_error.into()),
            (Err(failure), Ok(())) => Err(failure),
            (Err(failure), Err(flush_error)) => {
                warn!("Failed to flush report after upload failure: {flush_error}");
                Err(failure)
            }
        }
    }
}

impl<W: Write> ReportResponse for ResponseSink<W> {
    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn set_header(&mut self, name: &str, value: String) {
        self.headers.push((name.to_string(), value));
    }

    fn body(&mut self) -> &mut dyn Write {
        &mut self.body
    }
}
