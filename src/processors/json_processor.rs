use std::io;
use std::io::BufRead;

use serde::Deserialize;
use serde_json::{Deserializer, Map, Value};
use tracing::{debug, warn};

use crate::errors::{StatusError, UploadError};
use crate::models::{RowResult, RowValue};
use crate::processors::{FileProcessor, RowStream};
use crate::types::{BatchId, DecodeError, LineNumber};
use crate::writers::{attachment, JsonReportWriter, ReportResponse, ReportWriter, CONTENT_DISPOSITION};

pub struct JsonProcessor;

impl FileProcessor for JsonProcessor {
    fn supports(&self) -> &'static str {
        "json"
    }

    fn read<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RowStream<'a>, UploadError> {
        Ok(Box::new(JsonRowReader::open(input)?))
    }

    fn create_writer<'a>(&self, batch_id: BatchId, response: &'a mut dyn ReportResponse) -> Result<Box<dyn ReportWriter + 'a>, UploadError> {
        response.set_content_type("application/json");
        response.set_header(CONTENT_DISPOSITION, attachment(batch_id, self.supports()));

        Ok(Box::new(JsonReportWriter::new(response.body())?))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Position {
    Start,
    AfterElement
}

enum Next {
    Element,
    End,
    Unexpected(String)
}

/// Reads the objects of a top-level JSON array one at a time.
///
/// Only the element being decoded is held in memory. The separators between elements are
/// consumed here so that each object can be handed to its own `serde_json` deserializer.
pub struct JsonRowReader<R: BufRead> {
    input: R,
    position: Position,
    line_number: LineNumber,
    finished: bool
}

impl<R: BufRead> JsonRowReader<R> {
    /// Consumes the opening bracket. Any other top-level value is rejected before iteration starts.
    pub fn open(mut input: R) -> Result<Self, UploadError> {
        match peek_token(&mut input)? {
            Some(b'[') => input.consume(1),
            _ => return Err(StatusError::invalid_json().into())
        }

        Ok(Self {
            input,
            position: Position::Start,
            line_number: 0,
            finished: false
        })
    }

    fn advance(&mut self) -> io::Result<Next> {
        let token = peek_token(&mut self.input)?;

        let token = match (self.position, token) {
            (_, None) => return Ok(Next::Unexpected("unexpected end of input".to_string())),
            (_, Some(b']')) => {
                self.input.consume(1);
                return Ok(Next::End);
            }
            (Position::Start, Some(_)) => token,
            (Position::AfterElement, Some(b',')) => {
                self.input.consume(1);
                peek_token(&mut self.input)?
            }
            (Position::AfterElement, Some(other)) => {
                return Ok(Next::Unexpected(format!("expected ',' or ']' but found '{}'", char::from(other))));
            }
        };

        match token {
            None => Ok(Next::Unexpected("unexpected end of input".to_string())),
            Some(b']') => Ok(Next::Unexpected("trailing comma".to_string())),
            Some(_) => Ok(Next::Element)
        }
    }

    fn read_element(&mut self) -> Result<RowResult, UploadError> {
        self.position = Position::AfterElement;

        //NOTE: Only objects are handed to serde_json. A scalar element would make the deserializer
        //      peek (and lose) the following separator.
        if peek_token(&mut self.input)? != Some(b'{') {
            self.finished = true;
            return Ok(RowResult::decoded(Err(DecodeError::NotAnObject), self.line_number));
        }

        let mut deserializer = Deserializer::from_reader(&mut self.input);

        match Map::<String, Value>::deserialize(&mut deserializer) {
            Ok(object) => Ok(RowResult::decoded(RowValue::from_object(&object), self.line_number)),
            Err(error) if error.is_io() => Err(error.into()),
            Err(error) => {
                self.finished = true;
                Ok(RowResult::decoded(Err(DecodeError::Malformed(error.to_string())), self.line_number))
            }
        }
    }
}

impl<R: BufRead> Iterator for JsonRowReader<R> {
    type Item = Result<RowResult, UploadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = match self.advance() {
            Ok(next) => next,
            Err(error) => {
                self.finished = true;
                return Some(Err(error.into()));
            }
        };

        match next {
            Next::End => {
                self.finished = true;
                None
            }
            Next::Unexpected(detail) => {
                self.finished = true;
                self.line_number += 1;
                Some(Ok(RowResult::decoded(Err(DecodeError::Malformed(detail)), self.line_number)))
            }
            Next::Element => {
                self.line_number += 1;
                let result = self.read_element();

                if result.is_err() {
                    self.finished = true;
                }

                Some(result)
            }
        }
    }
}

impl<R: BufRead> Drop for JsonRowReader<R> {
    fn drop(&mut self) {
        if self.finished {
            debug!("JSON input released after [{}] rows", self.line_number);
        } else {
            warn!("JSON input released early after [{}] rows", self.line_number);
        }
    }
}

/// Skips JSON whitespace and returns the next byte without consuming it.
fn peek_token<R: BufRead>(input: &mut R) -> io::Result<Option<u8>> {
    loop {
        let buffer = input.fill_buf()?;

        if buffer.is_empty() {
            return Ok(None);
        }

        match buffer.iter().position(|byte| !matches!(byte, b' ' | b'\t' | b'\n' | b'\r')) {
            Some(index) => {
                let token = buffer[index];
                input.consume(index);
                return Ok(Some(token));
            }
            None => {
                let length = buffer.len();
                input.consume(length);
            }
        }
    }
}
