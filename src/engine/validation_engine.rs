use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::engine::BatchSummary;
use crate::errors::{StatusError, UploadError};
use crate::models::{Batch, Report, RowResult, RowValue, BALANCE_MISMATCH, DUPLICATE_REFERENCE};
use crate::processors::{FileProcessor, ProcessorRegistry};
use crate::storage::{BatchRepository, StorageError, TransactionRepository};
use crate::types::BatchId;
use crate::writers::ReportResponse;

/// An uploaded file: its original name (if the client sent one) and its content.
pub struct Upload<'a> {
    pub file_name: Option<String>,
    pub content: Box<dyn Read + 'a>
}

impl<'a> Upload<'a> {
    pub fn new(file_name: impl Into<String>, content: impl Read + 'a) -> Self {
        Self {
            file_name: Some(file_name.into()),
            content: Box::new(content)
        }
    }
}

/// Drives one upload from raw bytes to a streamed report.
///
/// Structural and business rule failures are written to the report and never abort the batch.
/// Only transport and storage failures are fatal: the batch is marked `Failed` and the error
/// is returned to the caller.
pub struct ValidationEngine<B: BatchRepository, T: TransactionRepository> {
    batches: Arc<B>,
    transactions: Arc<T>,
    registry: ProcessorRegistry
}

impl<B: BatchRepository, T: TransactionRepository> ValidationEngine<B, T> {
    /// Creates a new engine supporting the CSV and JSON formats.
    pub fn new(batches: Arc<B>, transactions: Arc<T>) -> Self {
        Self {
            batches,
            transactions,
            registry: ProcessorRegistry::default()
        }
    }

    pub fn with_registry(mut self, registry: ProcessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Validates `upload` and streams one report entry per problematic row into `response`.
    ///
    /// Request-validation failures (empty file, missing name, unsupported extension) are returned
    /// before any batch exists. Once the batch is created it always ends in a terminal status.
    pub fn upload(&self, upload: Upload<'_>, response: &mut dyn ReportResponse) -> Result<Batch, UploadError> {
        let mut content = BufReader::new(upload.content);

        if content.fill_buf()?.is_empty() {
            return Err(StatusError::empty_file().into());
        }

        let file_name = upload.file_name
            .filter(|file_name| !file_name.is_empty())
            .ok_or_else(StatusError::missing_file_name)?;
        let processor = self.registry.get_processor(&file_name)?;

        let mut batch = Batch::new();
        self.batches.save(&batch)?;

        info!("Batch [{}] started for [{file_name}]", batch.id);

        match self.process(batch.id, processor.as_ref(), Box::new(content), response) {
            Ok(summary) => {
                batch.complete()?;
                self.batches.save(&batch)?;

                info!("Batch [{}] completed with [{}] reported rows: {summary}", batch.id, summary.reported());

                Ok(batch)
            }
            Err(failure) => {
                error!("Batch [{}] failed: {failure}", batch.id);

                //NOTE: The primary failure is what the caller sees, secondary failures are only logged
                if let Err(transition_error) = batch.fail() {
                    warn!("{transition_error}");
                }

                if let Err(save_error) = self.batches.save(&batch) {
                    error!("Could not persist failed status of batch [{}]: {save_error}", batch.id);
                }

                Err(failure)
            }
        }
    }

    fn process(&self, batch_id: BatchId, processor: &dyn FileProcessor, content: Box<dyn BufRead + '_>, response: &mut dyn ReportResponse) -> Result<BatchSummary, UploadError> {
        let rows = processor.read(content)?;
        let mut writer = processor.create_writer(batch_id, response)?;
        let mut summary = BatchSummary::default();

        for row in rows {
            if let Some(report) = self.check(batch_id, row?, &mut summary)? {
                writer.write(&report)?;
            }
        }

        writer.finish()?;

        Ok(summary)
    }

    fn check(&self, batch_id: BatchId, row: RowResult, summary: &mut BatchSummary) -> Result<Option<Report>, UploadError> {
        summary.rows += 1;

        match row {
            RowResult::Invalid { error, line_number } => {
                summary.invalid += 1;
                debug!("Batch [{batch_id}] row [{line_number}] is invalid: {error}");

                Ok(Some(Report::invalid_row(&error, line_number)))
            }
            RowResult::Valid(value) => self.check_value(batch_id, value, summary)
        }
    }

    fn check_value(&self, batch_id: BatchId, value: RowValue, summary: &mut BatchSummary) -> Result<Option<Report>, UploadError> {
        match self.transactions.save(batch_id, &value) {
            Ok(transaction) => {
                debug!("Transaction [{}] stored for reference [{}]", transaction.id, value.reference);
            }
            Err(StorageError::DuplicateKey { reference }) => {
                summary.duplicates += 1;
                debug!("Batch [{batch_id}] reference [{reference}] is a duplicate");

                return Ok(Some(Report::for_row(&value, DUPLICATE_REFERENCE)));
            }
            Err(error) => return Err(error.into())
        }

        if value.is_balanced() {
            summary.accepted += 1;
            return Ok(None);
        }

        summary.mismatched += 1;
        debug!("Batch [{batch_id}] reference [{}] has a mismatched end balance", value.reference);

        Ok(Some(Report::for_row(&value, BALANCE_MISMATCH)))
    }
}
