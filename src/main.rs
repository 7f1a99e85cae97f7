mod config;
mod engine;
mod errors;
mod models;
mod processors;
mod storage;
mod types;
mod writers;

use std::fs::File;
use std::io::{stderr, stdout, BufWriter};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Config;
use crate::engine::{Upload, ValidationEngine};
use crate::errors::{ErrorFormatter, UploadError};
use crate::models::Batch;
use crate::storage::{BatchStorage, TransactionStorage};
use crate::writers::{ResponseSink, CONTENT_DISPOSITION};

const VALIDATION_FAILURE: i32 = 1;
const FATAL_FAILURE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("Usage: upload-validator [input].csv|[input].json [log_level:optional] > [report]");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(VALIDATION_FAILURE);
        }
    };

    setup_logging(config.log_level);

    let batches = Arc::new(BatchStorage::new());
    let transactions = Arc::new(TransactionStorage::new());
    let engine = ValidationEngine::new(batches, transactions);

    let timer = Instant::now();
    let input = config.input.clone();

    //NOTE: Parsing and storage are synchronous, so the whole upload runs on the blocking pool
    let result = spawn_blocking(move || run_upload(&engine, &input)).await?;
    let duration = timer.elapsed();

    match result {
        Ok(batch) => {
            info!("Batch [{}] finished as [{}] in: {duration:?}", batch.id, batch.status);
            Ok(())
        }
        Err(failure) => {
            let formatter = ErrorFormatter::new(config.expose_internal_errors, config.locale);
            let body = formatter.format(&failure);

            info!("Upload rejected with status [{}] after: {duration:?}", body.status);
            eprintln!("{}", serde_json::to_string(&body.errors)?);

            exit(if failure.is_client_error() { VALIDATION_FAILURE } else { FATAL_FAILURE });
        }
    }
}

fn run_upload(engine: &ValidationEngine<BatchStorage, TransactionStorage>, input: &Path) -> Result<Batch, UploadError> {
    let file = File::open(input)?;
    let file_name = input.file_name().map(|name| name.to_string_lossy().into_owned());
    let upload = Upload { file_name, content: Box::new(file) };

    let mut response = ResponseSink::new(BufWriter::new(stdout().lock()));
    let result = engine.upload(upload, &mut response);

    if let Some(content_type) = response.content_type() {
        info!("Report content type: {content_type}");
    }

    if let Some(disposition) = response.header(CONTENT_DISPOSITION) {
        info!("Report {CONTENT_DISPOSITION}: {disposition}");
    }

    response.complete(result)
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging has to go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
