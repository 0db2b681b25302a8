use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;

use daylog::modules::{
    config::Config,
    fetcher::fetch_record_from,
    logger,
    report::{numbered, read_back},
    types::LogBatch,
    writer::write_log_in,
};

// -------------------- Config --------------------
const SAMPLE_ENTRIES: [&str; 3] = ["User logged in", "User updated profile", "Report exported"];

/// Flow: fetch → build batch → write → verify.
///
/// The fetch is awaited before anything touches the filesystem, so a slow or
/// dead endpoint only delays the write and never changes its outcome beyond
/// the missing enrichment line.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cfg = Config::parse();
    logger::init(cfg.mirror.clone());

    // --- Fetch ---
    let record = if cfg.offline {
        Default::default()
    } else {
        fetch_record_from(cfg.endpoint.as_str()).await
    };

    // --- Build batch ---
    let mut batch = match &cfg.entries {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading entries from {}", path.display()))?;
            LogBatch::from_json_str(&text)
                .with_context(|| format!("loading entries from {}", path.display()))?
        }
        None => SAMPLE_ENTRIES.into_iter().collect(),
    };
    if !record.is_empty() {
        batch.enrich_with(&record);
        logger::logln(format!(
            "Fetched Post Title: {}",
            record.title_or_placeholder()
        ));
    }

    // --- Write ---
    let path = write_log_in(&cfg.dir, Local::now().date_naive(), batch.entries())
        .with_context(|| format!("writing log into {}", cfg.dir.display()))?;

    // --- Verify ---
    if !path.exists() {
        logger::warnln(format!("Failed to create log file: {}", path.display()));
        return Ok(ExitCode::FAILURE);
    }
    logger::logln(format!("Successfully created log file: {}", path.display()));
    logger::logln("\nFile contents:".to_string());
    let lines = read_back(&path).with_context(|| format!("reading back {}", path.display()))?;
    for line in numbered(&lines) {
        logger::logln(line);
    }

    Ok(ExitCode::SUCCESS)
}
