//! Date-stamped log file writer with an optional best-effort remote enrichment.
//!
//! The pieces live under [`modules`]:
//! - `writer`: writes a batch to `log_<YYYYMMDD>.txt`, one entry per line
//! - `fetcher`: one GET to a JSON endpoint, degrading to an empty record
//! - `types`: `LogBatch` and `FetchedRecord`
//! - `report`: reads a written log back for operator verification
//! - `config`, `logger`, `error`: ambient plumbing
pub mod modules;

pub use modules::error::{LogError, Result};
pub use modules::fetcher::{fetch_record_from, fetch_remote_record, DEFAULT_ENDPOINT};
pub use modules::types::{FetchedRecord, LogBatch};
pub use modules::writer::{log_filename, write_log, write_log_in};
