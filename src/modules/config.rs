use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::modules::fetcher::DEFAULT_ENDPOINT;

/// Runtime settings. Every flag falls back to an environment variable, and
/// `.env` is loaded before parsing.
#[derive(Parser, Debug, Clone)]
#[command(name = "daylog", about = "Write today's entries to log_<YYYYMMDD>.txt")]
pub struct Config {
    /// Directory the log file is written to
    #[arg(long, env = "DAYLOG_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// JSON endpoint used to enrich the batch
    #[arg(long, env = "DAYLOG_ENDPOINT", default_value = DEFAULT_ENDPOINT, value_parser = Url::parse)]
    pub endpoint: Url,

    /// JSON array of entries to write instead of the built-in sample
    #[arg(long, env = "DAYLOG_ENTRIES")]
    pub entries: Option<PathBuf>,

    /// Skip the remote fetch
    #[arg(long, env = "DAYLOG_OFFLINE")]
    pub offline: bool,

    /// Also append every console line to this file
    #[arg(long, env = "DAYLOG_MIRROR")]
    pub mirror: Option<PathBuf>,
}
