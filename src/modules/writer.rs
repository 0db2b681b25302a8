use chrono::{Local, NaiveDate};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::modules::error::Result;
use crate::modules::logger;

/// `log_<YYYYMMDD>.txt` for the given calendar date.
pub fn log_filename(date: NaiveDate) -> String {
    format!("log_{}.txt", date.format("%Y%m%d"))
}

/// Write `entries` to today's log file in the current working directory.
///
/// Returns the bare filename (relative to the working directory). An existing
/// file for the same date is overwritten, not appended to.
pub fn write_log<E: Display>(entries: &[E]) -> Result<String> {
    let filename = log_filename(Local::now().date_naive());
    write_entries(Path::new(&filename), entries)?;
    logger::logln(format!("Log written to {}", filename));
    Ok(filename)
}

/// Same as [`write_log`] but into `dir` and for an explicit `date`.
/// Returns the full path of the written file.
pub fn write_log_in<E: Display>(dir: &Path, date: NaiveDate, entries: &[E]) -> Result<PathBuf> {
    let path = dir.join(log_filename(date));
    write_entries(&path, entries)?;
    logger::logln(format!("Log written to {}", path.display()));
    Ok(path)
}

fn write_entries<E: Display>(path: &Path, entries: &[E]) -> Result<()> {
    // create() truncates; the handle closes on drop
    let mut out = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;
    Ok(())
}
