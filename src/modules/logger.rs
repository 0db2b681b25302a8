use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static MIRROR: OnceLock<PathBuf> = OnceLock::new();

/// Mirror every later `logln`/`warnln` line into `path` (appended).
/// Only the first call takes effect.
pub fn init(mirror: Option<PathBuf>) {
    if let Some(path) = mirror {
        let _ = MIRROR.set(path);
    }
}

// Informational line on stdout, mirrored when configured
pub fn logln(message: String) {
    println!("{}", message);
    mirror(&message);
}

// Notice on stderr, mirrored when configured
pub fn warnln(message: String) {
    eprintln!("{}", message);
    mirror(&message);
}

fn mirror(message: &str) {
    if let Some(path) = MIRROR.get() {
        // Keep failures non-fatal; report to stderr
        if let Err(err) = append_to_file(path, message) {
            eprintln!("logger: failed writing to {}: {:?}", path.display(), err);
        }
    }
}

fn append_to_file(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
