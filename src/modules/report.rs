use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read a written log back, one entry per line, surrounding whitespace trimmed.
pub fn read_back(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect()
}

/// Render lines for the console as `  1. first`, `  2. second`, ...
pub fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("  {}. {}", i + 1, line))
        .collect()
}
