//! CSV loader for a day of junction survey records.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::record::TrafficRecord;

/// Reads every data row of `path` into memory, skipping the header line.
///
/// A missing file is not an error: a notice is printed and an empty dataset
/// is returned so the caller can report "no data".
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened or read.
pub fn read_dataset(path: &Path) -> Result<Vec<TrafficRecord>> {
    let mut stdout = std::io::stdout();
    load_dataset(path, &mut stdout)
}

/// Like [`read_dataset`], writing the missing-file notice to `out`.
pub fn load_dataset<W: Write>(path: &Path, out: &mut W) -> Result<Vec<TrafficRecord>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Survey file not found");
            writeln!(
                out,
                "Error: The file {} was not found. Please check the file path.",
                path.display()
            )?;
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to open {}", path.display()));
        }
    };

    let records =
        parse_records(file).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), rows = records.len(), "Survey file loaded");
    Ok(records)
}

/// Parses CSV text with a header row into records. Rows of any arity are kept.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TrafficRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(TrafficRecord::from_csv(&row));
    }

    Ok(records)
}
