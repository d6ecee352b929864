//! Source loading.
//!
//! The whole source is parsed into memory before any cleaning starts, so a
//! malformed row anywhere in the file aborts the run before the destination
//! is touched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use smallvec::SmallVec;
use textprep_types::{MissingPolicy, Record, SOURCE_COLUMNS};

use crate::error::{PipelineError, Result};

/// Parses headerless delimited rows into records.
///
/// Blank lines are skipped. Fields past the fourth are ignored.
///
/// # Errors
///
/// Returns `PipelineError::Csv` for malformed input and
/// `PipelineError::Record` for a row with fewer than four fields.
pub fn read_records<R: Read>(
    reader: R,
    delimiter: u8,
    policy: MissingPolicy,
) -> Result<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut wide_rows = 0usize;

    for row in rdr.records() {
        let row = row?;
        if row.len() <= 1 && row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() > SOURCE_COLUMNS {
            wide_rows += 1;
        }

        let line = row.position().map_or(0, |p| p.line());
        let fields: SmallVec<[&str; SOURCE_COLUMNS]> = row.iter().take(SOURCE_COLUMNS).collect();
        records.push(Record::from_fields(&fields, line, policy)?);
    }

    if wide_rows > 0 {
        tracing::warn!(rows = wide_rows, "ignoring fields past the fourth column");
    }
    tracing::debug!(rows = records.len(), "source parsed");

    Ok(records)
}

/// Opens `path` and parses every row.
///
/// # Errors
///
/// Returns `PipelineError::Open` if the file cannot be opened, otherwise
/// the errors of [`read_records`].
pub fn load_records(path: &Path, delimiter: u8, policy: MissingPolicy) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file, delimiter, policy)
}
