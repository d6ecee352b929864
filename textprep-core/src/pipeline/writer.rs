//! Cleaned output serialization.
//!
//! Output is comma-separated with a `text,class` header, minimal quoting and
//! `\n` line endings. The destination is written in place. A failure part
//! way through leaves a truncated file behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use textprep_types::{CleanedRecord, CLEANED_HEADER};

use crate::error::{PipelineError, Result};

/// Writes the header and every record to `writer`.
pub fn write_cleaned<W: Write>(writer: W, records: &[CleanedRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(CLEANED_HEADER)?;
    for record in records {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;

    Ok(())
}

/// Creates (or truncates) `path` and writes the cleaned rows to it.
///
/// # Errors
///
/// Returns `PipelineError::Create` if the file cannot be created.
pub fn save_cleaned(path: &Path, records: &[CleanedRecord]) -> Result<()> {
    let file = File::create(path).map_err(|source| PipelineError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_cleaned(file, records)?;
    tracing::debug!(rows = records.len(), path = %path.display(), "cleaned rows written");
    Ok(())
}
