//! Dataset cleaning driver.
//!
//! One run is a single linear pass:
//!
//! ```text
//! source.csv ──load──▶ Vec<Record> ──normalize──▶ CleanedColumns ──join──▶ Vec<CleanedRecord> ──write──▶ dest.csv
//! ```
//!
//! The source is read and validated in full before the destination is
//! created, so a missing or malformed source never leaves an output file.
//!
//! Threading:
//! - Runs are synchronous and single-threaded. A [`Pipeline`] holds only
//!   read-only state, so separate runs never interfere.

mod columns;
mod loader;
mod stats;
mod writer;

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use textprep_types::{Cell, CleanedRecord, MissingPolicy, Record};

use crate::analyzer::{NormalizerConfig, StopwordFilter, TextNormalizer};
use crate::error::{PipelineError, Result};

pub use columns::{join_text, CleanedColumns};
pub use loader::{load_records, read_records};
pub use stats::RunStats;
pub use writer::{save_cleaned, write_cleaned};

/// Pipeline configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Per-field normalization switches.
    pub normalizer: NormalizerConfig,
    /// How missing cells are detected and rendered.
    pub missing: MissingPolicy,
    /// Field delimiter of the source file. Output is always comma-separated.
    pub delimiter: u8,
    /// Words removed in addition to the bundled English stopwords.
    pub extra_stopwords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            missing: MissingPolicy::Empty,
            delimiter: b',',
            extra_stopwords: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Matches older tooling's `nan` placeholder for missing text.
    pub fn compat() -> Self {
        Self {
            missing: MissingPolicy::Compat,
            ..Self::default()
        }
    }
}

/// A configured cleaning pipeline.
///
/// The stopword set is built once here and shared by every cell of every run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    normalizer: TextNormalizer,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    /// Creates a pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        let mut stopwords = StopwordFilter::english();
        stopwords.extend(&config.extra_stopwords);
        let normalizer = TextNormalizer::with_stopwords(config.normalizer, stopwords);
        Self { config, normalizer }
    }

    /// Active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Normalizer applied to each text field.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Coerces a cell to text and normalizes it.
    pub fn normalize_cell(&self, cell: &Cell) -> String {
        self.normalizer.normalize(cell.as_text(self.config.missing))
    }

    /// Normalizes title, content and answer of every record. The class is
    /// carried through unchanged, with a missing class left empty.
    pub fn clean(&self, records: &[Record]) -> CleanedColumns {
        let mut columns = CleanedColumns::with_capacity(records.len());
        for record in records {
            columns.push(
                self.normalize_cell(&record.title),
                self.normalize_cell(&record.content),
                self.normalize_cell(&record.answer),
                record.class.as_str().unwrap_or_default().to_owned(),
            );
        }
        columns
    }

    /// Cleans records straight into output rows.
    pub fn clean_records(&self, records: &[Record]) -> Vec<CleanedRecord> {
        self.clean(records).into_records()
    }

    /// Cleans `source` and writes the result to `dest`.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read or parsed, has no rows, has a row
    /// with fewer than four fields, or if the destination cannot be written.
    /// Every source error is raised before the destination is created.
    pub fn run(&self, source: &Path, dest: &Path) -> Result<RunStats> {
        let started = Instant::now();
        tracing::info!(
            source = %source.display(),
            dest = %dest.display(),
            missing = ?self.config.missing,
            "cleaning dataset"
        );

        let records = load_records(source, self.config.delimiter, self.config.missing)?;
        if records.is_empty() {
            return Err(PipelineError::EmptySource {
                path: source.to_path_buf(),
            });
        }

        let (cleaned, mut stats) = self.process(&records);
        save_cleaned(dest, &cleaned)?;
        stats.rows_written = cleaned.len();
        stats.elapsed = started.elapsed();

        tracing::info!(
            rows = stats.rows_written,
            missing_cells = stats.missing_cells,
            empty_fields = stats.empty_fields,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "dataset cleaned"
        );
        Ok(stats)
    }

    /// Reader/writer variant of [`Pipeline::run`].
    ///
    /// An empty source is not an error here; it produces a header-only output.
    pub fn run_streams<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<RunStats> {
        let started = Instant::now();
        let records = read_records(reader, self.config.delimiter, self.config.missing)?;

        let (cleaned, mut stats) = self.process(&records);
        write_cleaned(writer, &cleaned)?;
        stats.rows_written = cleaned.len();
        stats.elapsed = started.elapsed();
        Ok(stats)
    }

    fn process(&self, records: &[Record]) -> (Vec<CleanedRecord>, RunStats) {
        let columns = self.clean(records);
        let stats = RunStats::collect(records, &columns, self.config.missing);
        (columns.into_records(), stats)
    }
}

/// Cleans `source` into `dest` with the default configuration.
pub fn clean_and_save(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<RunStats> {
    Pipeline::default().run(source.as_ref(), dest.as_ref())
}
