//! Run statistics.

use core::fmt;
use std::time::Duration;

use textprep_types::{Column, MissingPolicy, Record};

use super::columns::CleanedColumns;

/// A summary of one cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    /// Rows parsed from the source.
    pub rows_read: usize,
    /// Rows written to the destination.
    pub rows_written: usize,
    /// Cells (any column) classified as missing.
    pub missing_cells: usize,
    /// Text fields that normalized to the empty string.
    pub empty_fields: usize,
    /// Bytes of text fed into the normalizer.
    pub input_bytes: usize,
    /// Bytes of `text` produced.
    pub output_bytes: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl RunStats {
    /// Tallies a cleaned batch against its source records.
    pub fn collect(records: &[Record], columns: &CleanedColumns, policy: MissingPolicy) -> Self {
        let input_bytes = records
            .iter()
            .flat_map(|r| Column::TEXT.into_iter().map(move |c| r.get(c).as_text(policy).len()))
            .sum();

        let output_bytes = (0..columns.len())
            .map(|i| {
                columns.title[i].len() + columns.question[i].len() + columns.answer[i].len() + 2
            })
            .sum();

        Self {
            rows_read: records.len(),
            rows_written: 0,
            missing_cells: records.iter().map(Record::missing_count).sum(),
            empty_fields: columns.empty_fields(),
            input_bytes,
            output_bytes,
            elapsed: Duration::ZERO,
        }
    }

    /// Ratio of output text bytes to input text bytes.
    pub fn retained_ratio(&self) -> f32 {
        if self.input_bytes == 0 {
            return 1.0;
        }
        self.output_bytes as f32 / self.input_bytes as f32
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows={} written={} missing_cells={} empty_fields={} text_bytes={}->{} ({:.1}%) elapsed={:.3}s",
            self.rows_read,
            self.rows_written,
            self.missing_cells,
            self.empty_fields,
            self.input_bytes,
            self.output_bytes,
            self.retained_ratio() * 100.0,
            self.elapsed.as_secs_f64()
        )
    }
}
