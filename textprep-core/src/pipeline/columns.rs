//! Column-oriented intermediate between normalization and output.

use textprep_types::CleanedRecord;

/// Joins the three cleaned fields into the output `text` value.
///
/// Segments are joined with single spaces even when empty, so an empty
/// field shows up as a doubled (or leading/trailing) space.
pub fn join_text(title: &str, question: &str, answer: &str) -> String {
    let mut text = String::with_capacity(title.len() + question.len() + answer.len() + 2);
    text.push_str(title);
    text.push(' ');
    text.push_str(question);
    text.push(' ');
    text.push_str(answer);
    text
}

/// Four parallel sequences, one entry per source row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedColumns {
    /// Cleaned titles.
    pub title: Vec<String>,
    /// Cleaned question bodies.
    pub question: Vec<String>,
    /// Cleaned answers.
    pub answer: Vec<String>,
    /// Labels, unchanged.
    pub class: Vec<String>,
}

impl CleanedColumns {
    /// Creates empty columns with room for `rows` entries.
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            title: Vec::with_capacity(rows),
            question: Vec::with_capacity(rows),
            answer: Vec::with_capacity(rows),
            class: Vec::with_capacity(rows),
        }
    }

    /// Appends one row.
    pub fn push(&mut self, title: String, question: String, answer: String, class: String) {
        self.title.push(title);
        self.question.push(question);
        self.answer.push(answer);
        self.class.push(class);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        debug_assert!(
            self.title.len() == self.class.len()
                && self.question.len() == self.class.len()
                && self.answer.len() == self.class.len(),
            "cleaned columns out of step"
        );
        self.class.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cleaned fields that came out empty.
    pub fn empty_fields(&self) -> usize {
        [&self.title, &self.question, &self.answer]
            .iter()
            .flat_map(|col| col.iter())
            .filter(|s| s.is_empty())
            .count()
    }

    /// Assembles the two-column output rows, preserving row order.
    pub fn into_records(self) -> Vec<CleanedRecord> {
        let rows = self.len();
        let mut out = Vec::with_capacity(rows);

        let iter = self
            .title
            .into_iter()
            .zip(self.question)
            .zip(self.answer)
            .zip(self.class);

        for (((title, question), answer), class) in iter {
            out.push(CleanedRecord {
                text: join_text(&title, &question, &answer),
                class,
            });
        }

        out
    }
}
