//! Core types shared by the textprep dataset cleaner.
//!
//! This crate holds the row-level data model that both the cleaning
//! pipeline and the command-line front end speak:
//!
//! - **Columns**: the fixed positional layout of a source row
//! - **Cells**: a field value that is either text or missing
//! - **Records**: one source row, and its cleaned two-column counterpart
//!
//! It has no dependencies so the model can be reused without pulling in
//! the CSV stack.

#![warn(missing_docs)]

use core::fmt;

/// Number of positional columns every source row must provide.
pub const SOURCE_COLUMNS: usize = 4;

/// Header row written at the top of every cleaned file.
pub const CLEANED_HEADER: [&str; 2] = ["text", "class"];

/// Cell spellings that conventional tabular readers treat as missing.
///
/// Only consulted under [`MissingPolicy::Compat`].
pub const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Positional column of a source row.
///
/// Source files carry no header, so the position is the only thing that
/// gives a field its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Column {
    /// Categorical label, carried through untouched.
    Class = 0,
    /// Question title.
    Title = 1,
    /// Question body.
    Content = 2,
    /// Best answer.
    Answer = 3,
}

impl Column {
    /// All columns in source order.
    pub const ALL: [Column; SOURCE_COLUMNS] =
        [Column::Class, Column::Title, Column::Content, Column::Answer];

    /// The free-text columns that get normalized, in concatenation order.
    pub const TEXT: [Column; 3] = [Column::Title, Column::Content, Column::Answer];

    /// Zero-based position of this column in a source row.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable column name.
    pub const fn name(self) -> &'static str {
        match self {
            Column::Class => "class",
            Column::Title => "title",
            Column::Content => "content",
            Column::Answer => "answer",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How missing cells are detected and rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Only an empty field is missing, and it renders as the empty string.
    #[default]
    Empty,
    /// Empty fields and the [`NA_MARKERS`] are missing, and they render as
    /// the literal `nan`, matching older tooling's placeholder for missing
    /// text. Labels and short rows are still handled as under `Empty`.
    Compat,
}

impl MissingPolicy {
    /// Text a missing cell is coerced to before normalization.
    #[inline]
    pub const fn placeholder(self) -> &'static str {
        match self {
            MissingPolicy::Empty => "",
            MissingPolicy::Compat => "nan",
        }
    }

    /// Returns true if a raw field value counts as missing under this policy.
    #[inline]
    pub fn is_missing(self, raw: &str) -> bool {
        match self {
            MissingPolicy::Empty => raw.is_empty(),
            MissingPolicy::Compat => NA_MARKERS.contains(&raw),
        }
    }
}

/// A single field value as read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A present value, exactly as it appeared in the file.
    Text(String),
    /// No value.
    Missing,
}

impl Cell {
    /// Classifies a raw field under the given policy.
    pub fn read(raw: &str, policy: MissingPolicy) -> Self {
        if policy.is_missing(raw) {
            Cell::Missing
        } else {
            Cell::Text(raw.to_owned())
        }
    }

    /// Coerces the cell to text. Missing cells become the policy placeholder.
    #[inline]
    pub fn as_text(&self, policy: MissingPolicy) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Missing => policy.placeholder(),
        }
    }

    /// The present value, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Missing => None,
        }
    }

    /// Returns true for [`Cell::Missing`].
    #[inline]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_owned())
    }
}

/// One source row: a label and three free-text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Categorical label.
    pub class: Cell,
    /// Question title.
    pub title: Cell,
    /// Question body.
    pub content: Cell,
    /// Best answer.
    pub answer: Cell,
}

impl Record {
    /// Creates a record from four cells.
    pub fn new(
        class: impl Into<Cell>,
        title: impl Into<Cell>,
        content: impl Into<Cell>,
        answer: impl Into<Cell>,
    ) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
            content: content.into(),
            answer: answer.into(),
        }
    }

    /// Builds a record from the raw fields of one source row.
    ///
    /// Fields past the fourth are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TooFewFields`] if the row has fewer than
    /// [`SOURCE_COLUMNS`] fields. `line` is only used for the report.
    pub fn from_fields(
        fields: &[&str],
        line: u64,
        policy: MissingPolicy,
    ) -> Result<Self, RecordError> {
        match fields {
            [class, title, content, answer, ..] => Ok(Self {
                class: Cell::read(class, policy),
                title: Cell::read(title, policy),
                content: Cell::read(content, policy),
                answer: Cell::read(answer, policy),
            }),
            _ => Err(RecordError::TooFewFields {
                line,
                found: fields.len(),
                expected: SOURCE_COLUMNS,
            }),
        }
    }

    /// Returns the cell stored in `column`.
    #[inline]
    pub fn get(&self, column: Column) -> &Cell {
        match column {
            Column::Class => &self.class,
            Column::Title => &self.title,
            Column::Content => &self.content,
            Column::Answer => &self.answer,
        }
    }

    /// Number of missing cells in this row.
    pub fn missing_count(&self) -> usize {
        Column::ALL
            .iter()
            .filter(|&&c| self.get(c).is_missing())
            .count()
    }
}

/// A cleaned output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    /// Normalized title, content and answer joined by single spaces.
    pub text: String,
    /// Label carried over from the source row.
    pub class: String,
}

impl CleanedRecord {
    /// Creates a cleaned record.
    pub fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: class.into(),
        }
    }

    /// Fields in output column order, matching [`CLEANED_HEADER`].
    #[inline]
    pub fn fields(&self) -> [&str; 2] {
        [&self.text, &self.class]
    }
}

impl fmt::Display for CleanedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.class, self.text)
    }
}

/// Errors raised while turning raw fields into a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The row does not have enough fields to assign every column.
    TooFewFields {
        /// 1-based line the row starts on.
        line: u64,
        /// Number of fields actually present.
        found: usize,
        /// Number of fields required.
        expected: usize,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::TooFewFields {
                line,
                found,
                expected,
            } => {
                write!(
                    f,
                    "row on line {} has {} fields (expected at least {})",
                    line, found, expected
                )
            }
        }
    }
}

impl core::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_positions_match_source_layout() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
        assert_eq!(Column::Title.to_string(), "title");
    }

    #[test]
    fn empty_policy_only_treats_blank_as_missing() {
        let policy = MissingPolicy::Empty;
        assert!(policy.is_missing(""));
        assert!(!policy.is_missing("NA"));
        assert!(!policy.is_missing("nan"));
        assert_eq!(Cell::read("", policy).as_text(policy), "");
    }

    #[test]
    fn compat_policy_recognizes_na_markers() {
        let policy = MissingPolicy::Compat;
        for marker in NA_MARKERS {
            assert!(policy.is_missing(marker), "{marker:?} should be missing");
        }
        assert!(!policy.is_missing(" NA"));
        assert!(!policy.is_missing("none"));
        assert_eq!(Cell::read("NULL", policy).as_text(policy), "nan");
    }

    #[test]
    fn from_fields_assigns_by_position() {
        let record =
            Record::from_fields(&["3", "Title", "", "Answer"], 1, MissingPolicy::Empty).unwrap();
        assert_eq!(record.class, Cell::from("3"));
        assert_eq!(record.title, Cell::from("Title"));
        assert_eq!(record.content, Cell::Missing);
        assert_eq!(record.content.as_str(), None);
        assert_eq!(record.class.as_str(), Some("3"));
        assert_eq!(record.get(Column::Answer), &Cell::from("Answer"));
        assert_eq!(record.missing_count(), 1);
    }

    #[test]
    fn from_fields_ignores_extra_columns() {
        let record =
            Record::from_fields(&["1", "a", "b", "c", "extra"], 1, MissingPolicy::Empty).unwrap();
        assert_eq!(record, Record::new("1", "a", "b", "c"));
    }

    #[test]
    fn from_fields_rejects_short_rows() {
        let err = Record::from_fields(&["1", "a"], 7, MissingPolicy::Empty).unwrap_err();
        assert_eq!(
            err,
            RecordError::TooFewFields {
                line: 7,
                found: 2,
                expected: 4
            }
        );
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn cleaned_record_fields_follow_header_order() {
        let row = CleanedRecord::new("hello world", "1");
        assert_eq!(row.fields(), ["hello world", "1"]);
        assert_eq!(CLEANED_HEADER, ["text", "class"]);
        assert_eq!(row.to_string(), "[1] hello world");
    }
}
