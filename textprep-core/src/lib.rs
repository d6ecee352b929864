//! Text normalization and CSV cleaning for question/answer datasets.
//!
//! Each source row carries a label and three free-text fields. Every text
//! field is lowercased, stripped of ASCII punctuation and filtered against
//! an English stopword list, and the three results are joined into a single
//! `text` column next to the untouched label.
//!
//! ```text
//! "1","Hello World!","This is a test.","The answer is 42"
//!                            │
//!                            ▼
//! text,class
//! hello world test answer 42,1
//! ```
//!
//! - [`analyzer`]: per-field normalization (punctuation, stopwords, tokenizer)
//! - [`pipeline`]: loading, cleaning and writing whole files
//! - [`error`]: the failure modes of a run

pub mod analyzer;
pub mod error;
pub mod pipeline;

pub use analyzer::{NormalizerConfig, StopwordFilter, TextNormalizer};
pub use error::{PipelineError, Result};
pub use pipeline::{clean_and_save, Pipeline, PipelineConfig, RunStats};
pub use textprep_types::{Cell, CleanedRecord, Column, MissingPolicy, Record};
