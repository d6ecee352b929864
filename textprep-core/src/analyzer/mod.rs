//! Text analysis pipeline.
//!
//! This module provides the per-field text processing components:
//! - **Punctuation**: The stripped character set and ASCII fold tables
//! - **Stopwords**: The bundled English list and filter
//! - **Tokenizer**: Splits text into whitespace-delimited tokens
//! - **Normalizer**: Lowercases, strips, splits, filters and rejoins

pub mod normalizer;
pub mod punctuation;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
