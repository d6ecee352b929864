use super::punctuation::{strip_punctuation_into, DROP, FOLD_TABLE, LOWER_TABLE};
use super::stopwords::StopwordFilter;
use super::tokenizer::Tokenizer;

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Removes ASCII punctuation after lowercasing.
    pub strip_punctuation: bool,
    /// Drops tokens found in the stopword set.
    pub remove_stopwords: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_punctuation: true,
            remove_stopwords: true,
        }
    }
}

/// Text normalizer for free-text dataset fields.
///
/// Applies, in order:
/// - Full Unicode lowercasing
/// - Removal of ASCII punctuation, character by character
/// - Splitting on whitespace
/// - Removal of stopword tokens (exact, case-sensitive match)
/// - Rejoining surviving tokens with single spaces
///
/// Lowercasing never creates or destroys whitespace and no punctuation
/// character is whitespace, so the input is split first and each raw token
/// is folded on its own. The result is identical to folding the whole field
/// and splitting afterwards, and no intermediate copy of the field is made.
///
/// # Examples
///
/// ```
/// use textprep_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("Hello World!"), "hello world");
/// assert_eq!(normalizer.normalize("This is a test."), "test");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    stopwords: StopwordFilter,
    tokenizer: Tokenizer,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl TextNormalizer {
    /// Creates a normalizer using the bundled English stopwords.
    pub fn new(config: NormalizerConfig) -> Self {
        Self::with_stopwords(config, StopwordFilter::english())
    }

    /// Creates a normalizer with a custom stopword set.
    pub fn with_stopwords(config: NormalizerConfig, stopwords: StopwordFilter) -> Self {
        Self {
            config,
            stopwords,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Stopword set consulted when `remove_stopwords` is enabled.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        self.tokenizer.tokenize(input, |raw, _| {
            let mark = out.len();
            if mark > 0 {
                out.push(' ');
            }
            let start = out.len();

            self.fold_token(raw, out);

            let token = &out[start..];
            if token.is_empty() || (self.config.remove_stopwords && self.stopwords.contains(token))
            {
                out.truncate(mark);
            }
        });
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Lowercases one raw token and strips punctuation, appending to `out`.
    #[inline]
    fn fold_token(&self, raw: &str, out: &mut String) {
        let strip = self.config.strip_punctuation;

        if raw.is_ascii() {
            let table = if strip { &FOLD_TABLE } else { &LOWER_TABLE };
            out.extend(
                raw.bytes()
                    .map(|b| table[b as usize])
                    .filter(|&b| b != DROP)
                    .map(char::from),
            );
            return;
        }

        // str::to_lowercase applies context-sensitive mappings such as the
        // final sigma, which a per-char fold would miss.
        let lowered = raw.to_lowercase();
        if strip {
            strip_punctuation_into(&lowered, out);
        } else {
            out.push_str(&lowered);
        }
    }
}
