//! Stopword filtering.
//!
//! The bundled list is the conventional 179-word English list used by most
//! text-classification preprocessing. It is compiled into the binary so the
//! cleaned output never depends on what happens to be installed on the host.
//!
//! Lookups are exact and case-sensitive. Tokens are lowercased before they
//! reach the filter, so every stored word is lowercase too. Entries that
//! contain an apostrophe can never match a token once punctuation has been
//! stripped. They stay in the list so the set is the standard one.

use rustc_hash::FxHashSet;

/// The bundled English stopword list.
pub const ENGLISH_STOPWORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they",
    "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't",
    "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't",
    "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// A read-only set of words removed from normalized text.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// The bundled English list.
    pub fn english() -> Self {
        Self::from_list(&ENGLISH_STOPWORDS)
    }

    /// A filter that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a filter from a custom list. Words are lowercased on insert.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.extend(words);
        filter
    }

    /// Adds words to the filter. Words are lowercased on insert.
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Returns true if `token` is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the filter removes nothing.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
