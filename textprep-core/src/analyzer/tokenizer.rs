//! Streaming whitespace tokenizer.
//!
//! Splits a field into whitespace-delimited tokens and hands each one to a
//! callback together with its position:
//!
//! ```ignore
//! ("hello", 0)
//! ("world", 1)
//! ```
//!
//! Tokens are slices of the input, so tokenizing never allocates.
//!
//! ## Whitespace
//!
//! A separator is any Unicode `White_Space` character plus the four ASCII
//! information separators (U+001C..U+001F), which conventional `split()`
//! implementations also break on. Runs of separators produce no empty
//! tokens, and leading or trailing separators are ignored.

/// Returns true if `c` separates tokens.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

/// Streaming whitespace tokenizer.
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `input` and emits `(text, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline]
    pub fn tokenize<'n, F>(&self, input: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut pos = 0u32;
        let mut start: Option<usize> = None;

        for (i, c) in input.char_indices() {
            if is_separator(c) {
                if let Some(s) = start.take() {
                    emit(&input[s..i], pos);
                    if pos == u32::MAX {
                        return;
                    }
                    pos += 1;
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        if let Some(s) = start {
            emit(&input[s..], pos);
        }
    }

    /// Counts the tokens in `input`.
    pub fn count(&self, input: &str) -> usize {
        let mut n = 0usize;
        self.tokenize(input, |_, _| n += 1);
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    fn words(input: &str) -> Vec<&str> {
        collect(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), vec![("hello", 0)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_and_blank_emit_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \t\r\n ").is_empty());
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(words("  hello \t\n world  "), ["hello", "world"]);
    }

    #[test]
    fn unicode_whitespace_separates() {
        assert_eq!(
            words("a\u{00A0}b\u{2003}c\u{3000}d\u{0085}e"),
            ["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn information_separators_split() {
        assert_eq!(Tokenizer::new().count("a\u{1C}b\u{1F}c"), 3);
        // zero-width space is not whitespace
        assert_eq!(Tokenizer::new().count("a\u{200B}b"), 1);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("héllo wörld");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let expected = ["one", "two", "three", "four"];
        let input = expected.join(" ");
        let mut i = 0usize;

        Tokenizer::new().tokenize(&input, |text, pos| {
            assert_eq!(text, expected[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, expected.len());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();
        assert_eq!(t.count("hello world"), 2);
        assert_eq!(t.count("one two three"), 3);
    }
}
