//! Punctuation classification and the ASCII fold table.
//!
//! The punctuation set is the 32 printable ASCII characters that are neither
//! letters, digits nor space. Punctuation outside ASCII (curly quotes,
//! em-dashes, CJK marks) is left in place.
//!
//! For ASCII input the lowercase and strip steps collapse into a single
//! table lookup per byte: [`FOLD_TABLE`] maps every ASCII byte either to
//! its lowercase form or to [`DROP`].

/// Every character stripped during normalization, in code-point order.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Table marker for a byte that must be removed. Never valid in UTF-8.
pub const DROP: u8 = 0xFF;

/// Lowercases and strips punctuation for a single ASCII byte.
pub static FOLD_TABLE: [u8; 128] = build_fold_table(true);

/// Lowercases a single ASCII byte and keeps punctuation.
pub static LOWER_TABLE: [u8; 128] = build_fold_table(false);

const fn build_fold_table(strip: bool) -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut b = 0u8;
    while b < 128 {
        table[b as usize] = if strip && b.is_ascii_punctuation() {
            DROP
        } else {
            b.to_ascii_lowercase()
        };
        b += 1;
    }
    table
}

/// Returns true if `c` belongs to the stripped punctuation set.
#[inline(always)]
pub const fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Appends `input` to `out` with every punctuation character removed.
pub fn strip_punctuation_into(input: &str, out: &mut String) {
    out.extend(input.chars().filter(|&c| !is_punctuation(c)));
}
