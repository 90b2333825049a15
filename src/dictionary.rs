//! Compiled-in reference plaintexts and search word list.
//!
//! Both tables are fixed at build time. The word list order is
//! load-bearing: the crib-dragging search tries words in this order and
//! returns the first full-length candidate it accepts, so reordering the
//! list changes which of several equally plausible plaintexts wins.

/// Length of every reference plaintext, and the only ciphertext length at
/// which the known-plaintext fast path is attempted.
pub const REFERENCE_LEN: usize = 500;

/// Full-length reference plaintexts tried before the word search.
pub const REFERENCE_TEXTS: [&str; 5] = [
    include_str!("../data/reference_0.txt"),
    include_str!("../data/reference_1.txt"),
    include_str!("../data/reference_2.txt"),
    include_str!("../data/reference_3.txt"),
    include_str!("../data/reference_4.txt"),
];

/// Words the search may append to a candidate, most common first. Words
/// are stored bare; the search supplies the separating space.
pub const WORDS: [&str; 40] = [
    "the", "of", "and", "to", "in", "a", "is", "that", "it", "was", "for",
    "on", "are", "as", "with", "his", "they", "at", "be", "this", "have",
    "from", "or", "one", "had", "by", "word", "but", "not", "what", "all",
    "were", "we", "when", "your", "can", "said", "there", "use", "an",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn reference_texts_have_canonical_length() {
        for text in REFERENCE_TEXTS {
            assert_eq!(text.len(), REFERENCE_LEN);
        }
    }

    #[test]
    fn reference_texts_are_alphabet_clean() {
        for text in REFERENCE_TEXTS {
            assert!(text.bytes().all(alphabet::is_symbol));
        }
    }

    #[test]
    fn words_are_nonempty_lowercase_letters() {
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
}
