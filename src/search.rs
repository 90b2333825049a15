//! Crib-dragging search: grow a plaintext candidate word by word.
//!
//! Depth-first, word-list-ordered, first-found-wins. Every extension is
//! scored against the aligned ciphertext prefix; extensions whose
//! distinct-shift score exceeds the strictness bound are pruned before
//! any deeper work. Because the score is monotonic in the compared
//! length, a pruned prefix can never be rescued by appending more words.
//!
//! The traversal is the recursive formulation flattened onto an explicit
//! frame stack, so ciphertext length bounds the heap instead of the call
//! stack. One candidate buffer is shared by all frames; backtracking
//! truncates it to the parent frame's length.

use crate::ciphertext::Ciphertext;
use crate::shift::distinct_shifts;
use crate::stats::SearchStats;

/// One level of the traversal: which word to try next, and the candidate
/// length to restore before trying it.
struct Frame {
    next_word: usize,
    base_len: usize,
}

/// Extend `prefix` with words from `words` until a candidate of exactly
/// the ciphertext length survives the strictness bound.
///
/// Returns the first such candidate in depth-first, word-list order, or
/// `None` once every branch at every level is exhausted.
pub fn search(
    strictness: u32,
    ctxt: &Ciphertext,
    prefix: &str,
    words: &[&str],
    stats: &mut SearchStats,
) -> Option<String> {
    let target = ctxt.len();
    debug_assert!(prefix.len() <= target);

    let mut cand = String::from(prefix);
    let mut frames = vec![Frame {
        next_word: 0,
        base_len: cand.len(),
    }];

    loop {
        let depth = frames.len();
        if depth == 0 {
            return None;
        }

        let word_idx = frames[depth - 1].next_word;
        if word_idx >= words.len() {
            frames.pop();
            continue;
        }
        frames[depth - 1].next_word += 1;

        cand.truncate(frames[depth - 1].base_len);
        cand.push_str(words[word_idx]);
        cand.push(' ');
        if cand.len() > target {
            cand.truncate(target);
        }

        stats.tick(depth, strictness);
        let score = distinct_shifts(cand.as_bytes(), ctxt.symbols(), cand.len());
        if score > strictness {
            stats.tick_prune();
            continue;
        }
        if cand.len() == target {
            return Some(cand);
        }

        let base_len = cand.len();
        frames.push(Frame {
            next_word: 0,
            base_len,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strictness: u32, ctxt: &str, words: &[&str]) -> (Option<String>, SearchStats) {
        let ctxt = Ciphertext::parse(ctxt).unwrap();
        let mut stats = SearchStats::new(0);
        let found = search(strictness, &ctxt, "", words, &mut stats);
        (found, stats)
    }

    #[test]
    fn recovers_identical_two_word_ciphertext() {
        // An identical alignment uses the single shift 0, so score 1 is
        // the tightest bound that accepts anything.
        let (found, _) = run(1, "cat dog ", &["cat", "dog"]);
        assert_eq!(found.as_deref(), Some("cat dog "));
    }

    #[test]
    fn earlier_word_wins_among_equal_scores() {
        // Against the all-space ciphertext every single-letter word has
        // score 1, so the first word in list order must win.
        let (found, _) = run(27, "  ", &["a", "b"]);
        assert_eq!(found.as_deref(), Some("a "));
    }

    #[test]
    fn prunes_without_descending_when_every_word_fails() {
        let (found, stats) = run(0, "zzzzzzzz", &["cat", "dog"]);
        assert_eq!(found, None);
        // Both words scored at depth 1, none survived to recurse.
        assert_eq!(stats.scored, 2);
        assert_eq!(stats.pruned, 2);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn backtracks_out_of_a_dead_branch() {
        // "cat " aligns with the first four symbols of "cat cat dog " and
        // of "cat dog ", so the search descends into "cat cat " first,
        // finds no third word that works, and must back out to "cat dog".
        let (found, stats) = run(1, "cat dog ", &["cat", "dog"]);
        assert_eq!(found.as_deref(), Some("cat dog "));
        assert!(stats.max_depth >= 2);
    }

    #[test]
    fn overshooting_word_is_truncated_to_ciphertext_length() {
        let (found, _) = run(1, "catf", &["catfish"]);
        assert_eq!(found.as_deref(), Some("catf"));
    }

    #[test]
    fn empty_word_list_finds_nothing() {
        let (found, stats) = run(27, "abc", &[]);
        assert_eq!(found, None);
        assert_eq!(stats.scored, 0);
    }

    #[test]
    fn nonzero_prefix_is_extended_not_rebuilt() {
        let ctxt = Ciphertext::parse("cat dog ").unwrap();
        let mut stats = SearchStats::new(0);
        let found = search(1, &ctxt, "cat ", &["cat", "dog"], &mut stats);
        assert_eq!(found.as_deref(), Some("cat dog "));
    }
}
