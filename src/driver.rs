//! Top-level recovery flow: reference fast path, then iterative
//! deepening over the strictness bound.

use std::ops::RangeInclusive;

use crate::ciphertext::Ciphertext;
use crate::dictionary::{REFERENCE_LEN, WORDS};
use crate::matcher;
use crate::search::search;
use crate::stats::SearchStats;

/// Strictness bounds tried in ascending order. Each level restarts the
/// search from scratch; a looser bound revisits everything a tighter one
/// pruned, trading recomputation for a stateless per-level search.
pub const STRICTNESS_RANGE: RangeInclusive<u32> = 10..=23;

/// How a plaintext was recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// A reference dictionary entry cleared the acceptance bound.
    Reference {
        text: String,
        index: usize,
        score: u32,
    },
    /// The crib-dragging search assembled a candidate at this strictness.
    Assembled { text: String, strictness: u32 },
}

impl Recovery {
    /// The recovered plaintext.
    pub fn text(&self) -> &str {
        match self {
            Recovery::Reference { text, .. } => text,
            Recovery::Assembled { text, .. } => text,
        }
    }
}

/// Run the full recovery flow against one ciphertext.
///
/// The reference fast path is only consulted at the canonical length;
/// at any other length, and whenever it declines, the word search runs
/// under each strictness bound in [`STRICTNESS_RANGE`] until one yields
/// a full-length candidate. `None` means every level was exhausted.
pub fn recover(ctxt: &Ciphertext, stats: &mut SearchStats) -> Option<Recovery> {
    if ctxt.len() == REFERENCE_LEN {
        if let Some(hit) = matcher::match_reference(ctxt) {
            return Some(Recovery::Reference {
                text: hit.text().to_string(),
                index: hit.index,
                score: hit.score,
            });
        }
    }

    for strictness in STRICTNESS_RANGE {
        if let Some(text) = search(strictness, ctxt, "", &WORDS, stats) {
            return Some(Recovery::Assembled { text, strictness });
        }
        stats.tick_level_exhausted();
    }

    None
}
