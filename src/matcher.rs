//! Known-plaintext fast path over the reference dictionary.

use crate::ciphertext::Ciphertext;
use crate::dictionary::{REFERENCE_LEN, REFERENCE_TEXTS};
use crate::shift::distinct_shifts;

/// Any reference entry scoring above this bound is rejected.
pub const ACCEPT_BOUND: u32 = 24;

/// A reference dictionary hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// Index of the winning entry in dictionary order.
    pub index: usize,
    /// Its distinct-shift score against the full ciphertext.
    pub score: u32,
}

impl ReferenceMatch {
    /// The matched plaintext.
    pub fn text(&self) -> &'static str {
        REFERENCE_TEXTS[self.index]
    }
}

/// Score every reference entry against the full ciphertext and return the
/// best one if it clears [`ACCEPT_BOUND`]. Ties go to the earlier entry.
///
/// Only defined for ciphertexts of the canonical length; the driver does
/// not call this otherwise.
pub fn match_reference(ctxt: &Ciphertext) -> Option<ReferenceMatch> {
    debug_assert_eq!(ctxt.len(), REFERENCE_LEN);

    let mut best: Option<ReferenceMatch> = None;
    for (index, text) in REFERENCE_TEXTS.iter().enumerate() {
        let score = distinct_shifts(text.as_bytes(), ctxt.symbols(), ctxt.len());
        match &best {
            Some(b) if b.score <= score => {}
            _ => best = Some(ReferenceMatch { index, score }),
        }
    }

    best.filter(|b| b.score <= ACCEPT_BOUND)
}
