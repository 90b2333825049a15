//! Distinct-shift scoring of a candidate against a ciphertext.
//!
//! For an aligned candidate/ciphertext pair, each position induces a
//! modular shift `(encode(ctxt) - encode(cand)) mod 27`. A candidate that
//! is the true plaintext under a low-diversity key stream uses few
//! distinct shift values; a wrong guess scatters close to uniformly over
//! all 27. The count of distinct shifts is therefore an inverse fitness
//! score: lower is better. Only the cardinality of the shift set matters,
//! which keeps the score cheap and monotonic non-decreasing as the
//! compared range grows.

use crate::alphabet::{self, ALPHABET_SIZE};

/// Count the distinct modular shifts between `cand` and `ctxt` over the
/// first `len` positions.
///
/// `len` must not exceed either slice. Result is 0 for `len == 0` and in
/// 1..=27 otherwise.
pub fn distinct_shifts(cand: &[u8], ctxt: &[u8], len: usize) -> u32 {
    debug_assert!(len <= cand.len() && len <= ctxt.len());

    let mut tally = [0u32; ALPHABET_SIZE];
    for i in 0..len {
        let c = alphabet::encode(ctxt[i]) as i32;
        let p = alphabet::encode(cand[i]) as i32;
        let shift = (c - p).rem_euclid(ALPHABET_SIZE as i32);
        tally[shift as usize] += 1;
    }

    tally.iter().filter(|&&count| count > 0).count() as u32
}
