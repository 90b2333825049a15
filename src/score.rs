//! Whole-candidate scoring from an externally supplied word sequence.
//!
//! Not used by the search driver, which grows candidates incrementally;
//! this scores a complete word ordering in one shot. Kept as a standalone
//! primitive for driver strategies that rank whole assemblies.

use crate::ciphertext::Ciphertext;
use crate::error::CrackError;
use crate::shift::distinct_shifts;

/// Concatenate `words` (each followed by a single space) until the
/// ciphertext length is reached, truncate to exactly that length, and
/// return the distinct-shift score of the result.
///
/// Errors if `words` runs out before the ciphertext length is covered.
pub fn concat_score(ctxt: &Ciphertext, words: &[&str]) -> Result<u32, CrackError> {
    let needed = ctxt.len();
    let mut assembled = Vec::with_capacity(needed);

    let mut iter = words.iter();
    while assembled.len() < needed {
        let word = iter.next().ok_or(CrackError::WordListExhausted {
            assembled: assembled.len(),
            needed,
        })?;
        assembled.extend_from_slice(word.as_bytes());
        assembled.push(b' ');
    }
    assembled.truncate(needed);

    Ok(distinct_shifts(&assembled, ctxt.symbols(), needed))
}
