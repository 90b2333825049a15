//! Dictionary-driven recovery of shift-enciphered text.
//!
//! Works over the fixed 27-symbol alphabet {space, a-z}. A ciphertext is
//! assumed to be the sum, symbol-wise mod 27, of a plaintext and a
//! low-diversity key stream. Rather than recovering the key, the crate
//! grades candidate plaintexts by how few distinct shift values they
//! induce against the ciphertext, checks a small set of full-length
//! reference texts first, and otherwise assembles a candidate from a
//! fixed word list by crib dragging under an iteratively loosened
//! strictness bound.

pub mod alphabet;
pub mod ciphertext;
pub mod dictionary;
pub mod driver;
pub mod error;
pub mod matcher;
pub mod score;
pub mod search;
pub mod shift;
pub mod stats;

pub use ciphertext::Ciphertext;
pub use driver::{recover, Recovery, STRICTNESS_RANGE};
pub use error::CrackError;
pub use matcher::match_reference;
pub use score::concat_score;
pub use search::search;
pub use shift::distinct_shifts;
pub use stats::SearchStats;
