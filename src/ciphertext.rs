//! Validated ciphertext value object.
//!
//! The ciphertext length is fixed for the lifetime of a run and every
//! component needs it, so the length travels with the symbols instead of
//! living in process-wide state.

use crate::alphabet;
use crate::error::CrackError;

/// An immutable sequence of alphabet symbols, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    symbols: Vec<u8>,
}

impl Ciphertext {
    /// Parse one input line into a ciphertext.
    ///
    /// Trailing newline and carriage return are trimmed; every remaining
    /// byte must be one of the 27 alphabet symbols.
    pub fn parse(line: &str) -> Result<Self, CrackError> {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        for (position, &byte) in trimmed.as_bytes().iter().enumerate() {
            if !alphabet::is_symbol(byte) {
                return Err(CrackError::InvalidSymbol { position, byte });
            }
        }
        Ok(Self {
            symbols: trimmed.as_bytes().to_vec(),
        })
    }

    /// Symbol count, fixed for the run.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Raw symbol bytes.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}
