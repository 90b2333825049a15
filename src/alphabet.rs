//! Bidirectional mapping between the 27-symbol alphabet and 0..=26.
//!
//! Space maps to 0 and each lowercase letter to its 1-based alphabetic
//! position. Space is not adjacent to the letters in ASCII, so the
//! mapping cannot be a single subtraction.

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 27;

/// Returns true for the 27 recognized symbol bytes.
pub fn is_symbol(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_lowercase()
}

/// Map a symbol byte to its code in 0..=26.
///
/// Callers guarantee `byte` is in the alphabet; feeding anything else is
/// a bug in the caller, not a recoverable condition.
#[inline]
pub fn encode(byte: u8) -> u8 {
    debug_assert!(is_symbol(byte));
    if byte == b' ' {
        0
    } else {
        byte - b'a' + 1
    }
}

/// Map a code in 0..=26 back to its symbol byte.
#[inline]
pub fn decode(code: u8) -> u8 {
    debug_assert!((code as usize) < ALPHABET_SIZE);
    if code == 0 {
        b' '
    } else {
        code + b'a' - 1
    }
}
