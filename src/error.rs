use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    /// Ciphertext contained a byte outside the 27-symbol alphabet.
    #[error("invalid symbol {byte:#04x} at position {position}")]
    InvalidSymbol { position: usize, byte: u8 },

    /// Input stream closed before a ciphertext line could be read.
    #[error("error reading ciphertext: stream ended before a line was read")]
    EmptyInput,

    /// The auxiliary scorer ran out of words before reaching the
    /// ciphertext length.
    #[error("word list exhausted after {assembled} of {needed} symbols")]
    WordListExhausted { assembled: usize, needed: usize },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
