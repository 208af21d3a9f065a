/// Errors that can occur while reading from a wire buffer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// A read would run past the end of the buffer.
    #[error("unexpected end of buffer at offset {offset} (need {needed} bytes, {available} available)")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, WireError>;
