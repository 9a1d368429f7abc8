use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures a coding session can surface. None of these are recovered
/// internally; a session is all-or-nothing.
#[derive(Debug, Error)]
pub enum Error {
    /// Read or write on the underlying byte stream failed.
    #[error("range coder I/O failed")]
    Io(#[from] std::io::Error),

    /// The input stream ended while the decoder still expected coded bytes.
    #[error("input stream ended prematurely: expected {0}")]
    NotEnoughInput(&'static str),

    /// The input is not a valid range-coded stream (as opposed to transport
    /// trouble): non-zero leading byte, or `code >= range` after init.
    #[error("range-coded stream corrupted: {0}")]
    StreamCorrupted(&'static str),

    /// The encoder's carry bookkeeping went inconsistent. A logic defect,
    /// not a data problem; output must be considered invalid.
    #[error("internal coder fault: {0}")]
    InternalFault(&'static str),
}
