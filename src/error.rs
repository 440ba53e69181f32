//! Error types for spec lookups and message construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Type name outside the closed spec set.
    #[error("Unknown message type: '{0}'")]
    UnknownMessageType(String),

    /// Byte with no spec in the status index (reserved bytes, data bytes).
    #[error("Unrecognized status byte: 0x{0:02X}")]
    UnrecognizedStatusByte(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
