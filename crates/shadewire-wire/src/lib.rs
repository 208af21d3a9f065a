//! Byte-order-aware cursor and sink primitives.
//!
//! The hub protocol mixes byte orders inside a single message: the frame
//! header is big-endian while the body is little-endian. Both [`ByteReader`]
//! and [`ByteWriter`] therefore carry a mutable [`ByteOrder`] flag that only
//! affects subsequent operations.
//!
//! Reads past the end of the buffer are fatal ([`WireError::UnexpectedEof`]);
//! writes never fail; the sink grows its backing storage as needed.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{Result, WireError};
pub use reader::ByteReader;
pub use writer::ByteWriter;

/// Byte order applied to multi-byte integer reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first. Protocol default.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}
