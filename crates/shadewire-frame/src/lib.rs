//! Typed, keyed command-frame codec for motorized-shade hub devices.
//!
//! One framing format carries discovery queries, status queries, and
//! actuator commands through a cloud relay. A frame is:
//!
//! - A big-endian header: 4-byte magic, varint total length, flag, cmd, and
//!   an action byte for cmd 145.
//! - A little-endian body: the 12-byte ASCII marker `"Smart_Id1_y:"`, a
//!   length, a frame type, a sequence number, six reserved bytes, a keyed
//!   field section, an end marker, and a mod-256 checksum.
//!
//! Field keys come from the compiled-in [`keys`] registry; ids this build
//! does not recognize are skipped on decode, never errors. The wire format
//! is a fixed contract with an existing remote peer, including two of its
//! quirks (the header length accounting that ignores the action byte, and
//! the unknown-key consumed-byte accounting) which are preserved bit-exact
//! rather than corrected.
//!
//! Everything here is synchronous and allocation-only; transports that move
//! the bytes live elsewhere.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod frame_types;
pub mod keys;
pub mod motor;

pub use decoder::FrameDecoder;
pub use encoder::{checksum, FrameEncoder};
pub use error::{FrameError, Result};
pub use frame::{
    CommandFrame, FieldValue, FrameData, Header, ACTION_CMD, BODY_END, BODY_MARKER, HEADER_MAGIC,
    INITIAL_SEQUENCE, RESERVED,
};
pub use keys::{DataKey, DataKeyType};
