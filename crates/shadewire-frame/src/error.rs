use crate::keys::DataKeyType;
use shadewire_wire::WireError;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The 12-byte body marker does not match `"Smart_Id1_y:"`.
    #[error("invalid body marker (expected \"Smart_Id1_y:\")")]
    InvalidMarker,

    /// A read ran past the end of the input buffer.
    #[error("truncated frame: {0}")]
    Wire(#[from] WireError),

    /// A String-typed field holds bytes that are not valid UTF-8.
    #[error("field {key} is not valid UTF-8")]
    InvalidText {
        key: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    /// Only Bytes- and Byte-typed fields can be sent to a hub.
    #[error("cannot encode field {key}: {kind:?} is not a sendable type")]
    UnsupportedValueType {
        key: &'static str,
        kind: DataKeyType,
    },

    /// A field value longer than its u16 length prefix can declare.
    #[error("field {key} is {len} bytes; the wire length prefix caps values at 65535")]
    OversizedValue { key: &'static str, len: usize },

    /// A whole body longer than its u16 length prefix can declare.
    #[error("frame body is {len} bytes; the wire length prefix caps bodies at 65535")]
    OversizedBody { len: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
