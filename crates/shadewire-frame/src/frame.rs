use bytes::Bytes;

use crate::keys::{self, DataKey, DataKeyType};
use crate::{frame_types, motor};

/// The 12-byte ASCII marker that opens every frame body.
pub const BODY_MARKER: [u8; 12] = *b"Smart_Id1_y:";

/// Byte that terminates the keyed field section of a body.
pub const BODY_END: u8 = 0xFF;

/// Reserved bytes between the sequence number and the first field.
pub const RESERVED: [u8; 6] = [0; 6];

/// Constant that opens the big-endian frame header.
pub const HEADER_MAGIC: u32 = 0x0000_0003;

/// The only header `cmd` value whose header carries an action byte.
pub const ACTION_CMD: u16 = 145;

/// Seed for the encoder's sequence counter; incremented before first use.
pub const INITIAL_SEQUENCE: u16 = 3;

/// A decoded field value. The variant is determined by the key's
/// [`DataKeyType`]; the two always travel together in a [`FrameData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Byte(u8),
    Bytes(Bytes),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
}

impl FieldValue {
    /// The wire type this value occupies.
    pub fn kind(&self) -> DataKeyType {
        match self {
            FieldValue::Text(_) => DataKeyType::String,
            FieldValue::Byte(_) => DataKeyType::Byte,
            FieldValue::Bytes(_) => DataKeyType::Bytes,
            FieldValue::Uint8(_) => DataKeyType::Uint8,
            FieldValue::Uint16(_) => DataKeyType::Uint16,
            FieldValue::Uint32(_) => DataKeyType::Uint32,
        }
    }
}

/// One keyed field in a frame body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameData {
    pub key: DataKey,
    pub value: FieldValue,
}

impl FrameData {
    pub fn new(key: DataKey, value: FieldValue) -> Self {
        Self { key, value }
    }

    /// A Byte-typed field.
    pub fn byte(key: DataKey, value: u8) -> Self {
        Self::new(key, FieldValue::Byte(value))
    }

    /// A Bytes-typed field.
    pub fn bytes(key: DataKey, value: impl Into<Bytes>) -> Self {
        Self::new(key, FieldValue::Bytes(value.into()))
    }
}

/// The big-endian frame header.
///
/// `action` is present only when `cmd` is [`ACTION_CMD`] and the frame's
/// declared length leaves room for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub flag: u8,
    pub cmd: u16,
    pub action: Option<u8>,
}

impl Header {
    pub fn new(flag: u8, cmd: u16) -> Self {
        Self {
            flag,
            cmd,
            action: None,
        }
    }

    pub fn with_action(flag: u8, cmd: u16, action: u8) -> Self {
        Self {
            flag,
            cmd,
            action: Some(action),
        }
    }
}

/// One complete protocol message: header plus optional body.
///
/// Header-only frames have `frame_type` and `sequence` set to `None` and
/// `data` empty, together. On encode the caller-supplied `sequence` is
/// ignored; the encoder embeds its own counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    pub header: Header,
    pub frame_type: Option<u16>,
    pub sequence: Option<u16>,
    pub data: Vec<FrameData>,
}

impl CommandFrame {
    /// A body-carrying frame with no fields.
    pub fn new(header: Header, frame_type: u16) -> Self {
        Self::with_data(header, frame_type, Vec::new())
    }

    /// A body-carrying frame with fields.
    pub fn with_data(header: Header, frame_type: u16, data: Vec<FrameData>) -> Self {
        Self {
            header,
            frame_type: Some(frame_type),
            sequence: None,
            data,
        }
    }

    /// A frame with no body at all.
    pub fn header_only(header: Header) -> Self {
        Self {
            header,
            frame_type: None,
            sequence: None,
            data: Vec::new(),
        }
    }

    /// Query the device list behind a hub.
    pub fn device_list_req() -> Self {
        Self::new(request_header(), frame_types::DEVICE_LIST_REQ)
    }

    /// Query a device's internal parameters (current position).
    pub fn device_para_req(channel: impl Into<Bytes>) -> Self {
        Self::with_data(
            request_header(),
            frame_types::DEVICE_PARA_REQ,
            vec![FrameData::bytes(keys::DEVICE_ADDR_CHANNEL, channel)],
        )
    }

    /// Raise or lower a shade fully.
    pub fn device_move_req(channel: impl Into<Bytes>, command: u8) -> Self {
        Self::with_data(
            request_header(),
            frame_types::DEVICE_EXECUTE_REQ,
            vec![
                FrameData::byte(keys::DEVICE_CMD, command),
                FrameData::bytes(keys::DEVICE_ADDR_CHANNEL, channel),
            ],
        )
    }

    /// Move a shade to a target position, 0-100.
    pub fn device_set_position_req(channel: impl Into<Bytes>, percent: u8) -> Self {
        Self::with_data(
            request_header(),
            frame_types::DEVICE_EXECUTE_REQ,
            vec![
                FrameData::byte(keys::DEVICE_CMD, motor::SET_POSITION),
                FrameData::bytes(keys::DEVICE_ADDR_CHANNEL, channel),
                FrameData::bytes(keys::DEVICE_CMD_DATA, vec![1, percent, 0]),
            ],
        )
    }
}

fn request_header() -> Header {
    Header::with_action(0, 144, 5)
}
