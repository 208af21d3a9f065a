use bytes::Bytes;
use shadewire_wire::{ByteOrder, ByteWriter};

use crate::error::{FrameError, Result};
use crate::frame::{
    CommandFrame, FieldValue, BODY_END, BODY_MARKER, HEADER_MAGIC, INITIAL_SEQUENCE, RESERVED,
};
use crate::keys::DataKeyType;

/// Encodes frames for delivery to a hub.
///
/// Stateful: each encoder owns one sequence counter, seeded at 3 and
/// incremented (wrapping at `u16::MAX`) once per [`encode`](Self::encode)
/// call before use. The caller-supplied `sequence` field is ignored.
/// `encode` takes `&mut self`, so sharing one encoder across threads
/// requires external synchronization.
#[derive(Debug)]
pub struct FrameEncoder {
    seq: u16,
}

impl FrameEncoder {
    pub fn new() -> Self {
        Self {
            seq: INITIAL_SEQUENCE,
        }
    }

    /// The sequence value embedded by the most recent encode.
    pub fn sequence(&self) -> u16 {
        self.seq
    }

    /// Encode a whole frame. The outbound vocabulary is a strict subset of
    /// the inbound one: only Bytes- and Byte-typed fields are sendable, and
    /// a frame holding anything else fails atomically with no bytes emitted.
    /// Values and bodies are capped at 65535 bytes by their u16 wire length
    /// prefixes; anything larger also fails atomically.
    pub fn encode(&mut self, frame: &CommandFrame) -> Result<Bytes> {
        self.seq = self.seq.wrapping_add(1);
        tracing::trace!(
            frame_type = frame.frame_type,
            seq = self.seq,
            fields = frame.data.len(),
            "encoding frame"
        );

        let body = self.encode_body(frame)?;
        let header = self.encode_header(frame, body.len());

        let mut out = Vec::with_capacity(header.len() + body.len());
        out.extend_from_slice(&header);
        out.extend_from_slice(&body);
        Ok(Bytes::from(out))
    }

    /// Marker + length-prefixed little-endian body:
    ///
    /// ```text
    /// ┌────────────────┬───────────┬────────────┬─────┬──────────┬────────┬──────┬─────┐
    /// │ "Smart_Id1_y:" │ body_len  │ frame_type │ seq │ reserved │ fields │ 0xFF │ chk │
    /// │ (12B)          │ (2B LE)   │ (2B LE)    │ (2B)│ (6B zero)│        │      │ (1B)│
    /// └────────────────┴───────────┴────────────┴─────┴──────────┴────────┴──────┴─────┘
    /// ```
    ///
    /// `body_len` covers `frame_type` through `chk` inclusive; `chk` is the
    /// mod-256 sum of those bytes up to and including the end marker.
    fn encode_body(&self, frame: &CommandFrame) -> Result<Vec<u8>> {
        let mut body = ByteWriter::with_order(ByteOrder::Little);
        body.write_u16(frame.frame_type.unwrap_or(0));
        body.write_u16(self.seq);
        body.write_bytes(&RESERVED);

        for field in &frame.data {
            body.write_u16(field.key.id);
            match (field.key.kind, &field.value) {
                (DataKeyType::Bytes, FieldValue::Bytes(value)) => {
                    let len = u16::try_from(value.len()).map_err(|_| {
                        FrameError::OversizedValue {
                            key: field.key.name,
                            len: value.len(),
                        }
                    })?;
                    body.write_u16(len);
                    body.write_bytes(value);
                }
                (DataKeyType::Byte, FieldValue::Byte(value)) => {
                    body.write_u16(1);
                    body.write_u8(*value);
                }
                _ => {
                    return Err(FrameError::UnsupportedValueType {
                        key: field.key.name,
                        kind: field.key.kind,
                    })
                }
            }
        }

        body.write_u8(BODY_END);
        body.write_u8(checksum(body.as_bytes()));

        // Per-field checks bound each value, but enough fields can still
        // overflow the body's own length prefix.
        let body_len = u16::try_from(body.len())
            .map_err(|_| FrameError::OversizedBody { len: body.len() })?;

        let mut framed = ByteWriter::with_order(ByteOrder::Little);
        framed.write_bytes(&BODY_MARKER);
        framed.write_u16(body_len);
        framed.write_bytes(body.as_bytes());
        Ok(framed.as_bytes().to_vec())
    }

    /// Big-endian header: magic, varint total length, flag, cmd, optional
    /// action. `total_len` counts the whole marker-prefixed body plus flag,
    /// cmd, and the action byte when present.
    fn encode_header(&self, frame: &CommandFrame, body_len: usize) -> Vec<u8> {
        let action_len = u32::from(frame.header.action.is_some());
        let total_len = body_len as u32 + 1 + 2 + action_len;

        let mut header = ByteWriter::new();
        header.write_u32(HEADER_MAGIC);
        header.write_varint(total_len);
        header.write_u8(frame.header.flag);
        header.write_u16(frame.header.cmd);
        if let Some(action) = frame.header.action {
            header.write_u8(action);
        }
        header.as_bytes().to_vec()
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mod-256 sum over a byte range.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte))
}
