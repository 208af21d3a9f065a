use bytes::Bytes;
use shadewire_wire::{ByteOrder, ByteReader};

use crate::error::{FrameError, Result};
use crate::frame::{CommandFrame, FieldValue, FrameData, Header, ACTION_CMD, BODY_MARKER, RESERVED};
use crate::keys::{self, DataKey, DataKeyType};

/// Decodes one complete frame from raw relay bytes.
///
/// Single pass: the header is read big-endian, then the byte order switches
/// to little-endian for the body. Unknown data keys are skipped, not errors;
/// a bad body marker or a read past the end of the input is fatal and no
/// partial frame is returned.
#[derive(Debug, Default)]
pub struct FrameDecoder;

impl FrameDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a whole frame. Header-only frames (declared length covers no
    /// body) come back with `frame_type`, `sequence` absent and no data.
    pub fn decode(&self, input: &[u8]) -> Result<CommandFrame> {
        let mut reader = ByteReader::new(input);

        let (remaining, header) = self.decode_header(&mut reader)?;
        if remaining <= 0 {
            return Ok(CommandFrame::header_only(header));
        }

        let (frame_type, frame_num, data) = self.decode_body(&mut reader)?;
        Ok(CommandFrame {
            header,
            frame_type: Some(frame_type),
            sequence: Some(frame_num),
            data,
        })
    }

    fn decode_header(&self, reader: &mut ByteReader<'_>) -> Result<(i64, Header)> {
        reader.read_u32()?; // protocol/version marker; consumed, unused
        let total_len = reader.read_varint()?;
        let flag = reader.read_u8()?;
        let cmd = reader.read_u16()?;
        let action = if cmd == ACTION_CMD && total_len > 3 {
            Some(reader.read_u8()?)
        } else {
            None
        };

        // Only flag + cmd are subtracted here, whether or not an action byte
        // was read. The peer accounts the same way; keep it bit-exact.
        Ok((i64::from(total_len) - 3, Header { flag, cmd, action }))
    }

    fn decode_body(&self, reader: &mut ByteReader<'_>) -> Result<(u16, u16, Vec<FrameData>)> {
        reader.set_order(ByteOrder::Little);

        let marker = reader.read_bytes(BODY_MARKER.len())?;
        if marker != BODY_MARKER {
            return Err(FrameError::InvalidMarker);
        }

        let body_len = reader.read_u16()?;
        let frame_type = reader.read_u16()?;
        let frame_num = reader.read_u16()?;
        reader.read_bytes(RESERVED.len())?;

        // frame_type + frame_num + reserved already consumed.
        let mut consumed: u32 = 10;
        // The -2 keeps the end marker and checksum out of the field loop.
        let limit = u32::from(body_len).saturating_sub(2);
        let mut data = Vec::new();

        while consumed < limit {
            let key_id = reader.read_u16()?;
            let value_len = usize::from(reader.read_u16()?);

            match keys::lookup(key_id) {
                None => {
                    // The 4-byte key/length header is not counted on this
                    // path. The peer miscounts the same way; preserving it
                    // is required for interop.
                    tracing::debug!(key_id, value_len, "skipping unknown data key");
                    reader.read_bytes(value_len)?;
                }
                Some(key) => {
                    consumed += 4;
                    let value = self.decode_value(reader, key, value_len)?;
                    data.push(FrameData::new(*key, value));
                }
            }

            consumed += value_len as u32;
        }

        Ok((frame_type, frame_num, data))
    }

    fn decode_value(
        &self,
        reader: &mut ByteReader<'_>,
        key: &DataKey,
        value_len: usize,
    ) -> Result<FieldValue> {
        Ok(match key.kind {
            DataKeyType::Byte => FieldValue::Byte(reader.read_u8()?),
            DataKeyType::Uint8 => FieldValue::Uint8(reader.read_u8()?),
            DataKeyType::String => {
                let raw = reader.read_bytes(value_len)?;
                let text = std::str::from_utf8(raw).map_err(|source| FrameError::InvalidText {
                    key: key.name,
                    source,
                })?;
                FieldValue::Text(text.to_string())
            }
            DataKeyType::Bytes => FieldValue::Bytes(Bytes::copy_from_slice(
                reader.read_bytes(value_len)?,
            )),
            DataKeyType::Uint16 => FieldValue::Uint16(reader.read_u16()?),
            DataKeyType::Uint32 => FieldValue::Uint32(reader.read_u32()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use shadewire_wire::ByteWriter;

    use super::*;

    /// Big-endian header: magic, varint total_len, flag, cmd, optional action.
    fn header_bytes(total_len: u32, flag: u8, cmd: u16, action: Option<u8>) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.write_u32(0x0000_0003);
        writer.write_varint(total_len);
        writer.write_u8(flag);
        writer.write_u16(cmd);
        if let Some(action) = action {
            writer.write_u8(action);
        }
        writer.as_bytes().to_vec()
    }

    /// Little-endian body block: marker, declared body_len, then `content`
    /// (frame_type onwards).
    fn body_bytes(declared_len: u16, content: &[u8]) -> Vec<u8> {
        let mut writer = ByteWriter::with_order(ByteOrder::Little);
        writer.write_bytes(&BODY_MARKER);
        writer.write_u16(declared_len);
        writer.write_bytes(content);
        writer.as_bytes().to_vec()
    }

    #[test]
    fn header_only_frame() {
        let input = header_bytes(3, 7, 32, None);
        let frame = FrameDecoder::new().decode(&input).unwrap();

        assert_eq!(frame.header, Header::new(7, 32));
        assert_eq!(frame.frame_type, None);
        assert_eq!(frame.sequence, None);
        assert!(frame.data.is_empty());
    }

    #[test]
    fn action_read_only_for_cmd_145() {
        // cmd 145 with room in the declared length carries an action byte.
        let mut input = header_bytes(4, 0, 145, Some(9));
        // remaining = 1, so a body is expected; provide an empty field
        // section (declared len 12: frame_type + num + reserved + end + chk).
        let mut content = ByteWriter::with_order(ByteOrder::Little);
        content.write_u16(289);
        content.write_u16(5);
        content.write_bytes(&RESERVED);
        content.write_u8(0xFF);
        content.write_u8(0x00);
        input.extend_from_slice(&body_bytes(12, content.as_bytes()));

        let frame = FrameDecoder::new().decode(&input).unwrap();
        assert_eq!(frame.header.action, Some(9));
        assert_eq!(frame.frame_type, Some(289));
        assert_eq!(frame.sequence, Some(5));
    }

    #[test]
    fn no_action_when_total_len_too_small() {
        let input = header_bytes(3, 0, 145, None);
        let frame = FrameDecoder::new().decode(&input).unwrap();
        assert_eq!(frame.header.action, None);
    }

    #[test]
    fn marker_mismatch_is_fatal() {
        let mut input = header_bytes(20, 0, 32, None);
        input.extend_from_slice(b"Smart_Id1_x:"); // last marker byte wrong
        input.extend_from_slice(&[0u8; 16]);

        let err = FrameDecoder::new().decode(&input).unwrap_err();
        assert!(matches!(err, FrameError::InvalidMarker));
    }

    #[test]
    fn truncated_input_is_fatal() {
        let input = header_bytes(20, 0, 32, None);
        // Declared a body but provided none.
        let err = FrameDecoder::new().decode(&input).unwrap_err();
        assert!(matches!(err, FrameError::Wire(_)));
    }

    #[test]
    fn invalid_utf8_in_string_field_is_fatal() {
        let mut content = ByteWriter::with_order(ByteOrder::Little);
        content.write_u16(289);
        content.write_u16(1);
        content.write_bytes(&RESERVED);
        content.write_u16(keys::HOST_NAME.id);
        content.write_u16(2);
        content.write_bytes(&[0xFF, 0xFE]);

        // 10 + 4 + 2 consumed; declared so the loop covers the one field.
        let mut input = header_bytes(64, 0, 32, None);
        input.extend_from_slice(&body_bytes(18, content.as_bytes()));

        let err = FrameDecoder::new().decode(&input).unwrap_err();
        assert!(matches!(err, FrameError::InvalidText { key: "HOST_NAME", .. }));
    }

    #[test]
    fn decodes_every_value_shape() {
        let mut content = ByteWriter::with_order(ByteOrder::Little);
        content.write_u16(291);
        content.write_u16(8);
        content.write_bytes(&RESERVED);
        // NUMBER: Uint8
        content.write_u16(keys::NUMBER.id);
        content.write_u16(1);
        content.write_u8(42);
        // HOST_NAME: String
        content.write_u16(keys::HOST_NAME.id);
        content.write_u16(3);
        content.write_bytes(b"hub");
        // HOST_MAC: Bytes
        content.write_u16(keys::HOST_MAC.id);
        content.write_u16(2);
        content.write_bytes(&[0xDE, 0xAD]);
        // HOST_PORT: Uint16
        content.write_u16(keys::HOST_PORT.id);
        content.write_u16(2);
        content.write_u16(8880);
        // TIMER_LOOP_MARK: Uint32
        content.write_u16(keys::TIMER_LOOP_MARK.id);
        content.write_u16(4);
        content.write_u32(0x0102_0304);
        // DEVICE_CMD: Byte
        content.write_u16(keys::DEVICE_CMD.id);
        content.write_u16(1);
        content.write_u8(16);

        // consumed: 10 + (4+1) + (4+3) + (4+2) + (4+2) + (4+4) + (4+1) = 47
        let mut input = header_bytes(128, 0, 32, None);
        input.extend_from_slice(&body_bytes(49, content.as_bytes()));

        let frame = FrameDecoder::new().decode(&input).unwrap();
        let values: Vec<_> = frame.data.iter().map(|d| (d.key.id, d.value.clone())).collect();
        assert_eq!(
            values,
            vec![
                (keys::NUMBER.id, FieldValue::Uint8(42)),
                (keys::HOST_NAME.id, FieldValue::Text("hub".to_string())),
                (keys::HOST_MAC.id, FieldValue::Bytes(Bytes::from_static(&[0xDE, 0xAD]))),
                (keys::HOST_PORT.id, FieldValue::Uint16(8880)),
                (keys::TIMER_LOOP_MARK.id, FieldValue::Uint32(0x0102_0304)),
                (keys::DEVICE_CMD.id, FieldValue::Byte(16)),
            ]
        );
    }
}
