use crate::ByteOrder;

const GROWTH_FLOOR: usize = 100;

/// Sequential writer over a growable byte buffer.
///
/// Tracks a write position and a byte-order flag. The backing storage is
/// extended by `max(100, needed)` zero bytes whenever a write would overflow
/// it; [`as_bytes`](ByteWriter::as_bytes) always returns exactly the written
/// prefix, never the backing capacity.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
    pos: usize,
    order: ByteOrder,
}

impl ByteWriter {
    /// Create an empty writer, big-endian.
    pub fn new() -> Self {
        Self::with_order(ByteOrder::Big)
    }

    /// Create an empty writer with an explicit initial byte order.
    pub fn with_order(order: ByteOrder) -> Self {
        Self {
            buf: Vec::new(),
            pos: 0,
            order,
        }
    }

    /// Switch byte order for subsequent writes.
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Snapshot of exactly the bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    fn reserve(&mut self, needed: usize) {
        if self.pos + needed > self.buf.len() {
            let grow = needed.max(GROWTH_FLOOR);
            self.buf.resize(self.buf.len() + grow, 0);
        }
    }

    /// Write one byte.
    pub fn write_u8(&mut self, value: u8) {
        self.reserve(1);
        self.buf[self.pos] = value;
        self.pos += 1;
    }

    /// Write a 16-bit integer in the current byte order.
    pub fn write_u16(&mut self, value: u16) {
        let bytes = match self.order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        self.write_bytes(&bytes);
    }

    /// Write a 32-bit integer in the current byte order.
    pub fn write_u32(&mut self, value: u32) {
        let bytes = match self.order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        self.write_bytes(&bytes);
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.reserve(value.len());
        self.buf[self.pos..self.pos + value.len()].copy_from_slice(value);
        self.pos += value.len();
    }

    /// Write an unsigned LEB128 varint, least-significant group first.
    pub fn write_varint(&mut self, mut value: u32) {
        loop {
            let group = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                self.write_u8(group | 0x80);
            } else {
                self.write_u8(group);
                break;
            }
        }
    }
}
