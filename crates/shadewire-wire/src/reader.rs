use crate::error::{Result, WireError};
use crate::ByteOrder;

/// Sequential reader over an immutable byte buffer.
///
/// Tracks a read position and a byte-order flag. Multi-byte integer reads
/// honor the current order; [`set_order`](ByteReader::set_order) affects only
/// subsequent reads.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start, big-endian.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_order(data, ByteOrder::Big)
    }

    /// Create a reader with an explicit initial byte order.
    pub fn with_order(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    /// Switch byte order for subsequent reads.
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        if self.pos + needed > self.data.len() {
            return Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }

    /// Read one byte and advance.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Look at the next byte without advancing.
    pub fn peek_u8(&self) -> Result<u8> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(WireError::UnexpectedEof {
                offset: self.pos,
                needed: 1,
                available: 0,
            })
    }

    /// Read a 16-bit integer in the current byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(match self.order {
            ByteOrder::Big => u16::from_be_bytes([b[0], b[1]]),
            ByteOrder::Little => u16::from_le_bytes([b[0], b[1]]),
        })
    }

    /// Read a 32-bit integer in the current byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(match self.order {
            ByteOrder::Big => u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            ByteOrder::Little => u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        })
    }

    /// Read `n` raw bytes and advance by `n`.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Read an unsigned LEB128 varint: 7 payload bits per byte, high bit set
    /// while more bytes follow, least-significant group first.
    ///
    /// Groups beyond the low 32 bits are discarded.
    pub fn read_varint(&mut self) -> Result<u32> {
        let mut acc: u32 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            if shift < 32 {
                acc |= u32::from(byte & 0x7F) << shift;
            }
            if byte & 0x80 == 0 {
                return Ok(acc);
            }
            shift += 7;
        }
    }
}
