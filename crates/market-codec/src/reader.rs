//! Cursor-based reader for the marketplace wire format.

use crate::error::CodecError;
use crate::u256::U256;
use crate::{WireDecode, MAX_TEXT_LEN};

/// Reads primitive values from a borrowed buffer, advancing a cursor.
///
/// A reader is created per decode call and positioned at a caller-supplied
/// offset; each read advances the cursor, and [`offset`](RecordReader::offset)
/// reports the position to hand back to the caller after a top-level
/// decode. Reads never look past the buffer end: a shortfall fails with
/// [`CodecError::Truncated`] and the decode attempt is abandoned.
#[derive(Debug)]
pub struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    /// Position a reader over `buf`, starting at `offset`.
    pub fn new(buf: &'a [u8], offset: usize) -> Self {
        RecordReader { buf, pos: offset }
    }

    /// Cursor position relative to the buffer start.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the buffer end.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::Truncated {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes: [u8; 4] = self.take(4)?.try_into().expect("length checked");
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_text(&mut self) -> Result<String, CodecError> {
        let len = self.read_u32()? as usize;
        if len > MAX_TEXT_LEN {
            return Err(CodecError::RangeExceeded("text length"));
        }
        let bytes = self.take(len)?;
        let s = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(s.to_string())
    }

    /// Read 8 bytes little-endian.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        let bytes: [u8; 8] = self.take(8)?.try_into().expect("length checked");
        Ok(u64::from_le_bytes(bytes))
    }

    /// Read 32 bytes little-endian.
    pub fn read_u256(&mut self) -> Result<U256, CodecError> {
        let bytes: [u8; 32] = self.take(32)?.try_into().expect("length checked");
        Ok(U256::from_le_bytes(bytes))
    }

    /// Decode a nested record at the cursor. The cursor ends wherever the
    /// record's last field stopped consuming.
    pub fn read_nested<T: WireDecode>(&mut self) -> Result<T, CodecError> {
        T::decode(self)
    }

    /// Read a u32 count, then invoke `read_item` exactly that many times.
    pub fn read_sequence<T, F>(&mut self, mut read_item: F) -> Result<Vec<T>, CodecError>
    where
        F: FnMut(&mut Self) -> Result<T, CodecError>,
    {
        let count = self.read_u32()? as usize;
        let mut items = Vec::new();
        for _ in 0..count {
            items.push(read_item(self)?);
        }
        Ok(items)
    }
}
