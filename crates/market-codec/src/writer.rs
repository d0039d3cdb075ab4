//! Append-only writer for the marketplace wire format.

use crate::error::CodecError;
use crate::u256::U256;
use crate::{WireEncode, MAX_TEXT_LEN};

/// Growable byte buffer with typed append operations.
///
/// One writer per encode operation: write every field in declared order,
/// then take the buffer with [`finish`](RecordWriter::finish). The format
/// carries no field tags, so the write order is the wire contract.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: Vec<u8>,
}

impl RecordWriter {
    pub fn new() -> Self {
        RecordWriter { buf: Vec::new() }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append a length-prefixed UTF-8 string.
    ///
    /// The prefix is the byte length as u32 little-endian. Empty strings
    /// are valid (prefix 0, no payload). Strings longer than
    /// [`MAX_TEXT_LEN`] are rejected before any bytes are appended.
    pub fn write_text(&mut self, s: &str) -> Result<(), CodecError> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_TEXT_LEN {
            return Err(CodecError::RangeExceeded("text length"));
        }
        self.buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Append 8 bytes little-endian. The `u64` type carries the range
    /// invariant, so this cannot fail.
    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Append 32 bytes little-endian, zero-padded on the high end.
    pub fn write_u256(&mut self, v: U256) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Append a record's fields in place, with no wrapper or length
    /// prefix. The decoder recovers the extent from the record's own
    /// field list.
    pub fn write_nested<T: WireEncode>(&mut self, record: &T) -> Result<(), CodecError> {
        record.encode(self)
    }

    /// Append a u32 count, then each element in iteration order.
    pub fn write_sequence<T, F>(&mut self, items: &[T], mut write_item: F) -> Result<(), CodecError>
    where
        F: FnMut(&mut Self, &T) -> Result<(), CodecError>,
    {
        let count =
            u32::try_from(items.len()).map_err(|_| CodecError::RangeExceeded("sequence length"))?;
        self.buf.extend_from_slice(&count.to_le_bytes());
        for item in items {
            write_item(self, item)?;
        }
        Ok(())
    }

    /// Consume the writer and return the encoded buffer.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
