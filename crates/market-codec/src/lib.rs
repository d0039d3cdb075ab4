//! market-codec
//!
//! Binary record codec for marketplace wire buffers.
//!
//! The format is positional: a record is the concatenation of its fields'
//! encodings in declared order, with no tags, names, or delimiters. The
//! writer and reader must therefore issue the same sequence of typed
//! operations; [`WireEncode`] and [`WireDecode`] pair those sequences per
//! record type.
//!
//! Wire primitives (all integers little-endian):
//! - text: u32 byte length, then UTF-8 bytes
//! - u64: 8 raw bytes
//! - u256: 32 raw bytes
//! - nested record: the record's fields inline, no prefix
//! - sequence: u32 count, then that many element encodings

pub mod error;
pub mod reader;
pub mod u256;
pub mod writer;

pub use error::CodecError;
pub use reader::RecordReader;
pub use u256::{ParseU256Error, U256};
pub use writer::RecordWriter;

/// Largest text payload the codec will produce or accept, in bytes.
///
/// The wire prefix is u32, so the format itself allows up to 4 GiB; this
/// bound keeps a single field inside one realistic network message and
/// stops a corrupt prefix from forcing a huge allocation on decode.
pub const MAX_TEXT_LEN: usize = 16 * 1024 * 1024;

/// A value that can append its wire encoding to a [`RecordWriter`].
pub trait WireEncode {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError>;
}

/// A value that can be reconstructed from a [`RecordReader`].
///
/// Decoding is positional and must mirror [`WireEncode::encode`] field
/// for field. Implementations return a fully-formed value; there is no
/// partially-decoded state.
pub trait WireDecode: Sized {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError>;
}

/// Encode `value` into a fresh buffer.
pub fn encode_to_bytes<T: WireEncode>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut w = RecordWriter::new();
    value.encode(&mut w)?;
    Ok(w.finish())
}

/// Decode a `T` from `buf` starting at `offset`.
///
/// Returns the value and the offset one past its last byte. When several
/// values are packed back-to-back in one buffer, feed the returned offset
/// into the next call.
pub fn decode_from_bytes<T: WireDecode>(
    buf: &[u8],
    offset: usize,
) -> Result<(T, usize), CodecError> {
    let mut r = RecordReader::new(buf, offset);
    let value = T::decode(&mut r)?;
    Ok((value, r.offset()))
}

// Primitive impls, so sequences hold primitives and records uniformly.

impl WireEncode for String {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(self)
    }
}

impl WireDecode for String {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        r.read_text()
    }
}

impl WireEncode for u64 {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_u64(*self);
        Ok(())
    }
}

impl WireDecode for u64 {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        r.read_u64()
    }
}

impl WireEncode for U256 {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_u256(*self);
        Ok(())
    }
}

impl WireDecode for U256 {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        r.read_u256()
    }
}

impl<T: WireEncode> WireEncode for Vec<T> {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_sequence(self, |w, item| item.encode(w))
    }
}

impl<T: WireDecode> WireDecode for Vec<T> {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        r.read_sequence(T::decode)
    }
}
