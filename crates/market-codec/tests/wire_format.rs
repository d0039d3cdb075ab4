//! Byte-level behavior of the writer and reader primitives.

use market_codec::{
    decode_from_bytes, encode_to_bytes, CodecError, ParseU256Error, RecordReader, RecordWriter,
    U256, MAX_TEXT_LEN,
};

#[test]
fn empty_text_is_four_zero_bytes() {
    let mut w = RecordWriter::new();
    w.write_text("").unwrap();
    let buf = w.finish();
    assert_eq!(buf, vec![0, 0, 0, 0]);

    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(r.read_text().unwrap(), "");
    assert_eq!(r.offset(), 4);
}

#[test]
fn text_is_length_prefix_then_utf8() {
    let mut w = RecordWriter::new();
    w.write_text("S1").unwrap();
    let buf = w.finish();
    assert_eq!(&buf[..4], &[2, 0, 0, 0]);
    assert_eq!(&buf[4..], b"S1");
}

#[test]
fn u64_is_little_endian() {
    let mut w = RecordWriter::new();
    w.write_u64(0x0102_0304_0506_0708);
    assert_eq!(w.finish(), vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn u256_is_little_endian_zero_padded() {
    let mut w = RecordWriter::new();
    w.write_u256(U256::from_u64(42));
    let buf = w.finish();
    assert_eq!(buf.len(), 32);
    assert_eq!(buf[0], 42);
    assert!(buf[1..].iter().all(|&b| b == 0));
}

#[test]
fn truncated_u64_reports_shortfall() {
    let buf = [1u8, 2, 3];
    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(
        r.read_u64(),
        Err(CodecError::Truncated {
            needed: 8,
            remaining: 3
        })
    );
}

#[test]
fn truncated_text_payload_fails_after_prefix() {
    // Prefix says 5 bytes, only 2 remain.
    let mut buf = 5u32.to_le_bytes().to_vec();
    buf.extend_from_slice(b"ab");
    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(
        r.read_text(),
        Err(CodecError::Truncated {
            needed: 5,
            remaining: 2
        })
    );
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut buf = 2u32.to_le_bytes().to_vec();
    buf.extend_from_slice(&[0xff, 0xfe]);
    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(r.read_text(), Err(CodecError::InvalidUtf8));
}

#[test]
fn oversized_text_rejected_before_any_write() {
    let s = "a".repeat(MAX_TEXT_LEN + 1);
    let mut w = RecordWriter::new();
    assert_eq!(
        w.write_text(&s),
        Err(CodecError::RangeExceeded("text length"))
    );
    assert!(w.is_empty());
}

#[test]
fn oversized_length_prefix_rejected_on_read() {
    let buf = u32::MAX.to_le_bytes();
    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(r.read_text(), Err(CodecError::RangeExceeded("text length")));
}

#[test]
fn sequence_of_u64_round_trips() {
    let values = vec![1u64, 2, 3];
    let buf = encode_to_bytes(&values).unwrap();
    assert_eq!(&buf[..4], &[3, 0, 0, 0]);
    assert_eq!(buf.len(), 4 + 3 * 8);

    let (decoded, offset) = decode_from_bytes::<Vec<u64>>(&buf, 0).unwrap();
    assert_eq!(decoded, values);
    assert_eq!(offset, buf.len());
}

#[test]
fn empty_sequence_is_four_zero_bytes() {
    let buf = encode_to_bytes(&Vec::<u64>::new()).unwrap();
    assert_eq!(buf, vec![0, 0, 0, 0]);

    let (decoded, offset) = decode_from_bytes::<Vec<u64>>(&buf, 0).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(offset, 4);
}

#[test]
fn sequence_of_text_round_trips() {
    let values = vec!["one".to_string(), String::new(), "three".to_string()];
    let buf = encode_to_bytes(&values).unwrap();
    let (decoded, offset) = decode_from_bytes::<Vec<String>>(&buf, 0).unwrap();
    assert_eq!(decoded, values);
    assert_eq!(offset, buf.len());
}

#[test]
fn reader_starts_at_caller_offset() {
    let mut w = RecordWriter::new();
    w.write_u64(7);
    w.write_text("x").unwrap();
    let buf = w.finish();

    let mut r = RecordReader::new(&buf, 8);
    assert_eq!(r.read_text().unwrap(), "x");
    assert_eq!(r.offset(), buf.len());
}

#[test]
fn u256_parses_and_displays_max_value() {
    let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    let v: U256 = max.parse().unwrap();
    assert_eq!(v.to_le_bytes(), [0xff; 32]);
    assert_eq!(v.to_string(), max);
}

#[test]
fn u256_rejects_overflow() {
    // 2^256
    let err = "115792089237316195423570985008687907853269984665640564039457584007913129639936"
        .parse::<U256>()
        .unwrap_err();
    assert_eq!(err, ParseU256Error::Overflow);
}

#[test]
fn u256_rejects_non_digits() {
    assert_eq!("12a".parse::<U256>(), Err(ParseU256Error::InvalidDigit));
    assert_eq!("".parse::<U256>(), Err(ParseU256Error::InvalidDigit));
}

#[test]
fn u256_display_round_trips_small_values() {
    assert_eq!(U256::ZERO.to_string(), "0");
    assert_eq!(U256::from_u64(1).to_string(), "1");
    assert_eq!(U256::from_u64(10_000_000_019).to_string(), "10000000019");
    assert_eq!("42".parse::<U256>().unwrap(), U256::from_u64(42));
}
