//! Encode/decode pairing for every record type.

use market_codec::{
    decode_from_bytes, encode_to_bytes, CodecError, RecordReader, RecordWriter, WireDecode,
    WireEncode, U256,
};
use market_records::{Auction, Bid, FractionalSellListing, Offer, SaleHistoryEntry, SellListing};

fn assert_round_trip<T>(value: &T)
where
    T: WireEncode + WireDecode + PartialEq + std::fmt::Debug,
{
    let buf = encode_to_bytes(value).unwrap();
    let (decoded, offset) = decode_from_bytes::<T>(&buf, 0).unwrap();
    assert_eq!(&decoded, value);
    assert_eq!(offset, buf.len());
}

fn sample_listing() -> SellListing {
    SellListing::new(
        "S1",
        "C1",
        U256::from_u64(42),
        1_000_000_000,
        1_722_452_642_000,
    )
}

#[test]
fn sell_listing_concrete_layout() {
    let listing = sample_listing();
    let buf = encode_to_bytes(&listing).unwrap();

    // 4+2 seller, 4+2 collection, 32 token id, 8 price, 8 expiration
    assert_eq!(buf.len(), 60);
    assert_eq!(&buf[0..4], &[2, 0, 0, 0]);
    assert_eq!(&buf[4..6], b"S1");
    assert_eq!(&buf[6..10], &[2, 0, 0, 0]);
    assert_eq!(&buf[10..12], b"C1");
    assert_eq!(buf[12], 42);
    assert!(buf[13..44].iter().all(|&b| b == 0));
    assert_eq!(&buf[44..52], &1_000_000_000u64.to_le_bytes());
    assert_eq!(&buf[52..60], &1_722_452_642_000u64.to_le_bytes());

    let (decoded, offset) = decode_from_bytes::<SellListing>(&buf, 0).unwrap();
    assert_eq!(decoded, listing);
    assert_eq!(offset, 60);
}

#[test]
fn sell_listing_round_trips() {
    assert_round_trip(&sample_listing());
}

#[test]
fn offer_round_trips() {
    assert_round_trip(&Offer::new(
        "AU12offerer",
        "AS12collection",
        U256::from_u64(7),
        250_000,
        1_700_000_000_123,
    ));
}

#[test]
fn auction_round_trips() {
    assert_round_trip(&Auction::new(
        "AU12seller",
        "AS12collection",
        U256::from_u64(9),
        1_000,
        50,
        1_800_000_000_000,
    ));
}

#[test]
fn bid_round_trips() {
    assert_round_trip(&Bid::new(
        "AU12bidder",
        "AS12collection",
        U256::from_u64(9),
        1_050,
        1_750_000_000_000,
    ));
}

#[test]
fn fractional_listing_round_trips() {
    assert_round_trip(&FractionalSellListing::new(
        "AU12seller",
        "AS12collection",
        U256::from_u64(3),
        100,
        5_000,
        1_800_000_000_000,
    ));
}

#[test]
fn history_entry_round_trips() {
    assert_round_trip(&SaleHistoryEntry::new(
        "auction",
        "AU12seller",
        "AU12buyer",
        "AS12collection",
        U256::from_u64(11),
        99_999,
        1_600_000_000_000,
    ));
}

#[test]
fn empty_strings_round_trip() {
    assert_round_trip(&SellListing::new("", "", U256::ZERO, 0, 0));
}

#[test]
fn large_token_ids_round_trip() {
    let token_id: U256 =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            .parse()
            .unwrap();
    assert_round_trip(&SellListing::new("S", "C", token_id, u64::MAX, u64::MAX));
}

#[test]
fn offset_chaining_reconstructs_both_records() {
    let listing = sample_listing();
    let bid = Bid::new("B1", "C1", U256::from_u64(42), 500, 1_000);

    let mut buf = encode_to_bytes(&listing).unwrap();
    buf.extend_from_slice(&encode_to_bytes(&bid).unwrap());

    let (first, mid) = decode_from_bytes::<SellListing>(&buf, 0).unwrap();
    let (second, end) = decode_from_bytes::<Bid>(&buf, mid).unwrap();
    assert_eq!(first, listing);
    assert_eq!(second, bid);
    assert_eq!(end, buf.len());
}

#[test]
fn truncation_fails_at_the_price_field() {
    let buf = encode_to_bytes(&sample_listing()).unwrap();
    // Seller, collection and token id decode (44 bytes); the 8-byte
    // price has only 4 bytes left.
    let err = decode_from_bytes::<SellListing>(&buf[..48], 0).unwrap_err();
    assert_eq!(
        err,
        CodecError::Truncated {
            needed: 8,
            remaining: 4
        }
    );
}

#[test]
fn truncation_fails_at_the_collection_prefix() {
    let buf = encode_to_bytes(&sample_listing()).unwrap();
    // Cut inside the collection length prefix.
    let err = decode_from_bytes::<SellListing>(&buf[..8], 0).unwrap_err();
    assert_eq!(
        err,
        CodecError::Truncated {
            needed: 4,
            remaining: 2
        }
    );
}

#[test]
fn nested_record_is_inlined_without_prefix() {
    let bid = Bid::new("B1", "C1", U256::from_u64(7), 100, 5);

    let mut w = RecordWriter::new();
    w.write_u64(0xdead_beef);
    w.write_nested(&bid).unwrap();
    let buf = w.finish();

    let standalone = encode_to_bytes(&bid).unwrap();
    assert_eq!(&buf[8..], &standalone[..]);

    let mut r = RecordReader::new(&buf, 0);
    assert_eq!(r.read_u64().unwrap(), 0xdead_beef);
    let decoded: Bid = r.read_nested().unwrap();
    assert_eq!(decoded, bid);
    assert_eq!(r.offset(), buf.len());
}

#[test]
fn history_sequence_round_trips() {
    let entries = vec![
        SaleHistoryEntry::new("sell", "S1", "B1", "C1", U256::from_u64(1), 10, 1_000),
        SaleHistoryEntry::new("auction", "S2", "B2", "C1", U256::from_u64(2), 20, 2_000),
        SaleHistoryEntry::new("fraction", "S3", "B3", "C2", U256::from_u64(3), 30, 3_000),
    ];
    let buf = encode_to_bytes(&entries).unwrap();
    assert_eq!(&buf[..4], &[3, 0, 0, 0]);

    let (decoded, offset) = decode_from_bytes::<Vec<SaleHistoryEntry>>(&buf, 0).unwrap();
    assert_eq!(decoded, entries);
    assert_eq!(offset, buf.len());
}
