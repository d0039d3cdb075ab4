//! Auction state and bids.

use market_codec::{CodecError, RecordReader, RecordWriter, WireDecode, WireEncode, U256};

/// An NFT listed for auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    pub seller: String,
    pub collection: String,
    pub token_id: U256,

    /// Opening price, in the ledger's smallest unit.
    pub start_price: u64,

    /// Minimum amount a new bid must add over the current one.
    pub min_increment: u64,

    /// Expiration, milliseconds since the Unix epoch.
    pub expiration: u64,
}

impl Auction {
    pub fn new(
        seller: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        start_price: u64,
        min_increment: u64,
        expiration: u64,
    ) -> Self {
        Auction {
            seller: seller.into(),
            collection: collection.into(),
            token_id,
            start_price,
            min_increment,
            expiration,
        }
    }
}

impl WireEncode for Auction {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.seller)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.start_price);
        w.write_u64(self.min_increment);
        w.write_u64(self.expiration);
        Ok(())
    }
}

impl WireDecode for Auction {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let seller = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let start_price = r.read_u64()?;
        let min_increment = r.read_u64()?;
        let expiration = r.read_u64()?;
        Ok(Auction {
            seller,
            collection,
            token_id,
            start_price,
            min_increment,
            expiration,
        })
    }
}

/// A bid placed on an auctioned NFT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub bidder: String,
    pub collection: String,
    pub token_id: U256,

    /// Bid amount, in the ledger's smallest unit.
    pub bid_amount: u64,

    /// When the bid was placed, milliseconds since the Unix epoch.
    pub bid_time: u64,
}

impl Bid {
    pub fn new(
        bidder: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        bid_amount: u64,
        bid_time: u64,
    ) -> Self {
        Bid {
            bidder: bidder.into(),
            collection: collection.into(),
            token_id,
            bid_amount,
            bid_time,
        }
    }
}

impl WireEncode for Bid {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.bidder)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.bid_amount);
        w.write_u64(self.bid_time);
        Ok(())
    }
}

impl WireDecode for Bid {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let bidder = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let bid_amount = r.read_u64()?;
        let bid_time = r.read_u64()?;
        Ok(Bid {
            bidder,
            collection,
            token_id,
            bid_amount,
            bid_time,
        })
    }
}
