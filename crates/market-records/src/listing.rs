//! Sell listings: whole-NFT and fractional.
//!
//! Both listings are written field by field in declared order; the wire
//! carries no tags, so the decode order below is load-bearing.

use market_codec::{CodecError, RecordReader, RecordWriter, WireDecode, WireEncode, U256};

/// A fixed-price listing of a single NFT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellListing {
    /// Address of the seller.
    pub seller: String,

    /// Address of the NFT collection contract.
    pub collection: String,

    /// Token identifier within the collection.
    pub token_id: U256,

    /// Asking price, in the ledger's smallest unit.
    pub price: u64,

    /// Expiration, milliseconds since the Unix epoch.
    pub expiration: u64,
}

impl SellListing {
    pub fn new(
        seller: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        price: u64,
        expiration: u64,
    ) -> Self {
        SellListing {
            seller: seller.into(),
            collection: collection.into(),
            token_id,
            price,
            expiration,
        }
    }
}

impl WireEncode for SellListing {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.seller)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.price);
        w.write_u64(self.expiration);
        Ok(())
    }
}

impl WireDecode for SellListing {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let seller = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let price = r.read_u64()?;
        let expiration = r.read_u64()?;
        Ok(SellListing {
            seller,
            collection,
            token_id,
            price,
            expiration,
        })
    }
}

/// A listing that sells a number of fractions of a fractionalized NFT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionalSellListing {
    pub seller: String,
    pub collection: String,
    pub token_id: U256,

    /// Number of fractions offered.
    pub fractions: u64,

    /// Price for the offered fractions, in the ledger's smallest unit.
    pub price: u64,

    /// Expiration, milliseconds since the Unix epoch.
    pub expiration: u64,
}

impl FractionalSellListing {
    pub fn new(
        seller: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        fractions: u64,
        price: u64,
        expiration: u64,
    ) -> Self {
        FractionalSellListing {
            seller: seller.into(),
            collection: collection.into(),
            token_id,
            fractions,
            price,
            expiration,
        }
    }
}

impl WireEncode for FractionalSellListing {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.seller)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.fractions);
        w.write_u64(self.price);
        w.write_u64(self.expiration);
        Ok(())
    }
}

impl WireDecode for FractionalSellListing {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let seller = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let fractions = r.read_u64()?;
        let price = r.read_u64()?;
        let expiration = r.read_u64()?;
        Ok(FractionalSellListing {
            seller,
            collection,
            token_id,
            fractions,
            price,
            expiration,
        })
    }
}
