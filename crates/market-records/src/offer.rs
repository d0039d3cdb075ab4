//! Offers made on listed NFTs.

use market_codec::{CodecError, RecordReader, RecordWriter, WireDecode, WireEncode, U256};

/// An offer to buy a specific NFT at a proposed price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub offerer: String,
    pub collection: String,
    pub token_id: U256,

    /// Proposed price, in the ledger's smallest unit.
    pub offer_price: u64,

    /// When the offer was made, milliseconds since the Unix epoch.
    pub offer_time: u64,
}

impl Offer {
    pub fn new(
        offerer: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        offer_price: u64,
        offer_time: u64,
    ) -> Self {
        Offer {
            offerer: offerer.into(),
            collection: collection.into(),
            token_id,
            offer_price,
            offer_time,
        }
    }
}

impl WireEncode for Offer {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.offerer)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.offer_price);
        w.write_u64(self.offer_time);
        Ok(())
    }
}

impl WireDecode for Offer {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let offerer = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let offer_price = r.read_u64()?;
        let offer_time = r.read_u64()?;
        Ok(Offer {
            offerer,
            collection,
            token_id,
            offer_price,
            offer_time,
        })
    }
}
