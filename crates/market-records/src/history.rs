//! Completed-sale history.
//!
//! The node returns history as a sequence of nested entries, so the
//! usual read is `decode_from_bytes::<Vec<SaleHistoryEntry>>`.

use market_codec::{CodecError, RecordReader, RecordWriter, WireDecode, WireEncode, U256};

/// One completed sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleHistoryEntry {
    /// How the sale concluded, e.g. `"sell"`, `"auction"`, `"fraction"`.
    pub sale_type: String,

    pub seller: String,
    pub buyer: String,
    pub collection: String,
    pub token_id: U256,

    /// Final price, in the ledger's smallest unit.
    pub sale_price: u64,

    /// When the sale settled, milliseconds since the Unix epoch.
    pub sale_time: u64,
}

impl SaleHistoryEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sale_type: impl Into<String>,
        seller: impl Into<String>,
        buyer: impl Into<String>,
        collection: impl Into<String>,
        token_id: U256,
        sale_price: u64,
        sale_time: u64,
    ) -> Self {
        SaleHistoryEntry {
            sale_type: sale_type.into(),
            seller: seller.into(),
            buyer: buyer.into(),
            collection: collection.into(),
            token_id,
            sale_price,
            sale_time,
        }
    }
}

impl WireEncode for SaleHistoryEntry {
    fn encode(&self, w: &mut RecordWriter) -> Result<(), CodecError> {
        w.write_text(&self.sale_type)?;
        w.write_text(&self.seller)?;
        w.write_text(&self.buyer)?;
        w.write_text(&self.collection)?;
        w.write_u256(self.token_id);
        w.write_u64(self.sale_price);
        w.write_u64(self.sale_time);
        Ok(())
    }
}

impl WireDecode for SaleHistoryEntry {
    fn decode(r: &mut RecordReader<'_>) -> Result<Self, CodecError> {
        let sale_type = r.read_text()?;
        let seller = r.read_text()?;
        let buyer = r.read_text()?;
        let collection = r.read_text()?;
        let token_id = r.read_u256()?;
        let sale_price = r.read_u64()?;
        let sale_time = r.read_u64()?;
        Ok(SaleHistoryEntry {
            sale_type,
            seller,
            buyer,
            collection,
            token_id,
            sale_price,
            sale_time,
        })
    }
}
