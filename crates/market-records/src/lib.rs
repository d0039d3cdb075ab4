//! market-records
//!
//! Fixed-schema marketplace records:
//! - sell listings, whole-NFT and fractional
//! - offers on listed NFTs
//! - auctions and bids
//! - sale history entries
//!
//! Each record is a plain aggregate whose field order is the wire
//! contract; the byte-level rules live in the `market-codec` crate.

pub mod auction;
pub mod history;
pub mod listing;
pub mod offer;

pub use auction::{Auction, Bid};
pub use history::SaleHistoryEntry;
pub use listing::{FractionalSellListing, SellListing};
pub use offer::Offer;
