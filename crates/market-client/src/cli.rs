//! Command-line definition.

use clap::{Parser, Subcommand};
use market_codec::U256;

#[derive(Parser)]
#[clap(name = "market-client")]
#[clap(about = "List, bid on and trade NFTs through the marketplace contract")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "market.toml")]
    pub config: String,

    /// Node address override (host:port)
    #[clap(short, long)]
    pub node: Option<String>,

    /// Enable debug logging
    #[clap(short, long)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List an NFT for sale at a fixed price
    Sell {
        collection: String,
        token_id: U256,
        price: u64,
        /// Listing lifetime in seconds from now
        #[clap(long, default_value_t = 86_400)]
        expires_in: u64,
    },

    /// Fetch the active sell listing for a token
    GetListing { collection: String, token_id: U256 },

    /// Remove one of your sell listings
    RemoveListing { collection: String, token_id: U256 },

    /// Buy a listed NFT at its asking price
    Buy { collection: String, token_id: U256 },

    /// Make an offer on an NFT
    MakeOffer {
        collection: String,
        token_id: U256,
        price: u64,
    },

    /// Fetch the active offer for a token
    GetOffer { collection: String, token_id: U256 },

    /// Accept the current offer on one of your NFTs
    AcceptOffer { collection: String, token_id: U256 },

    /// Put an NFT up for auction
    Auction {
        collection: String,
        token_id: U256,
        start_price: u64,
        /// Minimum amount each bid must add over the previous one
        #[clap(long, default_value_t = 1)]
        min_increment: u64,
        /// Auction lifetime in seconds from now
        #[clap(long, default_value_t = 86_400)]
        expires_in: u64,
    },

    /// Fetch the auction state for a token
    GetAuction { collection: String, token_id: U256 },

    /// Place a bid on an auctioned NFT
    Bid {
        collection: String,
        token_id: U256,
        amount: u64,
    },

    /// Fetch the highest bid for an auctioned token
    GetBid { collection: String, token_id: U256 },

    /// Settle an expired auction
    FinalizeAuction { collection: String, token_id: U256 },

    /// List fractions of an NFT for sale
    SellFraction {
        collection: String,
        token_id: U256,
        fractions: u64,
        price: u64,
        /// Listing lifetime in seconds from now
        #[clap(long, default_value_t = 86_400)]
        expires_in: u64,
    },

    /// Fetch the active fractional listing for a token
    GetFractionListing { collection: String, token_id: U256 },

    /// Buy the fractions offered by a fractional listing
    BuyFraction { collection: String, token_id: U256 },

    /// Print the marketplace sale history
    History,
}
