//! Command handlers: build a record, encode it, talk to the node,
//! decode what comes back, report on the console.
//!
//! Mutating calls submit a full record as their parameter; the calls
//! that act on an existing listing/offer/auction (buy, remove, accept,
//! finalize) first read the current record from the node and submit
//! exactly the bytes-equivalent record back, attaching coins where the
//! operation moves funds.

use anyhow::Result;
use chrono::{DateTime, Utc};
use market_codec::{decode_from_bytes, encode_to_bytes, CodecError, RecordWriter, WireDecode, U256};
use market_records::{Auction, Bid, FractionalSellListing, Offer, SaleHistoryEntry, SellListing};
use tracing::debug;

use crate::cli::Command;
use crate::config::ClientConfig;
use crate::node::{CallRequest, NodeClient, ReadRequest};

pub async fn run(config: ClientConfig, command: Command) -> Result<()> {
    let mut node = NodeClient::connect(&config.node_addr).await?;

    match command {
        Command::Sell {
            collection,
            token_id,
            price,
            expires_in,
        } => {
            let listing = SellListing::new(
                config.account.clone(),
                collection,
                token_id,
                price,
                expires_at(expires_in),
            );
            debug!(?listing, "submitting sell listing");
            let parameter = encode_to_bytes(&listing)?;
            let op = node
                .submit_call(call(&config, "sell_offer", parameter, 0))
                .await?;
            println!("listing submitted, operation {}", op);
        }

        Command::GetListing {
            collection,
            token_id,
        } => {
            let listing: SellListing =
                fetch(&mut node, &config, "getSellOffer", &collection, token_id).await?;
            print_listing(&listing);
        }

        Command::RemoveListing {
            collection,
            token_id,
        } => {
            let listing: SellListing =
                fetch(&mut node, &config, "getSellOffer", &collection, token_id).await?;
            let parameter = encode_to_bytes(&listing)?;
            let op = node
                .submit_call(call(&config, "remove_sell_offer", parameter, 0))
                .await?;
            println!("listing removal submitted, operation {}", op);
        }

        Command::Buy {
            collection,
            token_id,
        } => {
            let listing: SellListing =
                fetch(&mut node, &config, "getSellOffer", &collection, token_id).await?;
            let coins = listing.price;
            let parameter = encode_to_bytes(&listing)?;
            let op = node
                .submit_call(call(&config, "buy_nft", parameter, coins))
                .await?;
            println!("purchase of token {} submitted for {}, operation {}", token_id, coins, op);
        }

        Command::MakeOffer {
            collection,
            token_id,
            price,
        } => {
            let offer = Offer::new(config.account.clone(), collection, token_id, price, now_ms());
            debug!(?offer, "submitting offer");
            let parameter = encode_to_bytes(&offer)?;
            let op = node
                .submit_call(call(&config, "make_nft_offer", parameter, price))
                .await?;
            println!("offer submitted, operation {}", op);
        }

        Command::GetOffer {
            collection,
            token_id,
        } => {
            let offer: Offer =
                fetch(&mut node, &config, "getNftOffer", &collection, token_id).await?;
            print_offer(&offer);
        }

        Command::AcceptOffer {
            collection,
            token_id,
        } => {
            let offer: Offer =
                fetch(&mut node, &config, "getNftOffer", &collection, token_id).await?;
            let parameter = encode_to_bytes(&offer)?;
            let op = node
                .submit_call(call(&config, "accept_nft_offer", parameter, 0))
                .await?;
            println!(
                "accepted offer of {} from {}, operation {}",
                offer.offer_price, offer.offerer, op
            );
        }

        Command::Auction {
            collection,
            token_id,
            start_price,
            min_increment,
            expires_in,
        } => {
            let auction = Auction::new(
                config.account.clone(),
                collection,
                token_id,
                start_price,
                min_increment,
                expires_at(expires_in),
            );
            debug!(?auction, "submitting auction");
            let parameter = encode_to_bytes(&auction)?;
            let op = node
                .submit_call(call(&config, "list_nft_for_auction", parameter, 0))
                .await?;
            println!("auction submitted, operation {}", op);
        }

        Command::GetAuction {
            collection,
            token_id,
        } => {
            let auction: Auction =
                fetch(&mut node, &config, "getAuction", &collection, token_id).await?;
            print_auction(&auction);
        }

        Command::Bid {
            collection,
            token_id,
            amount,
        } => {
            let bid = Bid::new(config.account.clone(), collection, token_id, amount, now_ms());
            debug!(?bid, "submitting bid");
            let parameter = encode_to_bytes(&bid)?;
            let op = node
                .submit_call(call(&config, "place_bid", parameter, amount))
                .await?;
            println!("bid submitted, operation {}", op);
        }

        Command::GetBid {
            collection,
            token_id,
        } => {
            let bid: Bid = fetch(&mut node, &config, "getBid", &collection, token_id).await?;
            print_bid(&bid);
        }

        Command::FinalizeAuction {
            collection,
            token_id,
        } => {
            let auction: Auction =
                fetch(&mut node, &config, "getAuction", &collection, token_id).await?;
            let parameter = encode_to_bytes(&auction)?;
            let op = node
                .submit_call(call(&config, "finalize_auction", parameter, 0))
                .await?;
            println!("auction settlement submitted, operation {}", op);
        }

        Command::SellFraction {
            collection,
            token_id,
            fractions,
            price,
            expires_in,
        } => {
            let listing = FractionalSellListing::new(
                config.account.clone(),
                collection,
                token_id,
                fractions,
                price,
                expires_at(expires_in),
            );
            debug!(?listing, "submitting fractional listing");
            let parameter = encode_to_bytes(&listing)?;
            let op = node
                .submit_call(call(&config, "sell_fraction", parameter, 0))
                .await?;
            println!("fractional listing submitted, operation {}", op);
        }

        Command::GetFractionListing {
            collection,
            token_id,
        } => {
            let listing: FractionalSellListing =
                fetch(&mut node, &config, "getFracSellOffer", &collection, token_id).await?;
            print_fraction_listing(&listing);
        }

        Command::BuyFraction {
            collection,
            token_id,
        } => {
            let listing: FractionalSellListing =
                fetch(&mut node, &config, "getFracSellOffer", &collection, token_id).await?;
            let coins = listing.price;
            let parameter = encode_to_bytes(&listing)?;
            let op = node
                .submit_call(call(&config, "buy_fraction", parameter, coins))
                .await?;
            println!(
                "purchase of {} fractions submitted for {}, operation {}",
                listing.fractions, coins, op
            );
        }

        Command::History => {
            let buf = node
                .read_call(read(&config, "getHistorySales", Vec::new()))
                .await?;
            let (entries, _) = decode_from_bytes::<Vec<SaleHistoryEntry>>(&buf, 0)?;
            print_history(&entries);
        }
    }

    Ok(())
}

/// Read a single record from the node: the standard token query is
/// collection address plus token id.
async fn fetch<T: WireDecode>(
    node: &mut NodeClient,
    config: &ClientConfig,
    function: &str,
    collection: &str,
    token_id: U256,
) -> Result<T> {
    let parameter = token_query(collection, token_id)?;
    let buf = node.read_call(read(config, function, parameter)).await?;
    let (value, offset) = decode_from_bytes::<T>(&buf, 0)?;
    debug!("decoded {} response, {} bytes consumed", function, offset);
    Ok(value)
}

fn token_query(collection: &str, token_id: U256) -> Result<Vec<u8>, CodecError> {
    let mut w = RecordWriter::new();
    w.write_text(collection)?;
    w.write_u256(token_id);
    Ok(w.finish())
}

fn call(config: &ClientConfig, function: &str, parameter: Vec<u8>, coins: u64) -> CallRequest {
    CallRequest {
        target: config.contract.clone(),
        function: function.to_string(),
        parameter,
        max_gas: config.max_gas,
        coins,
        fee: config.fee,
    }
}

fn read(config: &ClientConfig, function: &str, parameter: Vec<u8>) -> ReadRequest {
    ReadRequest {
        target: config.contract.clone(),
        function: function.to_string(),
        parameter,
        max_gas: config.max_gas,
    }
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

fn expires_at(expires_in_secs: u64) -> u64 {
    now_ms().saturating_add(expires_in_secs.saturating_mul(1000))
}

fn format_ms(ms: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn print_listing(listing: &SellListing) {
    println!("sell listing");
    println!("  seller:     {}", listing.seller);
    println!("  collection: {}", listing.collection);
    println!("  token:      {}", listing.token_id);
    println!("  price:      {}", listing.price);
    println!("  expires:    {}", format_ms(listing.expiration));
}

fn print_offer(offer: &Offer) {
    println!("offer");
    println!("  offerer:    {}", offer.offerer);
    println!("  collection: {}", offer.collection);
    println!("  token:      {}", offer.token_id);
    println!("  price:      {}", offer.offer_price);
    println!("  made:       {}", format_ms(offer.offer_time));
}

fn print_auction(auction: &Auction) {
    println!("auction");
    println!("  seller:        {}", auction.seller);
    println!("  collection:    {}", auction.collection);
    println!("  token:         {}", auction.token_id);
    println!("  start price:   {}", auction.start_price);
    println!("  min increment: {}", auction.min_increment);
    println!("  expires:       {}", format_ms(auction.expiration));
}

fn print_bid(bid: &Bid) {
    println!("bid");
    println!("  bidder:     {}", bid.bidder);
    println!("  collection: {}", bid.collection);
    println!("  token:      {}", bid.token_id);
    println!("  amount:     {}", bid.bid_amount);
    println!("  placed:     {}", format_ms(bid.bid_time));
}

fn print_fraction_listing(listing: &FractionalSellListing) {
    println!("fractional listing");
    println!("  seller:     {}", listing.seller);
    println!("  collection: {}", listing.collection);
    println!("  token:      {}", listing.token_id);
    println!("  fractions:  {}", listing.fractions);
    println!("  price:      {}", listing.price);
    println!("  expires:    {}", format_ms(listing.expiration));
}

fn print_history(entries: &[SaleHistoryEntry]) {
    if entries.is_empty() {
        println!("no sales recorded");
        return;
    }
    println!("{} sale(s)", entries.len());
    for entry in entries {
        println!(
            "  [{}] {} token {} in {}: {} -> {} for {}",
            format_ms(entry.sale_time),
            entry.sale_type,
            entry.token_id,
            entry.collection,
            entry.seller,
            entry.buyer,
            entry.sale_price,
        );
    }
}
