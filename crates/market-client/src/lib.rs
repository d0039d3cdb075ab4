//! market-client
//!
//! One-shot CLI client for the NFT marketplace contract: encodes
//! marketplace records, submits them to a node, reads records back and
//! reports them on the console.

pub mod cli;
pub mod commands;
pub mod config;
pub mod frame;
pub mod node;
