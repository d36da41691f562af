//! IPInvest node: a demo marketplace for tokenized intellectual property.
//!
//! Ideas are minted as NFTs with a fixed fractional-token supply, investors
//! buy tokens at a fabricated valuation, and future revenue is split through
//! an Andromeda Splitter contract whose recipient list this node computes
//! ([`royalty`]) and assembles ([`splitter`]).

pub mod ai_services;
pub mod api;
pub mod config;
pub mod models;
pub mod royalty;
pub mod splitter;
pub mod storage;
