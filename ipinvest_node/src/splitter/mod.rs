//! Andromeda Splitter ADO integration.
//!
//! [`messages`] assembles unsigned transaction bodies and instantiate
//! messages for the Splitter contract; [`client`] runs unauthenticated REST
//! queries against the chain. Nothing here signs or broadcasts — signing is
//! the wallet's job.

pub mod client;
pub mod messages;

pub use client::{BalanceInfo, ChainClient, ChainError};
pub use messages::{Recipient, SplitterInstantiateMsg, TxBody};
