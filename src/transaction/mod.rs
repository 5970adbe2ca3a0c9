//! Transactions as the client stores them.
//!
//! This module contains:
//! - The `RawTransaction` model with its amount and date parsing
//! - The endpoint for adding a transaction to the signed-in user's list

mod core;
mod create_endpoint;

pub use core::{Category, RawTransaction, TransactionType};
pub use create_endpoint::create_transaction_endpoint;

#[cfg(test)]
pub(crate) use core::test_utils;
