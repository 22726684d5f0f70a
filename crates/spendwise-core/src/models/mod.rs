//! Data models for spendwise.

pub mod config;
pub mod ledger;
