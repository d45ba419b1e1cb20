//! Transport ledger records.
//!
//! This module defines the read-only input of the report engine:
//! - Ledger entries (one billable transport trip each)
//! - Balance status labels and their known kinds

pub mod entry;
pub mod status;

pub use entry::LedgerEntry;
pub use status::{BalanceStatus, StatusKind};
