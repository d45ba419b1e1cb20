//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::EntryId;
pub use money::{CurrencyFormat, DigitGrouping, round_whole};
