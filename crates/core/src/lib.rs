//! Core business logic for Haulbook.
//!
//! This crate contains pure business logic with ZERO file-system or renderer
//! dependencies. Domain types and report synthesis live here.
//!
//! # Modules
//!
//! - `ledger` - Transport ledger entries and balance statuses
//! - `reports` - Report synthesis and the renderer boundary

pub mod ledger;
pub mod reports;
