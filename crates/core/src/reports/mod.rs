//! Transport report generation.
//!
//! This module turns a collection of ledger entries into a report:
//! - Summary statistics (totals, averages, cardinalities)
//! - Status distribution (counts and percentages)
//! - Itemized detail table
//!
//! Synthesis is a pure single pass: aggregate, distribute, format rows,
//! assemble. Rendering is delegated through [`ReportRenderer`].

pub mod aggregator;
pub mod detail;
pub mod distribution;
pub mod error;
pub mod render;
pub mod service;
pub mod types;


pub use aggregator::EntryStats;
pub use detail::{RowFormatter, detail_columns, format_date};
pub use distribution::{StatusShare, distribute, percentage};
pub use error::ReportError;
pub use render::{ReportRenderer, render_report};
pub use service::{ReportService, status_color};
pub use types::*;
