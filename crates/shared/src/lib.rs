//! Shared types, errors, and configuration for Haulbook.
//!
//! This crate provides common types used across all other crates:
//! - Money formatting with locale digit grouping
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management (report presentation and output)

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, PresentationConfig, ReportConfig, StatusColors, TableWidthMode};
pub use error::{AppError, AppResult};
