//! Balance status labels.
//!
//! Statuses are an open set of strings. Aggregation tallies whatever label an
//! entry carries; only presentation cares about the three known kinds.

use serde::{Deserialize, Serialize};

/// Closed classification of a status label, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Fully settled.
    Paid,
    /// Nothing settled beyond the advance.
    Unpaid,
    /// Partially settled.
    Partial,
    /// Any label the engine does not recognize.
    Other,
}

/// The balance status of a ledger entry, e.g. `PAID`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceStatus(String);

impl BalanceStatus {
    /// Label for fully settled entries.
    pub const PAID: &'static str = "PAID";
    /// Label for unsettled entries.
    pub const UNPAID: &'static str = "UNPAID";
    /// Label for partially settled entries.
    pub const PARTIAL: &'static str = "PARTIAL";

    /// Wraps a raw status label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The `PAID` status.
    #[must_use]
    pub fn paid() -> Self {
        Self::new(Self::PAID)
    }

    /// The `UNPAID` status.
    #[must_use]
    pub fn unpaid() -> Self {
        Self::new(Self::UNPAID)
    }

    /// The `PARTIAL` status.
    #[must_use]
    pub fn partial() -> Self {
        Self::new(Self::PARTIAL)
    }

    /// Returns the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the label is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classifies the label. Matching is exact.
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        match self.0.as_str() {
            Self::PAID => StatusKind::Paid,
            Self::UNPAID => StatusKind::Unpaid,
            Self::PARTIAL => StatusKind::Partial,
            _ => StatusKind::Other,
        }
    }

    /// Returns true for `PAID`.
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.kind() == StatusKind::Paid
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BalanceStatus {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
