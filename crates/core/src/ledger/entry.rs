//! Ledger entry domain types.

use chrono::NaiveDate;
use haulbook_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::BalanceStatus;

/// A single billable transport record.
///
/// Entries arrive already validated from the data-entry layer. The report
/// engine never rejects or mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// Date the transport service took place.
    pub date: NaiveDate,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Free-text weight of the goods (e.g. "12 T"). May be empty.
    #[serde(default)]
    pub weight: String,
    /// Transport company name. May be empty.
    #[serde(default)]
    pub transport_name: String,
    /// Destination or pickup place. May be empty.
    #[serde(default)]
    pub place: String,
    /// Rent charged for the trip.
    pub rent_amount: Decimal,
    /// Advance received up front, if any.
    #[serde(default)]
    pub advance_amount: Option<Decimal>,
    /// Settlement status of the remaining balance.
    #[serde(default)]
    pub balance_status: BalanceStatus,
    /// Date the balance was paid, if it was.
    #[serde(default)]
    pub balance_date: Option<NaiveDate>,
}

impl LedgerEntry {
    /// Creates an entry with empty optional fields and a fresh id.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        vehicle_number: impl Into<String>,
        rent_amount: Decimal,
        balance_status: BalanceStatus,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            date,
            vehicle_number: vehicle_number.into(),
            weight: String::new(),
            transport_name: String::new(),
            place: String::new(),
            rent_amount,
            advance_amount: None,
            balance_status,
            balance_date: None,
        }
    }

    /// Sets the entry id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the advance amount.
    #[must_use]
    pub const fn with_advance(mut self, advance: Decimal) -> Self {
        self.advance_amount = Some(advance);
        self
    }

    /// Sets the goods weight description.
    #[must_use]
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Sets the transport name.
    #[must_use]
    pub fn with_transport(mut self, transport_name: impl Into<String>) -> Self {
        self.transport_name = transport_name.into();
        self
    }

    /// Sets the place.
    #[must_use]
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    /// Sets the balance payment date.
    #[must_use]
    pub const fn with_balance_date(mut self, date: NaiveDate) -> Self {
        self.balance_date = Some(date);
        self
    }

    /// Returns the advance, treating a missing advance as zero.
    #[must_use]
    pub fn advance_or_zero(&self) -> Decimal {
        self.advance_amount.unwrap_or(Decimal::ZERO)
    }

    /// Returns the outstanding balance (rent minus advance).
    ///
    /// Negative when the advance exceeds the rent. Never clamped.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.rent_amount - self.advance_or_zero()
    }
}
