//! Scalar statistics over a set of ledger entries.

use std::collections::HashSet;

use haulbook_shared::types::round_whole;
use rust_decimal::Decimal;

use crate::ledger::LedgerEntry;

/// Totals, averages and cardinalities of an entry collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryStats {
    /// Number of entries.
    pub total_entries: usize,
    /// Sum of rent over all entries.
    pub total_amount: Decimal,
    /// Sum of rent over `PAID` entries.
    pub paid_amount: Decimal,
    /// Sum of outstanding balance over entries that are not `PAID`.
    pub unpaid_amount: Decimal,
    /// Mean rent, rounded to whole units. Zero for an empty collection.
    pub average_amount: Decimal,
    /// Number of distinct vehicle numbers.
    pub unique_vehicles: usize,
    /// Number of distinct non-empty weights.
    pub unique_weights: usize,
}

impl EntryStats {
    /// Computes statistics for the given entries.
    ///
    /// Unpaid amount sums `balance`, not rent, so it reflects only what is
    /// still outstanding. Negative balances are kept as-is.
    #[must_use]
    pub fn compute(entries: &[LedgerEntry]) -> Self {
        let mut total_amount = Decimal::ZERO;
        let mut paid_amount = Decimal::ZERO;
        let mut unpaid_amount = Decimal::ZERO;
        let mut vehicles: HashSet<&str> = HashSet::new();
        let mut weights: HashSet<&str> = HashSet::new();

        for entry in entries {
            total_amount += entry.rent_amount;
            if entry.balance_status.is_paid() {
                paid_amount += entry.rent_amount;
            } else {
                unpaid_amount += entry.balance();
            }

            vehicles.insert(entry.vehicle_number.as_str());
            if !entry.weight.is_empty() {
                weights.insert(entry.weight.as_str());
            }
        }

        Self {
            total_entries: entries.len(),
            total_amount,
            paid_amount,
            unpaid_amount,
            average_amount: average(total_amount, entries.len()),
            unique_vehicles: vehicles.len(),
            unique_weights: weights.len(),
        }
    }
}

fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_whole(total / Decimal::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BalanceStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn entry(vehicle: &str, rent: Decimal, status: BalanceStatus) -> LedgerEntry {
        LedgerEntry::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            vehicle,
            rent,
            status,
        )
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats = EntryStats::compute(&[]);
        assert_eq!(stats, EntryStats::default());
        assert_eq!(stats.average_amount, Decimal::ZERO);
    }

    #[test]
    fn test_three_entry_scenario() {
        let entries = vec![
            entry("MH12AB1234", dec!(1000), BalanceStatus::paid()).with_advance(dec!(200)),
            entry("MH12AB1234", dec!(500), BalanceStatus::unpaid()).with_advance(dec!(0)),
            entry("KA05CD5678", dec!(800), BalanceStatus::partial()).with_advance(dec!(300)),
        ];

        let stats = EntryStats::compute(&entries);

        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_amount, dec!(2300));
        assert_eq!(stats.paid_amount, dec!(1000));
        assert_eq!(stats.unpaid_amount, dec!(1000));
        assert_eq!(stats.average_amount, dec!(767));
        assert_eq!(stats.unique_vehicles, 2);
    }

    #[test]
    fn test_unpaid_amount_keeps_negative_balance() {
        let entries = vec![
            entry("V1", dec!(300), BalanceStatus::partial()).with_advance(dec!(500)),
            entry("V2", dec!(100), BalanceStatus::unpaid()),
        ];

        let stats = EntryStats::compute(&entries);
        assert_eq!(stats.unpaid_amount, dec!(-100));
    }

    #[test]
    fn test_unknown_status_counts_as_unpaid() {
        let entries = vec![entry("V1", dec!(400), BalanceStatus::new("DISPUTED"))];

        let stats = EntryStats::compute(&entries);
        assert_eq!(stats.paid_amount, Decimal::ZERO);
        assert_eq!(stats.unpaid_amount, dec!(400));
    }

    #[test]
    fn test_unique_weights_skip_empty() {
        let entries = vec![
            entry("V1", dec!(100), BalanceStatus::paid()).with_weight("10 T"),
            entry("V2", dec!(100), BalanceStatus::paid()).with_weight("10 T"),
            entry("V3", dec!(100), BalanceStatus::paid()).with_weight("12 T"),
            entry("V4", dec!(100), BalanceStatus::paid()),
        ];

        let stats = EntryStats::compute(&entries);
        assert_eq!(stats.unique_weights, 2);
        assert_eq!(stats.unique_vehicles, 4);
    }
}
