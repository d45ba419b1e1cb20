//! Per-status counts and percentages.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::{BalanceStatus, LedgerEntry};

/// Count and share of one status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusShare {
    /// Raw status label.
    pub status: BalanceStatus,
    /// Number of entries with this label.
    pub count: usize,
    /// `count / total * 100`, rounded half away from zero.
    pub percentage: Decimal,
}

/// Groups entries by status label in first-seen order.
///
/// Every label is tallied, known or not. Percentages keep `precision`
/// decimal places, so three equal thirds give 33/33/33 at precision 0.
/// An empty collection yields no groups.
#[must_use]
pub fn distribute(entries: &[LedgerEntry], precision: u32) -> Vec<StatusShare> {
    let mut index: HashMap<&BalanceStatus, usize> = HashMap::new();
    let mut counts: Vec<(&BalanceStatus, usize)> = Vec::new();

    for entry in entries {
        let status = &entry.balance_status;
        if let Some(&slot) = index.get(status) {
            counts[slot].1 += 1;
        } else {
            index.insert(status, counts.len());
            counts.push((status, 1));
        }
    }

    let total = entries.len();
    counts
        .into_iter()
        .map(|(status, count)| StatusShare {
            status: status.clone(),
            count,
            percentage: percentage(count, total, precision),
        })
        .collect()
}

/// Share of `count` in `total` as a percentage. Zero when `total` is zero.
///
/// The result always carries exactly `precision` decimal places, so exact
/// shares (`50.0`) and rounded ones (`16.7`) serialize alike.
#[must_use]
pub fn percentage(count: usize, total: usize, precision: u32) -> Decimal {
    let mut share = if total == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(count) * Decimal::ONE_HUNDRED / Decimal::from(total))
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
    };
    share.rescale(precision);
    share
}
