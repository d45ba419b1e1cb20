//! Display-ready rows for the itemized detail table.

use chrono::NaiveDate;
use haulbook_shared::TableWidthMode;
use haulbook_shared::types::CurrencyFormat;

use super::types::{Alignment, Column, DATE_FORMAT, DetailRow, PLACEHOLDER};
use crate::ledger::LedgerEntry;

/// Header, fixed width and alignment of each detail column, in order.
const COLUMNS: [(&str, u16, Alignment); 10] = [
    ("Date", 22, Alignment::Left),
    ("Vehicle No.", 28, Alignment::Left),
    ("Weight", 20, Alignment::Left),
    ("Transport", 32, Alignment::Left),
    ("Place", 26, Alignment::Left),
    ("Rent", 24, Alignment::Right),
    ("Advance", 24, Alignment::Right),
    ("Balance", 24, Alignment::Right),
    ("Balance Date", 24, Alignment::Left),
    ("Status", 20, Alignment::Left),
];

/// Returns the detail table column layout.
///
/// Widths are dropped in auto-fit mode so the renderer sizes columns itself.
#[must_use]
pub fn detail_columns(mode: TableWidthMode) -> Vec<Column> {
    COLUMNS
        .iter()
        .map(|&(header, width, alignment)| Column {
            header: header.to_string(),
            width: match mode {
                TableWidthMode::FixedWidth => Some(width),
                TableWidthMode::AutoFit => None,
            },
            alignment,
        })
        .collect()
}

/// Maps ledger entries to detail rows.
#[derive(Debug, Clone, Copy)]
pub struct RowFormatter<'a> {
    currency: &'a CurrencyFormat,
}

impl<'a> RowFormatter<'a> {
    /// Creates a formatter using the given currency format.
    #[must_use]
    pub const fn new(currency: &'a CurrencyFormat) -> Self {
        Self { currency }
    }

    /// Formats every entry. One row per entry, input order kept.
    #[must_use]
    pub fn format_all(&self, entries: &[LedgerEntry]) -> Vec<DetailRow> {
        entries.iter().map(|entry| self.format(entry)).collect()
    }

    /// Formats a single entry.
    #[must_use]
    pub fn format(&self, entry: &LedgerEntry) -> DetailRow {
        let advance = match entry.advance_amount {
            Some(amount) if !amount.is_zero() => self.currency.format(amount),
            _ => PLACEHOLDER.to_string(),
        };

        DetailRow {
            entry_id: entry.id.clone(),
            date: format_date(entry.date),
            vehicle_number: or_placeholder(&entry.vehicle_number),
            weight: or_placeholder(&entry.weight),
            transport_name: or_placeholder(&entry.transport_name),
            place: or_placeholder(&entry.place),
            rent: self.currency.format(entry.rent_amount),
            advance,
            balance: self.currency.format(entry.balance()),
            balance_date: entry
                .balance_date
                .map_or_else(|| PLACEHOLDER.to_string(), format_date),
            status: or_placeholder(entry.balance_status.as_str()),
        }
    }
}

/// Formats a date as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BalanceStatus;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_entry() {
        let currency = CurrencyFormat::rupee_symbol();
        let entry = LedgerEntry::new(date(2024, 3, 5), "MH12AB1234", dec!(125000), BalanceStatus::partial())
            .with_id("e-1")
            .with_advance(dec!(25000))
            .with_weight("12 T")
            .with_transport("Sharma Roadways")
            .with_place("Pune")
            .with_balance_date(date(2024, 4, 1));

        let row = RowFormatter::new(&currency).format(&entry);

        assert_eq!(row.entry_id.as_str(), "e-1");
        assert_eq!(row.date, "05/03/2024");
        assert_eq!(row.vehicle_number, "MH12AB1234");
        assert_eq!(row.weight, "12 T");
        assert_eq!(row.transport_name, "Sharma Roadways");
        assert_eq!(row.place, "Pune");
        assert_eq!(row.rent, "₹1,25,000");
        assert_eq!(row.advance, "₹25,000");
        assert_eq!(row.balance, "₹1,00,000");
        assert_eq!(row.balance_date, "01/04/2024");
        assert_eq!(row.status, "PARTIAL");
    }

    #[test]
    fn test_empty_fields_use_placeholder() {
        let currency = CurrencyFormat::rupee_symbol();
        let entry = LedgerEntry::new(date(2024, 12, 31), "", dec!(800), BalanceStatus::default());

        let row = RowFormatter::new(&currency).format(&entry);

        assert_eq!(row.date, "31/12/2024");
        assert_eq!(row.vehicle_number, PLACEHOLDER);
        assert_eq!(row.weight, PLACEHOLDER);
        assert_eq!(row.transport_name, PLACEHOLDER);
        assert_eq!(row.place, PLACEHOLDER);
        assert_eq!(row.advance, PLACEHOLDER);
        assert_eq!(row.balance_date, PLACEHOLDER);
        assert_eq!(row.status, PLACEHOLDER);
        assert_eq!(row.balance, "₹800");
    }

    #[rstest]
    #[case(None, "-", "₹1,000")]
    #[case(Some(dec!(0)), "-", "₹1,000")]
    #[case(Some(dec!(1000)), "₹1,000", "₹0")]
    #[case(Some(dec!(1500)), "₹1,500", "-₹500")]
    fn test_advance_and_balance_cells(
        #[case] advance: Option<Decimal>,
        #[case] expected_advance: &str,
        #[case] expected_balance: &str,
    ) {
        let currency = CurrencyFormat::rupee_symbol();
        let mut entry = LedgerEntry::new(date(2024, 1, 1), "V1", dec!(1000), BalanceStatus::unpaid());
        entry.advance_amount = advance;

        let row = RowFormatter::new(&currency).format(&entry);
        assert_eq!(row.advance, expected_advance);
        assert_eq!(row.balance, expected_balance);
    }

    #[test]
    fn test_textual_currency_prefix() {
        let currency = CurrencyFormat::rupee_text();
        let entry = LedgerEntry::new(date(2024, 1, 1), "V1", dec!(2300), BalanceStatus::paid());

        let row = RowFormatter::new(&currency).format(&entry);
        assert_eq!(row.rent, "Rs. 2,300");
    }

    #[test]
    fn test_format_all_keeps_order() {
        let currency = CurrencyFormat::rupee_symbol();
        let entries: Vec<LedgerEntry> = ["C", "A", "B"]
            .iter()
            .map(|v| LedgerEntry::new(date(2024, 1, 1), *v, dec!(1), BalanceStatus::paid()))
            .collect();

        let rows = RowFormatter::new(&currency).format_all(&entries);
        let vehicles: Vec<&str> = rows.iter().map(|r| r.vehicle_number.as_str()).collect();
        assert_eq!(vehicles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_columns_by_width_mode() {
        let fixed = detail_columns(TableWidthMode::FixedWidth);
        assert_eq!(fixed.len(), 10);
        assert!(fixed.iter().all(|c| c.width.is_some()));

        let auto = detail_columns(TableWidthMode::AutoFit);
        assert!(auto.iter().all(|c| c.width.is_none()));

        let right: Vec<&str> = fixed
            .iter()
            .filter(|c| c.alignment == Alignment::Right)
            .map(|c| c.header.as_str())
            .collect();
        assert_eq!(right, vec!["Rent", "Advance", "Balance"]);
    }
}
