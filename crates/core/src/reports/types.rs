//! Report data types.

use chrono::{DateTime, FixedOffset, NaiveDate};
use haulbook_shared::TableWidthMode;
use haulbook_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{BalanceStatus, StatusKind};

/// Display format for every date in a report (`05/03/2024`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Shown in place of empty or missing values.
pub const PLACEHOLDER: &str = "-";

/// The period a report covers. Used only as a label; entries are not filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a new period.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the display label, e.g. `01/03/2024 - 31/03/2024`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Styling hints attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStyle {
    /// Fill color for the section title and table header.
    pub header_fill: String,
    /// Font size for the section title.
    pub title_font_size: u8,
    /// Font size for table body cells.
    pub body_font_size: u8,
}

/// Value of a summary metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SummaryValue {
    /// A cardinality.
    Count(usize),
    /// A monetary amount.
    Amount(Decimal),
}

/// One row of the summary section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Metric label.
    pub label: String,
    /// Computed value.
    pub value: SummaryValue,
    /// Display-ready value.
    pub display: String,
    /// Whether the renderer should emphasize this row.
    pub highlighted: bool,
}

/// Summary statistics section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    /// Section title.
    pub title: String,
    /// Metric rows in fixed order.
    pub rows: Vec<SummaryRow>,
    /// Color applied to highlighted rows.
    pub highlight_color: String,
    /// Styling hints.
    pub style: SectionStyle,
}

/// One status group in the distribution section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRow {
    /// Raw status label.
    pub status: BalanceStatus,
    /// Known kind of the label.
    pub kind: StatusKind,
    /// Number of entries with this status.
    pub count: usize,
    /// Share of all entries, rounded to the configured precision.
    pub percentage: Decimal,
    /// Display-ready percentage, e.g. `33%`.
    pub percentage_display: String,
    /// Color for this status.
    pub color: String,
}

/// Status distribution section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSection {
    /// Section title.
    pub title: String,
    /// Status groups in first-seen order.
    pub rows: Vec<DistributionRow>,
    /// Styling hints.
    pub style: SectionStyle,
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned.
    Left,
    /// Right aligned.
    Right,
}

/// Layout of one detail table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column header.
    pub header: String,
    /// Fixed width in renderer units, or `None` to auto-fit.
    pub width: Option<u16>,
    /// Cell alignment.
    pub alignment: Alignment,
}

/// One formatted line of the detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    /// Source entry id.
    pub entry_id: EntryId,
    /// Service date.
    pub date: String,
    /// Vehicle number.
    pub vehicle_number: String,
    /// Goods weight.
    pub weight: String,
    /// Transport name.
    pub transport_name: String,
    /// Place.
    pub place: String,
    /// Rent amount.
    pub rent: String,
    /// Advance amount.
    pub advance: String,
    /// Balance (rent minus advance).
    pub balance: String,
    /// Date the balance was paid.
    pub balance_date: String,
    /// Balance status.
    pub status: String,
}

impl DetailRow {
    /// Returns the cells in column order.
    #[must_use]
    pub fn cells(&self) -> [&str; 10] {
        [
            &self.date,
            &self.vehicle_number,
            &self.weight,
            &self.transport_name,
            &self.place,
            &self.rent,
            &self.advance,
            &self.balance,
            &self.balance_date,
            &self.status,
        ]
    }
}

/// Itemized detail section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    /// Section title.
    pub title: String,
    /// Column layout, shared by every row.
    pub columns: Vec<Column>,
    /// One row per input entry, in input order.
    pub rows: Vec<DetailRow>,
    /// Styling hints.
    pub style: SectionStyle,
}

/// A report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum ReportSection {
    /// Summary statistics.
    Summary(SummarySection),
    /// Status distribution.
    Distribution(DistributionSection),
    /// Itemized detail table.
    Detail(DetailSection),
}

impl ReportSection {
    /// Returns the section title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Summary(s) => &s.title,
            Self::Distribution(s) => &s.title,
            Self::Detail(s) => &s.title,
        }
    }

    /// Returns the section styling hints.
    #[must_use]
    pub fn style(&self) -> &SectionStyle {
        match self {
            Self::Summary(s) => &s.style,
            Self::Distribution(s) => &s.style,
            Self::Detail(s) => &s.style,
        }
    }
}

/// A complete transport report, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportReport {
    /// Report title.
    pub title: String,
    /// Reporting period.
    pub period: ReportPeriod,
    /// Display label of the period.
    pub period_label: String,
    /// When the report was generated, with the generator's UTC offset.
    pub generated_at: DateTime<FixedOffset>,
    /// Suggested output file name, without extension.
    pub file_name: String,
    /// Fill/text color for headers and titles.
    pub accent_color: String,
    /// Column sizing strategy.
    pub table_width_mode: TableWidthMode,
    /// Sections in order: summary, distribution, detail.
    pub sections: Vec<ReportSection>,
}

impl TransportReport {
    /// Returns the summary section.
    #[must_use]
    pub fn summary(&self) -> Option<&SummarySection> {
        self.sections.iter().find_map(|s| match s {
            ReportSection::Summary(summary) => Some(summary),
            _ => None,
        })
    }

    /// Returns the distribution section.
    #[must_use]
    pub fn distribution(&self) -> Option<&DistributionSection> {
        self.sections.iter().find_map(|s| match s {
            ReportSection::Distribution(distribution) => Some(distribution),
            _ => None,
        })
    }

    /// Returns the detail section.
    #[must_use]
    pub fn detail(&self) -> Option<&DetailSection> {
        self.sections.iter().find_map(|s| match s {
            ReportSection::Detail(detail) => Some(detail),
            _ => None,
        })
    }
}
