//! Report generation service.

use chrono::{DateTime, FixedOffset, Local};
use haulbook_shared::types::CurrencyFormat;
use haulbook_shared::{ReportConfig, StatusColors};
use tracing::debug;

use super::aggregator::EntryStats;
use super::detail::{RowFormatter, detail_columns};
use super::distribution::{StatusShare, distribute};
use super::types::{
    DetailSection, DistributionRow, DistributionSection, ReportPeriod, ReportSection,
    SectionStyle, SummaryRow, SummarySection, SummaryValue, TransportReport,
};
use crate::ledger::{LedgerEntry, StatusKind};

/// Prefix of the suggested output file name.
pub const FILE_NAME_PREFIX: &str = "transport-report";

const TITLE_FONT_SIZE: u8 = 14;
const BODY_FONT_SIZE: u8 = 10;

/// Service for generating transport reports.
pub struct ReportService;

impl ReportService {
    /// Generates a report stamped with the current local time.
    #[must_use]
    pub fn generate(
        entries: &[LedgerEntry],
        period: ReportPeriod,
        config: &ReportConfig,
    ) -> TransportReport {
        Self::generate_at(entries, period, config, Local::now().fixed_offset())
    }

    /// Generates a report from the given entries.
    ///
    /// Entries are reported exactly as given; the period is a label only.
    /// Presentation settings in `config` never change a computed value.
    #[must_use]
    pub fn generate_at(
        entries: &[LedgerEntry],
        period: ReportPeriod,
        config: &ReportConfig,
        generated_at: DateTime<FixedOffset>,
    ) -> TransportReport {
        debug!(
            entries = entries.len(),
            period = %period.label(),
            "generating transport report"
        );

        let stats = EntryStats::compute(entries);
        let shares = distribute(entries, config.percentage_precision);
        let rows = RowFormatter::new(&config.currency).format_all(entries);

        let presentation = &config.presentation;
        let style = SectionStyle {
            header_fill: presentation.accent_color.clone(),
            title_font_size: TITLE_FONT_SIZE,
            body_font_size: BODY_FONT_SIZE,
        };

        let sections = vec![
            ReportSection::Summary(SummarySection {
                title: "Summary".to_string(),
                rows: Self::summary_rows(&stats, &config.currency),
                highlight_color: presentation.highlight_color.clone(),
                style: style.clone(),
            }),
            ReportSection::Distribution(DistributionSection {
                title: "Status Distribution".to_string(),
                rows: Self::distribution_rows(
                    shares,
                    config.percentage_precision,
                    &presentation.status_colors,
                ),
                style: style.clone(),
            }),
            ReportSection::Detail(DetailSection {
                title: "Entry Details".to_string(),
                columns: detail_columns(presentation.table_width_mode),
                rows,
                style,
            }),
        ];

        TransportReport {
            title: config.title.clone(),
            period,
            period_label: period.label(),
            generated_at,
            file_name: Self::file_name(generated_at),
            accent_color: presentation.accent_color.clone(),
            table_width_mode: presentation.table_width_mode,
            sections,
        }
    }

    /// Returns the suggested file name, e.g. `transport-report-2024-03-31`.
    ///
    /// The date is the calendar day in the timestamp's own offset.
    #[must_use]
    pub fn file_name(generated_at: DateTime<FixedOffset>) -> String {
        format!("{FILE_NAME_PREFIX}-{}", generated_at.format("%Y-%m-%d"))
    }

    /// Builds the summary rows. Only the unpaid amount is highlighted.
    fn summary_rows(stats: &EntryStats, currency: &CurrencyFormat) -> Vec<SummaryRow> {
        let count = |label: &str, value: usize| SummaryRow {
            label: label.to_string(),
            value: SummaryValue::Count(value),
            display: value.to_string(),
            highlighted: false,
        };
        let amount = |label: &str, value, highlighted| SummaryRow {
            label: label.to_string(),
            value: SummaryValue::Amount(value),
            display: currency.format(value),
            highlighted,
        };

        vec![
            count("Total Entries", stats.total_entries),
            amount("Total Amount", stats.total_amount, false),
            amount("Paid Amount", stats.paid_amount, false),
            amount("Unpaid Amount", stats.unpaid_amount, true),
            amount("Average Amount", stats.average_amount, false),
            count("Unique Vehicles", stats.unique_vehicles),
            count("Unique Weights", stats.unique_weights),
        ]
    }

    fn distribution_rows(
        shares: Vec<StatusShare>,
        precision: u32,
        colors: &StatusColors,
    ) -> Vec<DistributionRow> {
        let places = usize::try_from(precision).unwrap_or(0);
        shares
            .into_iter()
            .map(|share| {
                let kind = share.status.kind();
                DistributionRow {
                    percentage_display: format!("{:.places$}%", share.percentage),
                    color: status_color(colors, kind).to_string(),
                    kind,
                    status: share.status,
                    count: share.count,
                    percentage: share.percentage,
                }
            })
            .collect()
    }
}

/// Color for a status kind; unknown statuses get the fallback color.
#[must_use]
pub fn status_color(colors: &StatusColors, kind: StatusKind) -> &str {
    match kind {
        StatusKind::Paid => &colors.paid,
        StatusKind::Unpaid => &colors.unpaid,
        StatusKind::Partial => &colors.partial,
        StatusKind::Other => &colors.fallback,
    }
}
