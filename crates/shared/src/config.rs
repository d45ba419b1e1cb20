//! Application configuration management.
//!
//! Every key has a default, so an empty environment produces a usable
//! configuration. Overrides come from `config/default.toml`,
//! `config/{RUN_MODE}.toml`, and `HAULBOOK__`-prefixed environment variables
//! (e.g. `HAULBOOK__REPORT__PERCENTAGE_PRECISION=1`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::CurrencyFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report synthesis configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report synthesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title printed above all sections.
    #[serde(default = "default_title")]
    pub title: String,
    /// Currency rendering for every monetary cell.
    #[serde(default)]
    pub currency: CurrencyFormat,
    /// Decimal places kept in distribution percentages.
    #[serde(default)]
    pub percentage_precision: u32,
    /// Rendering hints passed through to the renderer.
    #[serde(default)]
    pub presentation: PresentationConfig,
}

fn default_title() -> String {
    "Transport Report".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency: CurrencyFormat::default(),
            percentage_precision: 0,
            presentation: PresentationConfig::default(),
        }
    }
}

/// Column sizing strategy for report tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableWidthMode {
    /// Each column gets a fixed width.
    #[default]
    FixedWidth,
    /// The renderer sizes columns to their content.
    AutoFit,
}

/// Styling hints for the renderer. None of these affect computed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Fill/text color for headers and titles.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// Color applied to highlighted summary rows.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    /// Column sizing strategy.
    #[serde(default)]
    pub table_width_mode: TableWidthMode,
    /// Colors for balance statuses.
    #[serde(default)]
    pub status_colors: StatusColors,
}

fn default_accent_color() -> String {
    "#2563EB".to_string()
}

fn default_highlight_color() -> String {
    "#DC2626".to_string()
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            highlight_color: default_highlight_color(),
            table_width_mode: TableWidthMode::default(),
            status_colors: StatusColors::default(),
        }
    }
}

/// Colors for each known balance status, plus a fallback for anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColors {
    /// Color for `PAID`.
    #[serde(default = "default_paid_color")]
    pub paid: String,
    /// Color for `UNPAID`.
    #[serde(default = "default_unpaid_color")]
    pub unpaid: String,
    /// Color for `PARTIAL`.
    #[serde(default = "default_partial_color")]
    pub partial: String,
    /// Color for unrecognized statuses.
    #[serde(default = "default_fallback_color")]
    pub fallback: String,
}

fn default_paid_color() -> String {
    "#16A34A".to_string()
}

fn default_unpaid_color() -> String {
    "#DC2626".to_string()
}

fn default_partial_color() -> String {
    "#D97706".to_string()
}

fn default_fallback_color() -> String {
    "#6B7280".to_string()
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            paid: default_paid_color(),
            unpaid: default_unpaid_color(),
            partial: default_partial_color(),
            fallback: default_fallback_color(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Directory report files are written to.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HAULBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DigitGrouping;

    #[test]
    fn test_load_defaults() {
        temp_env::with_vars_unset(
            [
                "HAULBOOK__REPORT__TITLE",
                "HAULBOOK__REPORT__PERCENTAGE_PRECISION",
                "HAULBOOK__OUTPUT__DIR",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report, ReportConfig::default());
                assert_eq!(config.output.dir, PathBuf::from("."));
            },
        );
    }

    #[test]
    fn test_load_env_overrides() {
        temp_env::with_vars(
            [
                ("HAULBOOK__REPORT__TITLE", Some("Fleet Billing")),
                ("HAULBOOK__REPORT__PERCENTAGE_PRECISION", Some("1")),
                ("HAULBOOK__OUTPUT__DIR", Some("/tmp/reports")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report.title, "Fleet Billing");
                assert_eq!(config.report.percentage_precision, 1);
                assert_eq!(config.output.dir, PathBuf::from("/tmp/reports"));
            },
        );
    }

    #[test]
    fn test_presentation_deserialize() {
        let json = r##"{
            "accent_color": "#000000",
            "table_width_mode": "auto_fit",
            "status_colors": { "fallback": "#FFFFFF" }
        }"##;
        let presentation: PresentationConfig = serde_json::from_str(json).unwrap();

        assert_eq!(presentation.accent_color, "#000000");
        assert_eq!(presentation.highlight_color, default_highlight_color());
        assert_eq!(presentation.table_width_mode, TableWidthMode::AutoFit);
        assert_eq!(presentation.status_colors.fallback, "#FFFFFF");
        assert_eq!(presentation.status_colors.paid, default_paid_color());
    }

    #[test]
    fn test_report_config_deserialize_currency() {
        let json = r#"{ "currency": { "symbol": "Rs. " }, "percentage_precision": 1 }"#;
        let report: ReportConfig = serde_json::from_str(json).unwrap();

        assert_eq!(report.title, "Transport Report");
        assert_eq!(report.currency.symbol, "Rs. ");
        assert_eq!(report.currency.grouping, DigitGrouping::Indian);
        assert_eq!(report.percentage_precision, 1);
    }
}
