//! Boundary between the report engine and output renderers.

use tracing::warn;

use super::error::ReportError;
use super::types::{ReportSection, TransportReport};

/// An output target for a finished report (document, spreadsheet, ...).
///
/// `finish` releases the output handle. Use [`render_report`] to drive a
/// renderer so that `finish` runs on every path.
pub trait ReportRenderer {
    /// Starts a report. Called once, before any section.
    fn begin(&mut self, report: &TransportReport) -> Result<(), ReportError>;

    /// Writes one section.
    fn write_section(&mut self, section: &ReportSection) -> Result<(), ReportError>;

    /// Flushes and releases the output.
    fn finish(&mut self) -> Result<(), ReportError>;
}

/// Renders a report, always calling `finish` afterwards.
///
/// If writing fails, `finish` still runs and the write error is returned.
pub fn render_report<R>(renderer: &mut R, report: &TransportReport) -> Result<(), ReportError>
where
    R: ReportRenderer + ?Sized,
{
    let written = write_sections(renderer, report);
    let finished = renderer.finish();

    if let (Err(write_err), Err(finish_err)) = (&written, &finished) {
        warn!(%write_err, %finish_err, "renderer failed to finish after a write error");
    }

    written.and(finished)
}

fn write_sections<R>(renderer: &mut R, report: &TransportReport) -> Result<(), ReportError>
where
    R: ReportRenderer + ?Sized,
{
    renderer.begin(report)?;
    for section in &report.sections {
        renderer.write_section(section)?;
    }
    Ok(())
}
