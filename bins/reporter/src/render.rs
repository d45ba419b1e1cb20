//! Output renderers: a JSON document and a CSV spreadsheet export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use haulbook_core::reports::{ReportError, ReportRenderer, ReportSection, TransportReport};
use haulbook_shared::TableWidthMode;
use serde::Serialize;

/// Document header written ahead of the sections.
#[derive(Debug, Serialize)]
struct DocumentHeader {
    title: String,
    period: String,
    generated_at: DateTime<FixedOffset>,
    accent_color: String,
    table_width_mode: TableWidthMode,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    header: &'a DocumentHeader,
    sections: &'a [ReportSection],
}

/// Writes the whole report, with styling hints, as one JSON document.
pub struct JsonDocumentRenderer<W: Write> {
    out: W,
    header: Option<DocumentHeader>,
    sections: Vec<ReportSection>,
}

impl JsonDocumentRenderer<BufWriter<File>> {
    /// Creates a renderer writing to a new file at `path`.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonDocumentRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: None,
            sections: Vec::new(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportRenderer for JsonDocumentRenderer<W> {
    fn begin(&mut self, report: &TransportReport) -> Result<(), ReportError> {
        self.header = Some(DocumentHeader {
            title: report.title.clone(),
            period: report.period_label.clone(),
            generated_at: report.generated_at,
            accent_color: report.accent_color.clone(),
            table_width_mode: report.table_width_mode,
        });
        Ok(())
    }

    fn write_section(&mut self, section: &ReportSection) -> Result<(), ReportError> {
        self.sections.push(section.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        // Nothing to emit if the report never started; still flush the handle.
        if let Some(header) = self.header.take() {
            let document = Document {
                header: &header,
                sections: &self.sections,
            };
            serde_json::to_writer_pretty(&mut self.out, &document)
                .map_err(|e| ReportError::Serialization(e.to_string()))?;
            self.out.write_all(b"\n")?;
        }
        self.sections.clear();
        self.out.flush()?;
        Ok(())
    }
}

/// Exports the detail table as CSV: one header row, then one row per entry.
pub struct CsvExporter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvExporter<File> {
    /// Creates an exporter writing to a new file at `path`.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let writer = csv::Writer::from_path(path).map_err(csv_error)?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvExporter<W> {
    /// Creates an exporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}

impl<W: Write> ReportRenderer for CsvExporter<W> {
    fn begin(&mut self, _report: &TransportReport) -> Result<(), ReportError> {
        Ok(())
    }

    fn write_section(&mut self, section: &ReportSection) -> Result<(), ReportError> {
        // Spreadsheets only carry the flat detail table.
        let ReportSection::Detail(detail) = section else {
            return Ok(());
        };

        self.writer
            .write_record(detail.columns.iter().map(|c| c.header.as_str()))
            .map_err(csv_error)?;
        for row in &detail.rows {
            self.writer.write_record(row.cells()).map_err(csv_error)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

fn csv_error(err: csv::Error) -> ReportError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => ReportError::Io(io),
            other => ReportError::Serialization(format!("{other:?}")),
        }
    } else {
        ReportError::Serialization(err.to_string())
    }
}
