//! CSV and table-document writers.
//!
//! Both writers take a homogeneous [`RecordSet`] and treat an empty set as a
//! no-op: no file is created and [`WriteOutcome::NoRecords`] is returned.

use std::fs::File;
use std::io::{self, BufWriter, Cursor};
use std::path::Path;

use crate::document::{Capability, DOCUMENT_FORMAT};
use crate::error::{ConvertError, Result};
use crate::filter::RecordSet;

/// Heading placed above the table in document output.
pub const DOCUMENT_HEADING: &str = "LHCO Data";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Docx,
}

impl OutputFormat {
    /// Display name used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Docx => DOCUMENT_FORMAT,
        }
    }
}

/// Result of a write that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Header plus `rows` data rows were written.
    Written { rows: usize },
    /// Nothing survived parsing and filtering; no file was written.
    NoRecords,
}

/// Write records as CSV: one header row, then one row per record.
pub fn write_csv(set: &RecordSet, path: &Path) -> Result<WriteOutcome> {
    if set.is_empty() {
        return Ok(WriteOutcome::NoRecords);
    }

    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    write_csv_rows(set, BufWriter::new(file)).map_err(|e| ConvertError::csv(path, e))?;

    log::debug!("wrote {} CSV rows to {}", set.len(), path.display());
    Ok(WriteOutcome::Written { rows: set.len() })
}

/// Header and data rows with CRLF record terminators (RFC 4180).
fn write_csv_rows<W: io::Write>(set: &RecordSet, out: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(set.headers())?;
    for row in set.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records as a document with one heading and one table.
///
/// The capability is checked before anything else, so a missing backend is
/// reported even for an empty set. The document is built in memory and only
/// then written to `path`.
pub fn write_document(set: &RecordSet, path: &Path, capability: &Capability) -> Result<WriteOutcome> {
    if !capability.is_available() {
        return Err(ConvertError::CapabilityUnavailable(DOCUMENT_FORMAT));
    }
    if set.is_empty() {
        return Ok(WriteOutcome::NoRecords);
    }

    let headers = set.headers();
    let rows: Vec<Vec<&str>> = set.rows().collect();

    let mut buf = Cursor::new(Vec::new());
    capability
        .backend()
        .write_table(DOCUMENT_HEADING, &headers, &rows, &mut buf)?;
    std::fs::write(path, buf.into_inner()).map_err(|e| ConvertError::io(path, e))?;

    log::debug!("wrote {} table rows to {}", set.len(), path.display());
    Ok(WriteOutcome::Written { rows: set.len() })
}

/// Write records in the given format.
pub fn write_records(
    set: &RecordSet,
    path: &Path,
    format: OutputFormat,
    capability: &Capability,
) -> Result<WriteOutcome> {
    match format {
        OutputFormat::Csv => write_csv(set, path),
        OutputFormat::Docx => write_document(set, path, capability),
    }
}
