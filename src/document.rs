//! Table-document capability.
//!
//! DOCX output depends on an optional backend (`docx-rs`, behind the `docx`
//! feature). The backend is modeled as an injected [`Capability`] that is
//! detected once at startup. When it is missing the caller gets
//! [`ConvertError::CapabilityUnavailable`] instead of a partial write.

use std::io::{Seek, Write};

use crate::error::{ConvertError, Result};

/// Name reported for the table-document format.
pub const DOCUMENT_FORMAT: &str = "DOCX";

/// A backend that can write a document made of one heading and one table.
pub trait TableDocument {
    /// The display name of this backend.
    fn name(&self) -> &str;

    /// Write a document with `heading` followed by a table whose first row
    /// is `headers` and whose remaining rows are `rows`.
    fn write_table(
        &self,
        heading: &str,
        headers: &[&str],
        rows: &[Vec<&str>],
        out: &mut dyn WriteSeek,
    ) -> Result<()>;
}

/// Object-safe combination of [`Write`] and [`Seek`] (zip packing needs both).
pub trait WriteSeek: Write + Seek {}

impl<T: Write + Seek> WriteSeek for T {}

/// Backend used when no table-document library is compiled in.
pub struct UnavailableDocument;

impl TableDocument for UnavailableDocument {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn write_table(
        &self,
        _heading: &str,
        _headers: &[&str],
        _rows: &[Vec<&str>],
        _out: &mut dyn WriteSeek,
    ) -> Result<()> {
        Err(ConvertError::CapabilityUnavailable(DOCUMENT_FORMAT))
    }
}

/// Style id of the document heading.
#[cfg(feature = "docx")]
const HEADING_STYLE_ID: &str = "Heading1";

/// DOCX backend built on `docx-rs`.
#[cfg(feature = "docx")]
pub struct DocxDocument;

#[cfg(feature = "docx")]
impl DocxDocument {
    fn cell(text: &str) -> docx_rs::TableCell {
        use docx_rs::{Paragraph, Run, TableCell};
        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
    }

    fn row(values: &[&str]) -> docx_rs::TableRow {
        docx_rs::TableRow::new(values.iter().map(|v| Self::cell(v)).collect())
    }

    /// Level-1 heading style. `Docx::new()` only defines `Normal`, so a
    /// paragraph referencing `Heading1` needs the style registered.
    fn heading_style() -> docx_rs::Style {
        use docx_rs::{Style, StyleType};
        Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
            .name("Heading 1")
            .bold()
            .size(32)
    }
}

#[cfg(feature = "docx")]
impl TableDocument for DocxDocument {
    fn name(&self) -> &str {
        "docx-rs"
    }

    fn write_table(
        &self,
        heading: &str,
        headers: &[&str],
        rows: &[Vec<&str>],
        out: &mut dyn WriteSeek,
    ) -> Result<()> {
        use docx_rs::{Docx, Paragraph, Run, Table};

        let mut table_rows = Vec::with_capacity(rows.len() + 1);
        table_rows.push(Self::row(headers));
        table_rows.extend(rows.iter().map(|r| Self::row(r)));

        let title = Paragraph::new()
            .add_run(Run::new().add_text(heading))
            .style(HEADING_STYLE_ID);

        Docx::new()
            .add_style(Self::heading_style())
            .add_paragraph(title)
            .add_table(Table::new(table_rows))
            .build()
            .pack(out)
            .map_err(|e| ConvertError::Document(e.to_string()))
    }
}

/// The table-document capability available to this run.
pub struct Capability {
    backend: Option<Box<dyn TableDocument>>,
}

impl Capability {
    /// Detect the backend compiled into this build.
    pub fn detect() -> Self {
        #[cfg(feature = "docx")]
        let capability = Self::with(Box::new(DocxDocument));
        #[cfg(not(feature = "docx"))]
        let capability = Self::unavailable();

        log::debug!(
            "table-document capability: {}",
            capability.backend().name()
        );
        capability
    }

    /// A capability with no backend.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// A capability backed by `backend`.
    pub fn with(backend: Box<dyn TableDocument>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// The backend, or [`UnavailableDocument`] when none is present.
    pub fn backend(&self) -> &dyn TableDocument {
        match &self.backend {
            Some(b) => b.as_ref(),
            None => &UnavailableDocument,
        }
    }
}
