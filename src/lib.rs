//! # lhco-convert
//!
//! Convert LHCO particle-physics event files into CSV or a DOCX table.
//!
//! ## Overview
//!
//! LHCO is a plain-text format: one header line per event followed by one
//! line per reconstructed object (jet, lepton, photon, missing energy, ...).
//! Conversion runs in three sequential steps:
//!
//! - **Reader** ([`parse_lhco`]): tokenize lines into [`Record`]s
//! - **Filter/Projector** ([`filter_records`]): keep one particle type and
//!   narrow to selected columns
//! - **Writer** ([`write_csv`], [`write_document`]): serialize the result
//!
//! ## Example
//!
//! ```
//! use lhco_convert::{Column, filter_records, parse_str};
//!
//! let records = parse_str(
//!     "0   77   0\n\
//!      0   2   1.5   0.3   45.2   0   0   0   0\n\
//!      1   4  -0.8   2.1   30.0   4   7   1   0.9\n",
//! );
//!
//! let set = filter_records(records, Some("2"), Some(&["pt", "eta"][..]));
//!
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.headers(), vec!["event", "pt", "eta"]);
//! assert_eq!(set.records()[0].get(Column::Pt), "45.2");
//! ```

pub mod convert;
pub mod document;
pub mod error;
pub mod filter;
pub mod reader;
pub mod record;
pub mod writer;

pub use convert::{ConvertOptions, ConvertReport, convert};
pub use document::{Capability, TableDocument, UnavailableDocument};
#[cfg(feature = "docx")]
pub use document::DocxDocument;
pub use error::{ConvertError, Result};
pub use filter::{RecordSet, filter_records, select_columns};
pub use reader::{parse_lhco, parse_lines, parse_str};
pub use record::{Column, Record};
pub use writer::{OutputFormat, WriteOutcome, write_csv, write_document, write_records};
