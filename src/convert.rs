//! End-to-end conversion: read, filter, write.

use std::path::PathBuf;

use crate::document::Capability;
use crate::error::Result;
use crate::filter::filter_records;
use crate::reader::parse_lhco;
use crate::writer::{OutputFormat, WriteOutcome, write_records};

/// Options for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Keep only records whose `typ` equals this text.
    pub particle: Option<String>,
    /// Columns to keep after `event`, in order.
    pub columns: Option<Vec<String>>,
}

/// Summary of a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    /// Records parsed from the input.
    pub input_count: usize,
    /// Records remaining after filtering.
    pub output_count: usize,
    pub outcome: WriteOutcome,
}

/// Run a full conversion.
///
/// Fails with [`ConvertError::InputNotFound`](crate::ConvertError::InputNotFound) when the input is missing and
/// with [`ConvertError::CapabilityUnavailable`](crate::ConvertError::CapabilityUnavailable) when the output format needs a
/// backend this build lacks.
pub fn convert(options: &ConvertOptions, capability: &Capability) -> Result<ConvertReport> {
    let records = parse_lhco(&options.input)?;
    let input_count = records.len();

    let set = filter_records(
        records,
        options.particle.as_deref(),
        options.columns.as_deref(),
    );
    let output_count = set.len();

    let outcome = write_records(&set, &options.output, options.format, capability)?;

    Ok(ConvertReport {
        input_count,
        output_count,
        outcome,
    })
}
