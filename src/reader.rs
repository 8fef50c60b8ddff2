//! LHCO text reader.
//!
//! Input format:
//! ```text
//!   0          77      0        <- header: 3 tokens, first all digits
//!   0  2  1.5  0.3  45.2  0  0  0  0  0  0
//!   1  4 -0.8  2.1  30.0  4  7  1  0.9
//! ```
//!
//! - A header line has exactly 3 tokens with an all-digit first token;
//!   its second token becomes the current event id
//! - An object line has 9 or more tokens; the first 9 become a [`Record`]
//! - Anything else is skipped
//!
//! Dispatch is purely on line shape. Nothing is validated, so the only
//! failures are I/O failures.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::record::{OBJECT_FIELDS, Record};

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Header { event: &'a str },
    Object(Vec<&'a str>),
    Skip,
}

fn classify(line: &str) -> Line<'_> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() == 3 && is_decimal(tokens[0]) {
        Line::Header { event: tokens[1] }
    } else if tokens.len() >= OBJECT_FIELDS {
        Line::Object(tokens)
    } else {
        Line::Skip
    }
}

fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an LHCO file into records, preserving file order.
///
/// Fails with [`ConvertError::InputNotFound`] if the path does not exist.
pub fn parse_lhco(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    parse_lines(BufReader::new(file)).map_err(|e| match e {
        ConvertError::Io { source, .. } => ConvertError::io(path, source),
        other => other,
    })
}

/// Parse LHCO records from any buffered reader.
///
/// The input is read fully before parsing. Invalid UTF-8 is an I/O error.
pub fn parse_lines<R: BufRead>(mut reader: R) -> Result<Vec<Record>> {
    let mut text = String::new();
    Read::read_to_string(&mut reader, &mut text).map_err(|e| ConvertError::io("<input>", e))?;
    Ok(parse_str(&text))
}

/// Parse LHCO records from in-memory text.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_str(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut event: Option<String> = None;
    let mut headers = 0usize;
    let mut skipped = 0usize;
    let mut total = 0usize;

    for line in text.lines().flat_map(|l| l.split('\r')) {
        total += 1;

        match classify(line) {
            Line::Header { event: id } => {
                event = Some(id.to_string());
                headers += 1;
            }
            Line::Object(tokens) => {
                if let Some(rec) = Record::from_tokens(event.clone(), &tokens) {
                    records.push(rec);
                }
            }
            Line::Skip => {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }

    log::debug!(
        "read {total} lines: {headers} event headers, {} records, {skipped} skipped",
        records.len()
    );

    records
}
