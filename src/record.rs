//! LHCO object records and their columns.
//!
//! An object line carries nine positional fields:
//!
//! ```text
//! idx  typ  eta  phi  pt  jmas  ntrk  btag  hadem  [dum1 dum2 ...]
//! ```
//!
//! Values are kept as the original text tokens so the output reproduces the
//! input formatting exactly.

use std::fmt;

/// Number of positional fields taken from an object line.
pub const OBJECT_FIELDS: usize = 9;

/// Name of the event column that leads every output row.
pub const EVENT_COLUMN: &str = "event";

/// One of the nine positional fields of an object line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Idx,
    Typ,
    Eta,
    Phi,
    Pt,
    Jmas,
    Ntrk,
    Btag,
    Hadem,
}

impl Column {
    /// All columns in file order.
    pub const ALL: [Column; OBJECT_FIELDS] = [
        Column::Idx,
        Column::Typ,
        Column::Eta,
        Column::Phi,
        Column::Pt,
        Column::Jmas,
        Column::Ntrk,
        Column::Btag,
        Column::Hadem,
    ];

    /// Lower-case column name used in headers and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Idx => "idx",
            Column::Typ => "typ",
            Column::Eta => "eta",
            Column::Phi => "phi",
            Column::Pt => "pt",
            Column::Jmas => "jmas",
            Column::Ntrk => "ntrk",
            Column::Btag => "btag",
            Column::Hadem => "hadem",
        }
    }

    /// Look up a column by name. Returns `None` for unknown names,
    /// including `event`, which is not a positional field.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Position of this column within an object line.
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One physics object within one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier from the most recent header line, if one was seen.
    pub event: Option<String>,
    fields: [String; OBJECT_FIELDS],
}

impl Record {
    /// Build a record from the tokens of an object line.
    ///
    /// Returns `None` if there are fewer than nine tokens. Tokens past the
    /// ninth are ignored.
    pub fn from_tokens<S: AsRef<str>>(event: Option<String>, tokens: &[S]) -> Option<Record> {
        if tokens.len() < OBJECT_FIELDS {
            return None;
        }
        let fields = std::array::from_fn(|i| tokens[i].as_ref().to_string());
        Some(Record { event, fields })
    }

    /// Value of a positional field.
    pub fn get(&self, column: Column) -> &str {
        &self.fields[column.index()]
    }

    /// Event identifier, or an empty string when the record preceded any header.
    pub fn event_str(&self) -> &str {
        self.event.as_deref().unwrap_or("")
    }

    pub fn typ(&self) -> &str {
        self.get(Column::Typ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_round_trip() {
        for col in Column::ALL {
            assert_eq!(Column::from_name(col.name()), Some(col));
        }
    }

    #[test]
    fn test_event_is_not_a_column() {
        assert_eq!(Column::from_name("event"), None);
        assert_eq!(Column::from_name("PT"), None);
        assert_eq!(Column::from_name("nonexistent"), None);
    }

    #[test]
    fn test_from_tokens_takes_first_nine() {
        let tokens = ["0", "2", "1.5", "0.3", "45.2", "0", "0", "0", "0", "extra"];
        let rec = Record::from_tokens(Some("77".to_string()), &tokens).unwrap();
        assert_eq!(rec.get(Column::Idx), "0");
        assert_eq!(rec.typ(), "2");
        assert_eq!(rec.get(Column::Eta), "1.5");
        assert_eq!(rec.get(Column::Pt), "45.2");
        assert_eq!(rec.get(Column::Hadem), "0");
        assert_eq!(rec.event_str(), "77");
    }

    #[test]
    fn test_from_tokens_too_short() {
        let tokens = ["1", "6", "0", "0", "0", "0", "0", "0"];
        assert!(Record::from_tokens(None, &tokens).is_none());
    }

    #[test]
    fn test_missing_event_renders_empty() {
        let tokens = ["0"; OBJECT_FIELDS];
        let rec = Record::from_tokens(None, &tokens).unwrap();
        assert_eq!(rec.event, None);
        assert_eq!(rec.event_str(), "");
    }
}
