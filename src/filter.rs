//! Particle-type filtering and column projection.
//!
//! The result is a [`RecordSet`]: surviving records plus one ordered column
//! selection shared by every row, so all rows have the same shape.

use crate::record::{Column, EVENT_COLUMN, Record};

/// Records with a shared, ordered column selection.
///
/// Rows are rendered as `event` followed by the selected columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<Column>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row: `event` then the selected column names.
    pub fn headers(&self) -> Vec<&'static str> {
        std::iter::once(EVENT_COLUMN)
            .chain(self.columns.iter().map(Column::name))
            .collect()
    }

    /// Values of one record in header order.
    pub fn row<'a>(&self, record: &'a Record) -> Vec<&'a str> {
        std::iter::once(record.event_str())
            .chain(self.columns.iter().map(|&c| record.get(c)))
            .collect()
    }

    /// All rows in record order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.records.iter().map(|r| self.row(r))
    }
}

/// Resolve requested column names into an ordered selection.
///
/// Unknown names (including `event`) are dropped; a repeated name keeps its
/// first position. An absent or empty request selects every column.
pub fn select_columns<S: AsRef<str>>(requested: Option<&[S]>) -> Vec<Column> {
    let requested = match requested {
        Some(names) if !names.is_empty() => names,
        _ => return Column::ALL.to_vec(),
    };

    let mut selected: Vec<Column> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.as_ref();
        match Column::from_name(name) {
            Some(col) if !selected.contains(&col) => selected.push(col),
            Some(_) => {}
            None if name == EVENT_COLUMN => {}
            None => log::warn!("ignoring unknown column '{name}'"),
        }
    }
    selected
}

/// Filter records by particle type and narrow them to the requested columns.
///
/// `particle` is compared as text against `typ`, so `"02"` does not match
/// `"2"`. Input order is preserved.
pub fn filter_records<S: AsRef<str>>(
    records: Vec<Record>,
    particle: Option<&str>,
    columns: Option<&[S]>,
) -> RecordSet {
    let input_count = records.len();
    let records: Vec<Record> = match particle {
        Some(typ) => records.into_iter().filter(|r| r.typ() == typ).collect(),
        None => records,
    };
    let columns = select_columns(columns);

    log::debug!(
        "filter kept {} of {input_count} records, columns: {}",
        records.len(),
        columns
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>()
            .join(",")
    );

    RecordSet { columns, records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::parse_str;

    const NO_COLUMNS: Option<&[&str]> = None;

    fn sample() -> Vec<Record> {
        parse_str(
            "0 1 0\n\
             0 2 1.5 0.3 45.2 0 0 0 0\n\
             1 02 0.1 0.2 10.0 0 0 0 0\n\
             2 4 -1.0 2.0 80.0 5 3 1 0.5\n\
             0 2 0\n\
             0 2 0.7 1.1 33.3 0 0 0 0\n",
        )
    }

    #[test]
    fn test_no_filter_passes_full_records() {
        let set = filter_records(sample(), None, NO_COLUMNS);
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.headers(),
            vec!["event", "idx", "typ", "eta", "phi", "pt", "jmas", "ntrk", "btag", "hadem"]
        );
        assert_eq!(
            set.row(&set.records()[2]),
            vec!["1", "2", "4", "-1.0", "2.0", "80.0", "5", "3", "1", "0.5"]
        );
    }

    #[test]
    fn test_particle_filter_is_string_equality() {
        let set = filter_records(sample(), Some("2"), NO_COLUMNS);
        assert_eq!(set.len(), 2);
        assert!(set.records().iter().all(|r| r.typ() == "2"));

        let set = filter_records(sample(), Some("02"), NO_COLUMNS);
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].get(Column::Pt), "10.0");
    }

    #[test]
    fn test_particle_filter_preserves_order() {
        let set = filter_records(sample(), Some("2"), NO_COLUMNS);
        let pts: Vec<_> = set.records().iter().map(|r| r.get(Column::Pt)).collect();
        assert_eq!(pts, vec!["45.2", "33.3"]);
    }

    #[test]
    fn test_unmatched_particle_gives_empty_set() {
        let set = filter_records(sample(), Some("9"), NO_COLUMNS);
        assert!(set.is_empty());
    }

    #[test]
    fn test_projection_ignores_unknown_columns() {
        let cols = ["pt", "eta", "nonexistent"];
        let set = filter_records(sample(), None, Some(&cols[..]));
        assert_eq!(set.headers(), vec!["event", "pt", "eta"]);
        assert_eq!(set.row(&set.records()[0]), vec!["1", "45.2", "1.5"]);
    }

    #[test]
    fn test_projection_with_filter() {
        let cols = vec!["phi".to_string(), "typ".to_string()];
        let set = filter_records(sample(), Some("2"), Some(cols.as_slice()));
        let rows: Vec<Vec<&str>> = set.rows().collect();
        assert_eq!(rows, vec![vec!["1", "0.3", "2"], vec!["2", "1.1", "2"]]);
    }

    #[test]
    fn test_select_columns_dedups_and_skips_event() {
        let cols = ["pt", "event", "eta", "pt"];
        assert_eq!(select_columns(Some(&cols[..])), vec![Column::Pt, Column::Eta]);
    }

    #[test]
    fn test_empty_column_list_selects_all() {
        let cols: [&str; 0] = [];
        assert_eq!(select_columns(Some(&cols[..])), Column::ALL.to_vec());
        assert_eq!(select_columns(NO_COLUMNS), Column::ALL.to_vec());
    }

    #[test]
    fn test_only_unknown_columns_leaves_event() {
        let cols = ["foo", "bar"];
        let set = filter_records(sample(), None, Some(&cols[..]));
        assert_eq!(set.headers(), vec!["event"]);
        assert_eq!(set.row(&set.records()[0]), vec!["1"]);
    }
}
