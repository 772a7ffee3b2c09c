//! Loading the per-state disability CSV into an immutable [`DataTable`].
//!
//! # CSV Format
//!
//! Headers are required and matched by name, so column order does not matter
//! and unknown columns are ignored:
//!
//! ```text
//! state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female
//! Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::DataLoadError;
use crate::row::{AgeBucket, DisabilityCategory, Gender, JoinKey, Row};

pub const STATE_COLUMN: &str = "state";
pub const ID_COLUMN: &str = "id";

/// All rows of the dataset in source order, indexed by join key.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    rows: Vec<Row>,
    index: HashMap<JoinKey, usize>,
}

/// Positions of every required column within the header record.
struct ColumnMap {
    state: usize,
    id: usize,
    categories: [usize; 7],
    ages: [usize; 3],
    genders: [usize; 2],
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &str| -> Result<usize, DataLoadError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };

        let mut categories = [0usize; 7];
        for (slot, category) in categories.iter_mut().zip(DisabilityCategory::ALL) {
            *slot = find(category.column())?;
        }
        let mut ages = [0usize; 3];
        for (slot, bucket) in ages.iter_mut().zip(AgeBucket::ALL) {
            *slot = find(bucket.column())?;
        }
        let mut genders = [0usize; 2];
        for (slot, gender) in genders.iter_mut().zip(Gender::ALL) {
            *slot = find(gender.column())?;
        }

        Ok(Self {
            state: find(STATE_COLUMN)?,
            id: find(ID_COLUMN)?,
            categories,
            ages,
            genders,
        })
    }
}

fn cell<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

fn parse_percent(
    record: &StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<f64, DataLoadError> {
    let raw = cell(record, idx);
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DataLoadError::InvalidNumber {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl DataTable {
    /// Parse CSV text (typically embedded with `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self, DataLoadError> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Open and parse a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse CSV from any reader. Either every row loads or an error is returned.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(rdr.headers()?)?;

        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let id_raw = cell(&record, columns.id);
            let join_key: JoinKey = id_raw.parse().map_err(|_| DataLoadError::InvalidNumber {
                line,
                column: ID_COLUMN.to_string(),
                value: id_raw.to_string(),
            })?;

            let mut categories = [0.0; 7];
            for ((value, &idx), category) in categories
                .iter_mut()
                .zip(&columns.categories)
                .zip(DisabilityCategory::ALL)
            {
                *value = parse_percent(&record, idx, category.column(), line)?;
            }
            let mut ages = [0.0; 3];
            for ((value, &idx), bucket) in ages.iter_mut().zip(&columns.ages).zip(AgeBucket::ALL) {
                *value = parse_percent(&record, idx, bucket.column(), line)?;
            }
            let mut genders = [0.0; 2];
            for ((value, &idx), gender) in genders.iter_mut().zip(&columns.genders).zip(Gender::ALL)
            {
                *value = parse_percent(&record, idx, gender.column(), line)?;
            }

            if index.insert(join_key, rows.len()).is_some() {
                return Err(DataLoadError::DuplicateKey(join_key));
            }
            rows.push(Row::new(
                join_key,
                cell(&record, columns.state),
                categories,
                ages,
                genders,
            ));
        }

        log::info!("[Disability] loader: Loaded {} states", rows.len());
        Ok(Self { rows, index })
    }

    pub fn lookup(&self, key: JoinKey) -> Option<&Row> {
        self.index.get(&key).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, key: JoinKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = JoinKey> + '_ {
        self.rows.iter().map(|r| r.join_key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest value of one category across all rows.
    pub fn category_extent(&self, category: DisabilityCategory) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| r.category(category))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "state,id,Any Disability,Cognitive Disability,Hearing Disability,Mobility Disability,Vision Disability,Self-care Disability,Independent Living Disability,18-44,45-64,65+,Male,Female";

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
             Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n\
             Utah,49,22.5,12.9,5.9,9.8,4.2,2.9,6.6,15.0,21.1,35.2,20.3,24.6\n\
             Maine,23,28.4,14.8,7.4,12.6,4.6,3.5,8.1,16.2,24.4,37.0,27.5,29.2\n"
        )
    }

    #[test]
    fn loads_rows_in_source_order() {
        let table = DataTable::from_csv_str(&sample_csv()).unwrap();
        assert_eq!(table.len(), 3);
        let names: Vec<&str> = table.rows().iter().map(|r| r.state_name.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "Utah", "Maine"]);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec![39, 49, 23]);
    }

    #[test]
    fn lookup_by_join_key() {
        let table = DataTable::from_csv_str(&sample_csv()).unwrap();
        let utah = table.lookup(49).unwrap();
        assert_eq!(utah.state_name, "Utah");
        assert_eq!(utah.age(AgeBucket::From65), 35.2);
        assert_eq!(utah.gender(Gender::Male), 20.3);
        assert!(table.lookup(999).is_none());
        assert!(!table.contains(999));
    }

    #[test]
    fn columns_matched_by_header_name() {
        let csv = "id,Female,Male,65+,45-64,18-44,Independent Living Disability,Self-care Disability,Vision Disability,Mobility Disability,Hearing Disability,Cognitive Disability,Any Disability,state,notes\n\
                   39,31.9,26.0,40.1,25.6,12.3,8.7,4.0,5.4,13.9,6.8,14.2,29.1,Ohio,extra\n";
        let table = DataTable::from_csv_str(csv).unwrap();
        let ohio = table.lookup(39).unwrap();
        assert_eq!(ohio.state_name, "Ohio");
        assert_eq!(ohio.category(DisabilityCategory::Any), 29.1);
        assert_eq!(ohio.age(AgeBucket::From18To44), 12.3);
        assert_eq!(ohio.gender(Gender::Female), 31.9);
    }

    #[test]
    fn missing_column_fails() {
        let csv = "state,id,Any Disability\nOhio,39,29.1\n";
        match DataTable::from_csv_str(csv) {
            Err(DataLoadError::MissingColumn(col)) => assert_eq!(col, "Cognitive Disability"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_percentage_fails() {
        let csv = format!("{HEADER}\nOhio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,n/a,25.6,40.1,26.0,31.9\n");
        match DataTable::from_csv_str(&csv) {
            Err(DataLoadError::InvalidNumber { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "18-44");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn nan_or_inf_percentage_fails() {
        let csv = format!("{HEADER}\nOhio,39,NaN,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n");
        assert!(matches!(
            DataTable::from_csv_str(&csv),
            Err(DataLoadError::InvalidNumber { ref value, .. }) if value == "NaN"
        ));

        let csv = format!("{HEADER}\nOhio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,inf,25.6,40.1,26.0,31.9\n");
        match DataTable::from_csv_str(&csv) {
            Err(DataLoadError::InvalidNumber { column, value, .. }) => {
                assert_eq!(column, "18-44");
                assert_eq!(value, "inf");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn non_integer_id_fails() {
        let csv = format!("{HEADER}\nOhio,39.5,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n");
        assert!(matches!(
            DataTable::from_csv_str(&csv),
            Err(DataLoadError::InvalidNumber { ref column, .. }) if column == "id"
        ));
    }

    #[test]
    fn duplicate_join_key_fails() {
        let csv = format!(
            "{HEADER}\n\
             Ohio,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n\
             Ohio again,39,29.1,14.2,6.8,13.9,5.4,4.0,8.7,12.3,25.6,40.1,26.0,31.9\n"
        );
        assert!(matches!(
            DataTable::from_csv_str(&csv),
            Err(DataLoadError::DuplicateKey(39))
        ));
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let result = DataTable::from_path("/definitely/not/here/disability.csv");
        assert!(matches!(result, Err(DataLoadError::Io(_))));
    }

    #[test]
    fn header_only_source_is_empty() {
        let table = DataTable::from_csv_str(&format!("{HEADER}\n")).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.category_extent(DisabilityCategory::Any), None);
    }

    #[test]
    fn category_extent_spans_all_rows() {
        let table = DataTable::from_csv_str(&sample_csv()).unwrap();
        assert_eq!(
            table.category_extent(DisabilityCategory::Any),
            Some((22.5, 29.1))
        );
    }
}
