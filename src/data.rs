// src/data.rs
//
// Canonical table and view-layer data.
//
// - Table:   the parsed dataset. Built once from CSV text and never mutated;
//            the app shares it behind an Arc.
// - RowView: derived view over a Table, a list of row indexes produced by
//            filters. Aggregations (sum, counts, min/max) run on views.

use std::{collections::HashSet, error::Error, fmt};

use crate::config::consts::COL_TOWN;
use crate::csv::parse_rows;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataError {
    /// No header row at all.
    Empty,
    MissingColumn(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Empty => write!(f, "dataset is empty"),
            DataError::MissingColumn(c) => write!(f, "dataset has no column '{c}'"),
        }
    }
}

impl Error for DataError {}

/// Parse a numeric cell. Empty, `NA`, `nan`, infinities and garbage are null.
pub fn parse_num(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build from headers + rows. Short rows are padded with empty cells.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for r in &mut rows {
            if r.len() < width {
                r.resize(width, s!());
            }
        }
        Self { headers, rows }
    }

    /// First CSV row is the header.
    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        let mut rows = parse_rows(text, ',');
        if rows.is_empty() {
            return Err(DataError::Empty);
        }
        let headers: Vec<String> = rows
            .remove(0)
            .into_iter()
            .map(|h| s!(h.trim_start_matches('\u{feff}').trim()))
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(DataError::Empty);
        }
        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn col_count(&self) -> usize { self.headers.len() }

    pub fn column(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(s!(name)))
    }

    /// Fails on the first listed column that is absent.
    pub fn require(&self, names: &[&str]) -> Result<(), DataError> {
        for n in names {
            self.column(n)?;
        }
        Ok(())
    }

    /// Trimmed cell text; out-of-range reads as empty.
    pub fn text(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.trim())
            .unwrap_or("")
    }

    pub fn num(&self, row: usize, col: usize) -> Option<f64> {
        parse_num(self.text(row, col))
    }

    /// Unique town names in first-appearance order (blank names skipped).
    pub fn towns(&self) -> Result<Vec<String>, DataError> {
        let c = self.column(COL_TOWN)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for ix in 0..self.rows.len() {
            let t = self.text(ix, c);
            if !t.is_empty() && seen.insert(t) {
                out.push(s!(t));
            }
        }
        Ok(out)
    }

    pub fn all(&self) -> RowView<'_> {
        RowView { table: self, row_ix: (0..self.rows.len()).collect() }
    }
}

/// Zero-copy filtered view: positions of kept rows in the table.
#[derive(Clone, Debug)]
pub struct RowView<'a> {
    table: &'a Table,
    row_ix: Vec<usize>,
}

impl<'a> RowView<'a> {
    pub fn indices(&self) -> &[usize] { &self.row_ix }
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Keep rows for which `keep(row_index)` holds.
    pub fn filter(&self, keep: impl Fn(usize) -> bool) -> Self {
        let row_ix = self.row_ix.iter().copied().filter(|&ix| keep(ix)).collect();
        Self { table: self.table, row_ix }
    }

    /// Rows whose text in `col` is one of `keys`.
    pub fn filter_in<S: AsRef<str>>(&self, col: usize, keys: &[S]) -> Self {
        let set: HashSet<&str> = keys.iter().map(|k| k.as_ref().trim()).collect();
        self.filter(|ix| set.contains(self.table.text(ix, col)))
    }

    /// Rows whose text in `col` equals `value`.
    pub fn filter_text_eq(&self, col: usize, value: &str) -> Self {
        let value = value.trim();
        self.filter(|ix| self.table.text(ix, col) == value)
    }

    /// Rows whose numeric value in `col` equals `value` (nulls never match).
    pub fn filter_eq(&self, col: usize, value: f64) -> Self {
        self.filter(|ix| self.table.num(ix, col) == Some(value))
    }

    /// Rows with a non-null, strictly positive value in `col`.
    pub fn filter_positive(&self, col: usize) -> Self {
        self.filter(|ix| matches!(self.table.num(ix, col), Some(v) if v > 0.0))
    }

    /// Null-skipping sum. Empty view sums to 0.
    pub fn sum(&self, col: usize) -> f64 {
        self.row_ix.iter().filter_map(|&ix| self.table.num(ix, col)).sum()
    }

    /// Non-null values in `col`.
    pub fn values(&self, col: usize) -> Vec<f64> {
        self.row_ix.iter().filter_map(|&ix| self.table.num(ix, col)).collect()
    }

    pub fn min(&self, col: usize) -> Option<f64> {
        self.values(col).into_iter().reduce(f64::min)
    }

    pub fn max(&self, col: usize) -> Option<f64> {
        self.values(col).into_iter().reduce(f64::max)
    }

    /// Frequency of each distinct non-null value, ascending by value.
    pub fn value_counts(&self, col: usize) -> Vec<(f64, usize)> {
        let mut vals = self.values(col);
        vals.sort_by(|a, b| a.total_cmp(b));

        let mut out: Vec<(f64, usize)> = Vec::new();
        for v in vals {
            if let Some((k, n)) = out.last_mut() {
                if *k == v {
                    *n += 1;
                    continue;
                }
            }
            out.push((v, 1));
        }
        out
    }

    /// Group rows by the text of `col`, groups in first-appearance order.
    pub fn group_by_text(&self, col: usize) -> Vec<(&'a str, Vec<usize>)> {
        let mut groups: Vec<(&'a str, Vec<usize>)> = Vec::new();
        let table: &'a Table = self.table;
        for &ix in &self.row_ix {
            let key = table.text(ix, col);
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(ix),
                None => groups.push((key, vec![ix])),
            }
        }
        groups
    }
}
