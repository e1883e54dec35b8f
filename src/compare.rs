//! Snapshot comparison: outer joins of the current run against the baseline
//! and per-column new/old ratio series.

use std::path::PathBuf;

use crate::{
    CompareError,
    report::ReportTable,
    snapshot,
    table::{Table, outer_join},
};

/// One new/old ratio, labeled `(<column>)_<row-index>`.
#[derive(Clone, Debug, PartialEq)]
pub struct RatioEntry {
    pub label: String,
    pub value: f64,
}

/// Compares the current snapshot against the baseline for one prefix.
///
/// Accumulates a `ReportTable` per compared column for later HTML rendering.
pub struct Comparator {
    prefix: String,
    tables: Vec<ReportTable>,
}

impl Comparator {
    pub fn new<T: Into<String>>(prefix: T) -> Self {
        Self {
            prefix: prefix.into(),
            tables: Vec::new(),
        }
    }

    fn load_pair(&self) -> Result<(Table, Table), CompareError> {
        let current = snapshot::load_snapshot(&snapshot::stats_path(&self.prefix))?;
        let previous = snapshot::load_snapshot(&snapshot::previous_path(&self.prefix))?;
        Ok((current, previous))
    }

    /// Full outer join of current and previous stats on `Name`.
    pub fn comparison_stats(&self) -> Result<Table, CompareError> {
        let (current, previous) = self.load_pair()?;
        outer_join(&current, &previous, &["Name"])
    }

    /// Write the joined stats to `<prefix>_comparison_stats.csv` with a
    /// leading row-index column.
    pub fn write_comparison_stats(&self) -> Result<PathBuf, CompareError> {
        let merged = self.comparison_stats()?;
        let path = snapshot::comparison_path(&self.prefix);
        merged.write_csv_indexed(&path)?;
        Ok(path)
    }

    /// Compare one metric column between the snapshots.
    ///
    /// Joins on `Type` + `Name`, appends a `Results` column of new/old
    /// ratios, records the subset for the HTML report, prints it to stdout,
    /// and returns the ratio series. A missing or zero old-side value yields
    /// a non-finite ratio; the gate treats those as violations.
    pub fn compare_column(&mut self, column: &str) -> Result<Vec<RatioEntry>, CompareError> {
        let (current, previous) = self.load_pair()?;
        for (side, table) in [("current", &current), ("previous", &previous)] {
            if !table.has_column(column) {
                return Err(CompareError::column_not_found(format!(
                    "{column} (in {side} snapshot)"
                )));
            }
        }

        let merged = outer_join(&current, &previous, &["Type", "Name"])?;
        let new_col = format!("{column}_new");
        let old_col = format!("{column}_old");
        let mut subset = merged.select(&["Type", "Name", new_col.as_str(), old_col.as_str()])?;

        let ratios: Vec<f64> = (0..subset.row_count())
            .map(|row| merged.numeric(row, &new_col) / merged.numeric(row, &old_col))
            .collect();
        subset.push_column(
            "Results",
            ratios.iter().map(|v| Some(v.to_string())).collect(),
        )?;

        self.tables.push(ReportTable {
            title: column.to_string(),
            body: subset.to_html(),
        });
        println!("Comparison for {column} column:\n{}", subset.to_text());

        Ok(ratios
            .into_iter()
            .enumerate()
            .map(|(row, value)| RatioEntry {
                label: format!("({column})_{row}"),
                value,
            })
            .collect())
    }

    /// Tables accumulated by `compare_column`, in call order.
    pub fn tables(&self) -> &[ReportTable] {
        &self.tables
    }
}
