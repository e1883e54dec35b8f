use std::path::Path;

use ahash::AHashMap;

use crate::CompareError;

/// In-memory tabular snapshot. Cells are `None` where the source had no value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<(), CompareError> {
        if row.len() != self.columns.len() {
            return Err(CompareError::malformed(format!(
                "row has {} cells, expected {}",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }

    /// Numeric view of a cell. Missing or non-numeric values come back as NaN.
    pub fn numeric(&self, row: usize, column: &str) -> f64 {
        match self.cell(row, column) {
            Some(text) => text.trim().parse().unwrap_or(f64::NAN),
            None => f64::NAN,
        }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, CompareError> {
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| CompareError::io(format!("{}: {e}", path.display())))?;
        let columns = reader
            .headers()
            .map_err(|e| CompareError::malformed(format!("{}: {e}", path.display())))?
            .iter()
            .map(str::to_string)
            .collect();
        let mut table = Table::new(columns);
        for record in reader.records() {
            let record =
                record.map_err(|e| CompareError::malformed(format!("{}: {e}", path.display())))?;
            let row = record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect();
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Write as CSV with a leading unnamed row-index column. Missing cells
    /// become empty fields.
    pub fn write_csv_indexed(&self, path: &Path) -> Result<(), CompareError> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| CompareError::io(format!("{}: {e}", path.display())))?;
        let mut header = vec![String::new()];
        header.extend(self.columns.iter().cloned());
        writer
            .write_record(&header)
            .map_err(|e| CompareError::io(e.to_string()))?;
        for (index, row) in self.rows.iter().enumerate() {
            let mut record = vec![index.to_string()];
            record.extend(row.iter().map(|cell| cell.clone().unwrap_or_default()));
            writer
                .write_record(&record)
                .map_err(|e| CompareError::io(e.to_string()))?;
        }
        writer.flush().map_err(|e| CompareError::io(e.to_string()))
    }

    pub fn select(&self, columns: &[&str]) -> Result<Table, CompareError> {
        let mut indices = Vec::with_capacity(columns.len());
        for name in columns {
            indices.push(
                self.column_index(name)
                    .ok_or_else(|| CompareError::column_not_found((*name).to_string()))?,
            );
        }
        let mut selected = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
        for row in &self.rows {
            selected
                .rows
                .push(indices.iter().map(|&i| row[i].clone()).collect());
        }
        Ok(selected)
    }

    pub fn push_column(
        &mut self,
        name: &str,
        values: Vec<Option<String>>,
    ) -> Result<(), CompareError> {
        if values.len() != self.rows.len() {
            return Err(CompareError::malformed(format!(
                "column {name} has {} values, expected {}",
                values.len(),
                self.rows.len()
            )));
        }
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Aligned plain-text rendering with a leading row-index column.
    pub fn to_text(&self) -> String {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(display_cell(cell).len());
            }
        }
        let mut text = String::new();
        text.push_str(&" ".repeat(index_width));
        for (name, width) in self.columns.iter().zip(&widths) {
            let width = *width;
            text.push_str("  ");
            text.push_str(&format!("{name:>width$}"));
        }
        text.push('\n');
        for (index, row) in self.rows.iter().enumerate() {
            text.push_str(&format!("{index:>index_width$}"));
            for (cell, width) in row.iter().zip(&widths) {
                let width = *width;
                text.push_str("  ");
                text.push_str(&format!("{:>width$}", display_cell(cell)));
            }
            text.push('\n');
        }
        text
    }

    /// HTML `<table>` rendering with a leading row-index column.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");
        html.push_str("  <thead>\n    <tr>\n      <th></th>\n");
        for name in &self.columns {
            html.push_str(&format!("      <th>{}</th>\n", escape_html(name)));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for (index, row) in self.rows.iter().enumerate() {
            html.push_str(&format!("    <tr>\n      <th>{index}</th>\n"));
            for cell in row {
                html.push_str(&format!("      <td>{}</td>\n", escape_html(&display_cell(cell))));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

fn display_cell(cell: &Option<String>) -> String {
    cell.clone().unwrap_or_else(|| String::from("NaN"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Full outer join of `new` against `old` on the `keys` columns.
///
/// Non-key columns present on both sides get `_new`/`_old` suffixes; columns
/// unique to one side keep their name. Row order: `new` rows in input order,
/// then unmatched `old` rows in input order. No row is dropped; the missing
/// side's cells stay `None`.
pub fn outer_join(new: &Table, old: &Table, keys: &[&str]) -> Result<Table, CompareError> {
    let new_keys = column_indices(new, keys)?;
    let old_keys = column_indices(old, keys)?;

    let new_value_cols: Vec<usize> = (0..new.columns.len())
        .filter(|i| !new_keys.contains(i))
        .collect();
    let old_value_cols: Vec<usize> = (0..old.columns.len())
        .filter(|i| !old_keys.contains(i))
        .collect();

    let mut columns: Vec<String> = keys.iter().map(|k| (*k).to_string()).collect();
    for &i in &new_value_cols {
        let name = &new.columns[i];
        if old.has_column(name) && !keys.contains(&name.as_str()) {
            columns.push(format!("{name}_new"));
        } else {
            columns.push(name.clone());
        }
    }
    for &i in &old_value_cols {
        let name = &old.columns[i];
        if new.has_column(name) && !keys.contains(&name.as_str()) {
            columns.push(format!("{name}_old"));
        } else {
            columns.push(name.clone());
        }
    }

    let mut old_index: AHashMap<Vec<Option<String>>, usize> = AHashMap::new();
    for (row_idx, row) in old.rows.iter().enumerate() {
        let key: Vec<Option<String>> = old_keys.iter().map(|&i| row[i].clone()).collect();
        old_index.entry(key).or_insert(row_idx);
    }

    let mut matched = vec![false; old.rows.len()];
    let mut joined = Table::new(columns);
    for row in &new.rows {
        let key: Vec<Option<String>> = new_keys.iter().map(|&i| row[i].clone()).collect();
        let mut cells = key.clone();
        cells.extend(new_value_cols.iter().map(|&i| row[i].clone()));
        match old_index.get(&key) {
            Some(&old_idx) => {
                matched[old_idx] = true;
                cells.extend(old_value_cols.iter().map(|&i| old.rows[old_idx][i].clone()));
            }
            None => cells.extend(std::iter::repeat(None).take(old_value_cols.len())),
        }
        joined.rows.push(cells);
    }
    for (old_idx, row) in old.rows.iter().enumerate() {
        if matched[old_idx] {
            continue;
        }
        let mut cells: Vec<Option<String>> = old_keys.iter().map(|&i| row[i].clone()).collect();
        cells.extend(std::iter::repeat(None).take(new_value_cols.len()));
        cells.extend(old_value_cols.iter().map(|&i| row[i].clone()));
        joined.rows.push(cells);
    }
    Ok(joined)
}

fn column_indices(table: &Table, names: &[&str]) -> Result<Vec<usize>, CompareError> {
    names
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| CompareError::column_not_found((*name).to_string()))
        })
        .collect()
}
