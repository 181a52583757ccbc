//! Table types.

use serde::{Deserialize, Serialize};

/// A table structure.
///
/// `headers` is never empty for tables produced by the parser. Rows may be
/// ragged: a row can hold fewer or more cells than there are headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header cells
    pub headers: Vec<String>,

    /// Data rows
    pub rows: Vec<Vec<String>>,

    /// Table caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Table {
    /// Create a table with the given header cells.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            caption: None,
        }
    }

    /// Set the caption and return self.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Create a row from text values and add it.
    pub fn push_row<S: Into<String>>(&mut self, values: impl IntoIterator<Item = S>) {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (one per header).
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if any row's cell count differs from the header count.
    pub fn is_ragged(&self) -> bool {
        let width = self.headers.len();
        self.rows.iter().any(|r| r.len() != width)
    }

    /// Get a cell, or `""` when the row is too short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Get a row fitted to the header width: excess cells dropped, missing
    /// cells empty.
    pub fn fitted_row(&self, row: usize) -> Vec<&str> {
        (0..self.headers.len()).map(|c| self.cell(row, c)).collect()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
