//! A single decoded series

use serde::{Deserialize, Serialize};

use super::value::Value;

/// One named series: column schema plus rows in arrival order
///
/// Serialises to the wire object shape `{"name", "columns", "points"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub(super) name: String,
    pub(super) columns: Vec<String>,
    #[serde(rename = "points")]
    pub(super) rows: Vec<Vec<Value>>,
}

impl Series {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `column` in the schema
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    /// Value of `column` in row `row`, if both exist
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }
}
