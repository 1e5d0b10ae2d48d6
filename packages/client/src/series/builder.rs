//! Incremental construction of a [`Series`]

use super::core::Series;
use super::value::Value;

/// Accumulates columns and rows while a series is being decoded
///
/// Row arity is not checked against the column count.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl SeriesBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn add_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn add_row(&mut self, row: Vec<Value>) -> &mut Self {
        self.rows.push(row);
        self
    }

    #[must_use]
    pub fn build(self) -> Series {
        Series {
            name: self.name,
            columns: self.columns,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_lookup() {
        let mut builder = SeriesBuilder::new("cpu");
        builder
            .add_columns(["time", "sequence_number", "usage"])
            .add_row(vec![Value::Integer(10), Value::Integer(1), Value::Float(0.5)])
            .add_row(vec![Value::Integer(20), Value::Integer(2)]);
        let series = builder.build();

        assert_eq!(series.name(), "cpu");
        assert_eq!(series.len(), 2);
        assert_eq!(series.column_index("usage"), Some(2));
        assert_eq!(series.value(0, "usage"), Some(&Value::Float(0.5)));
        assert_eq!(series.value(1, "usage"), None);
        assert_eq!(series.value(0, "missing"), None);
    }

    #[test]
    fn test_serialises_to_wire_shape() {
        let mut builder = SeriesBuilder::new("mem");
        builder
            .add_columns(["time", "sequence_number", "host"])
            .add_row(vec![Value::Integer(1), Value::Integer(2), Value::from("a")]);
        let encoded = serde_json::to_string(&builder.build()).ok();
        assert_eq!(
            encoded.as_deref(),
            Some(r#"{"name":"mem","columns":["time","sequence_number","host"],"points":[[1,2,"a"]]}"#)
        );
    }
}
