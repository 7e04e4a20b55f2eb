use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;

use crate::columns::{Column, ColumnType};
use crate::errors::TableError;
use crate::types::Batch;

/// An in-memory, column-oriented table.
///
/// Columns keep their insertion order and all hold the same number of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Add a column, replacing any column with the same name in place.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<&mut Self, TableError> {
        let name = name.into();
        let column = column.into();

        if let Some((_, other)) = self.columns.iter().find(|(n, _)| *n != name) {
            if other.len() != column.len() {
                return Err(TableError::LengthMismatch {
                    column: name,
                    expected: other.len(),
                    actual: column.len(),
                });
            }
        }

        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
        Ok(self)
    }

    /// Builder form of [`Table::add_column`].
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<Self, TableError> {
        self.add_column(name, column)?;
        Ok(self)
    }

    /// Concatenate record batches sharing `schema` into one table.
    pub fn from_batches(schema: SchemaRef, batches: &[Batch]) -> Result<Self, TableError> {
        let batch = concat_batches(&schema, batches)?;
        Table::try_from(&batch)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Element type of every column, in table order.
    pub fn dtypes(&self) -> Vec<(String, ColumnType)> {
        self.columns
            .iter()
            .map(|(n, c)| (n.clone(), c.column_type()))
            .collect()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

impl TryFrom<&Batch> for Table {
    type Error = TableError;

    /// Fails on repeated field names, which Arrow schemas allow.
    fn try_from(batch: &Batch) -> Result<Self, Self::Error> {
        let mut table = Table::new();
        for (field, array) in batch.schema().fields().iter().zip(batch.columns()) {
            if table.contains(field.name()) {
                return Err(TableError::DuplicateColumn {
                    column: field.name().clone(),
                });
            }
            let column = Column::try_from_array(field.name(), array)?;
            table.add_column(field.name().clone(), column)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};

    use super::*;

    #[test]
    fn test_table_builder_keeps_order() {
        let table = Table::new()
            .with_column("age", vec![25i64, 30])
            .unwrap()
            .with_column("name", vec!["Alice", "Bob"])
            .unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["age", "name"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(
            table.dtypes(),
            vec![
                ("age".to_string(), ColumnType::Integer),
                ("name".to_string(), ColumnType::String)
            ]
        );
    }

    #[test]
    fn test_table_replace_column_in_place() {
        let mut table = Table::new()
            .with_column("age", vec![25i64, 30])
            .unwrap()
            .with_column("name", vec!["Alice", "Bob"])
            .unwrap();
        table.add_column("age", vec!["25", "30"]).unwrap();

        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["age", "name"]);
        assert_eq!(
            table.column("age").map(|c| c.column_type()),
            Some(ColumnType::String)
        );
    }

    #[test]
    fn test_table_length_mismatch() {
        let result = Table::new()
            .with_column("age", vec![25i64, 30])
            .unwrap()
            .with_column("name", vec!["Alice"]);

        match result {
            Err(TableError::LengthMismatch {
                column,
                expected,
                actual,
            }) => {
                assert_eq!(column, "name");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_table_from_batches() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("label", DataType::Utf8, true),
        ]));
        let first = Batch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef,
                Arc::new(StringArray::from(vec![Some("a"), None])) as ArrayRef,
            ],
        )
        .unwrap();
        let second = Batch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![3])) as ArrayRef,
                Arc::new(StringArray::from(vec![Some("c")])) as ArrayRef,
            ],
        )
        .unwrap();

        let table = Table::from_batches(schema, &[first, second]).unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column("label").unwrap().missing_count(), 1);
        assert!(!table.contains("missing"));
    }

    #[test]
    fn test_batch_with_repeated_field_name() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Int64, true),
            Field::new("a", DataType::Int64, true),
        ]));
        let batch = Batch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![None])) as ArrayRef,
                Arc::new(Int64Array::from(vec![Some(1)])) as ArrayRef,
            ],
        )
        .unwrap();

        match Table::try_from(&batch) {
            Err(TableError::DuplicateColumn { column }) => assert_eq!(column, "a"),
            other => panic!("Expected DuplicateColumn, got {:?}", other),
        }
    }
}
