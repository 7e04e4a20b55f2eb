use crate::config::SchemaSpec;
use crate::errors::ValidationError;
use crate::rules::{RuleCategory, TableRule};
use crate::tables::Table;

/// Column presence and exact element type.
///
/// Missing columns are reported all together, before any type is compared.
/// Type mismatches report the first offending column in declaration order.
pub struct SchemaCheck<'a> {
    schema: &'a SchemaSpec,
}

impl<'a> SchemaCheck<'a> {
    pub fn new(schema: &'a SchemaSpec) -> Self {
        Self { schema }
    }
}

impl TableRule for SchemaCheck<'_> {
    fn name(&self) -> &'static str {
        "SchemaCheck"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn validate(&self, table: &Table) -> Result<(), ValidationError> {
        let missing: Vec<String> = self
            .schema
            .names()
            .filter(|name| !table.contains(name))
            .map(String::from)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingColumns {
                missing,
                expected: self.schema.names().map(String::from).collect(),
                actual: table.column_names().map(String::from).collect(),
            });
        }

        for (name, expected) in self.schema.iter() {
            // Presence was checked above
            let Some(column) = table.column(name) else {
                continue;
            };
            let actual = column.column_type();
            if actual != expected {
                return Err(ValidationError::TypeMismatch {
                    column: name.to_string(),
                    expected,
                    actual,
                    dtypes: table.dtypes(),
                });
            }
        }
        Ok(())
    }
}

/// Check column presence and element types of `table` against `schema`.
pub fn validate_schema(table: &Table, schema: &SchemaSpec) -> Result<(), ValidationError> {
    SchemaCheck::new(schema).validate(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnType;
    use crate::errors::ErrorKind;

    fn people() -> Table {
        Table::new()
            .with_column("age", vec![25i64, 30])
            .unwrap()
            .with_column("name", vec!["Alice", "Bob"])
            .unwrap()
    }

    fn schema() -> SchemaSpec {
        SchemaSpec::new()
            .with_column("age", ColumnType::Integer)
            .with_column("name", ColumnType::String)
    }

    #[test]
    fn test_valid_schema() {
        assert!(validate_schema(&people(), &schema()).is_ok());
    }

    #[test]
    fn test_empty_schema_passes() {
        assert!(validate_schema(&people(), &SchemaSpec::new()).is_ok());
    }

    #[test]
    fn test_missing_column() {
        let table = Table::new().with_column("age", vec![25i64, 30]).unwrap();
        let err = validate_schema(&table, &schema()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingColumns);
        assert_eq!(
            err,
            ValidationError::MissingColumns {
                missing: vec!["name".to_string()],
                expected: vec!["age".to_string(), "name".to_string()],
                actual: vec!["age".to_string()],
            }
        );
    }

    #[test]
    fn test_all_missing_columns_are_listed() {
        let table = Table::new().with_column("id", vec![1i64]).unwrap();
        let err = validate_schema(&table, &schema()).unwrap_err();
        assert_eq!(err.columns(), vec!["age", "name"]);
    }

    #[test]
    fn test_missing_checked_before_dtype() {
        // "age" has the wrong type but the missing "name" wins
        let table = Table::new().with_column("age", vec!["25", "30"]).unwrap();
        let err = validate_schema(&table, &schema()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingColumns);
    }

    #[test]
    fn test_wrong_dtype() {
        let table = Table::new()
            .with_column("age", vec!["25", "30"])
            .unwrap()
            .with_column("name", vec!["Alice", "Bob"])
            .unwrap();
        let err = validate_schema(&table, &schema()).unwrap_err();

        match err {
            ValidationError::TypeMismatch {
                column,
                expected,
                actual,
                dtypes,
            } => {
                assert_eq!(column, "age");
                assert_eq!(expected, ColumnType::Integer);
                assert_eq!(actual, ColumnType::String);
                assert_eq!(dtypes.len(), 2);
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_first_mismatch_is_reported() {
        let table = Table::new()
            .with_column("age", vec![25.0f64])
            .unwrap()
            .with_column("name", vec![true])
            .unwrap();
        let err = validate_schema(&table, &schema()).unwrap_err();
        assert_eq!(err.columns(), vec!["age"]);
    }

    #[test]
    fn test_float_is_not_integer() {
        // Exact equality, no numeric widening
        let table = Table::new().with_column("age", vec![25i64]).unwrap();
        let schema = SchemaSpec::new().with_column("age", ColumnType::Float);
        let err = validate_schema(&table, &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let table = people().with_column("score", vec![1.5f64, 2.0]).unwrap();
        assert!(validate_schema(&table, &schema()).is_ok());
    }
}
