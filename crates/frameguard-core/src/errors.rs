use std::fmt::{self, Display};

use thiserror::Error;

use crate::columns::ColumnType;
use crate::rules::RuleCategory;
use crate::types::Value;

/// A violated rule, raised by the first failing check.
///
/// Each variant carries the structured detail of the failure; the `Display`
/// implementation renders the multi-line diagnostic shown to users.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more schema columns are absent from the table
    #[error(
        "Schema violation\nMissing columns: {}\nExpected columns: {}\nActual columns: {}",
        render_names(.missing),
        render_names(.expected),
        render_names(.actual)
    )]
    MissingColumns {
        missing: Vec<String>,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// A present column does not hold the declared element type
    #[error(
        "Schema violation\nColumn: '{column}'\nExpected dtype: {expected}\nActual dtype: {actual}\nAll dtypes:\n{}",
        render_pairs(.dtypes)
    )]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
        dtypes: Vec<(String, ColumnType)>,
    },

    /// Columns outside the allow-list contain missing values
    #[error(
        "Null values detected in columns: {}\nColumns allowing nulls: {}\nNull counts:\n{}",
        render_names(.columns),
        render_names(.allowed),
        render_pairs(.null_counts)
    )]
    UnexpectedNulls {
        columns: Vec<String>,
        allowed: Vec<String>,
        null_counts: Vec<(String, usize)>,
    },

    #[error(
        "Value below minimum in '{column}'\nMin allowed: {min}\nInvalid values: {}",
        render_list(.values)
    )]
    BelowMinimum {
        column: String,
        min: Value,
        values: Vec<Value>,
    },

    #[error(
        "Value above maximum in '{column}'\nMax allowed: {max}\nInvalid values: {}",
        render_list(.values)
    )]
    AboveMaximum {
        column: String,
        max: Value,
        values: Vec<Value>,
    },

    /// A range was declared on a column that holds no numbers
    #[error("Range declared on non-numeric column '{column}'\nActual dtype: {actual}")]
    NonNumericRange { column: String, actual: ColumnType },
}

/// Machine-inspectable tag of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingColumns,
    TypeMismatch,
    UnexpectedNulls,
    BelowMinimum,
    AboveMaximum,
    NonNumericRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingColumns => "MissingColumns",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::UnexpectedNulls => "UnexpectedNulls",
            ErrorKind::BelowMinimum => "BelowMinimum",
            ErrorKind::AboveMaximum => "AboveMaximum",
            ErrorKind::NonNumericRange => "NonNumericRange",
        }
    }

    /// The rule category this kind of failure belongs to.
    pub fn category(&self) -> RuleCategory {
        match self {
            ErrorKind::MissingColumns | ErrorKind::TypeMismatch => RuleCategory::Schema,
            ErrorKind::UnexpectedNulls => RuleCategory::Nulls,
            ErrorKind::BelowMinimum | ErrorKind::AboveMaximum | ErrorKind::NonNumericRange => {
                RuleCategory::Ranges
            }
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingColumns { .. } => ErrorKind::MissingColumns,
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ValidationError::UnexpectedNulls { .. } => ErrorKind::UnexpectedNulls,
            ValidationError::BelowMinimum { .. } => ErrorKind::BelowMinimum,
            ValidationError::AboveMaximum { .. } => ErrorKind::AboveMaximum,
            ValidationError::NonNumericRange { .. } => ErrorKind::NonNumericRange,
        }
    }

    pub fn category(&self) -> RuleCategory {
        self.kind().category()
    }

    /// Names of the offending columns.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingColumns { missing, .. } => {
                missing.iter().map(String::as_str).collect()
            }
            ValidationError::UnexpectedNulls { columns, .. } => {
                columns.iter().map(String::as_str).collect()
            }
            ValidationError::TypeMismatch { column, .. }
            | ValidationError::BelowMinimum { column, .. }
            | ValidationError::AboveMaximum { column, .. }
            | ValidationError::NonNumericRange { column, .. } => vec![column.as_str()],
        }
    }
}

/// Errors raised while building a [`crate::Table`] or reading one from disk.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{column}' appears more than once")]
    DuplicateColumn { column: String },

    #[error("Column '{column}' has unsupported type {data_type}")]
    UnsupportedType { column: String, data_type: String },

    #[error("Unknown file format for '{0}'. Supported: .csv, .parquet")]
    UnknownFormat(String),

    /// The Arrow kernel produced an error (e.g., unsupported cast)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// CSV reading or IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown datatype '{0}'. Supported: integer, float, string, boolean")]
pub struct UnknownColumnType(pub String);

fn render_names(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn render_list<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

fn render_pairs<T: Display>(pairs: &[(String, T)]) -> String {
    pairs
        .iter()
        .map(|(name, v)| format!("  {}: {}", name, v))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = ValidationError::MissingColumns {
            missing: vec!["name".to_string()],
            expected: vec!["age".to_string(), "name".to_string()],
            actual: vec!["age".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Schema violation\nMissing columns: ['name']\nExpected columns: ['age', 'name']\nActual columns: ['age']"
        );
        assert_eq!(err.kind(), ErrorKind::MissingColumns);
        assert_eq!(err.category(), RuleCategory::Schema);
        assert_eq!(err.columns(), vec!["name"]);
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ValidationError::TypeMismatch {
            column: "age".to_string(),
            expected: ColumnType::Integer,
            actual: ColumnType::String,
            dtypes: vec![
                ("age".to_string(), ColumnType::String),
                ("name".to_string(), ColumnType::String),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Schema violation\nColumn: 'age'\nExpected dtype: integer\nActual dtype: string\nAll dtypes:\n  age: string\n  name: string"
        );
    }

    #[test]
    fn test_null_message_lists_all_counts() {
        let err = ValidationError::UnexpectedNulls {
            columns: vec!["age".to_string()],
            allowed: vec![],
            null_counts: vec![("age".to_string(), 1), ("name".to_string(), 0)],
        };
        assert_eq!(
            err.to_string(),
            "Null values detected in columns: ['age']\nColumns allowing nulls: []\nNull counts:\n  age: 1\n  name: 0"
        );
        assert_eq!(err.category(), RuleCategory::Nulls);
    }

    #[test]
    fn test_range_messages() {
        let below = ValidationError::BelowMinimum {
            column: "age".to_string(),
            min: Value::Integer(0),
            values: vec![Value::Integer(-5), Value::Integer(-5)],
        };
        assert_eq!(
            below.to_string(),
            "Value below minimum in 'age'\nMin allowed: 0\nInvalid values: [-5, -5]"
        );

        let above = ValidationError::AboveMaximum {
            column: "score".to_string(),
            max: Value::Float(1.5),
            values: vec![Value::Float(2.25)],
        };
        assert_eq!(
            above.to_string(),
            "Value above maximum in 'score'\nMax allowed: 1.5\nInvalid values: [2.25]"
        );
        assert_eq!(above.kind().as_str(), "AboveMaximum");
    }
}
