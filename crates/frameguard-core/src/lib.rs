pub mod columns;
pub mod config;
pub mod errors;
pub mod readers;
pub mod results;
pub mod rules;
pub mod tables;
pub mod types;
pub mod validator;

pub use columns::{Column, ColumnType, NumericType};
pub use config::{
    Bounds, NullPolicy, RangeSpec, SchemaSpec, ValidationConfig, ValidationConfigBuilder,
};
pub use errors::{ErrorKind, TableError, UnknownColumnType, ValidationError};
pub use results::{CheckResult, CheckStatus, ValidationResult};
pub use rules::nulls::validate_no_nulls;
pub use rules::range::validate_ranges;
pub use rules::schema::validate_schema;
pub use rules::{RuleCategory, TableRule};
pub use tables::Table;
pub use types::Value;
pub use validator::Validator;
