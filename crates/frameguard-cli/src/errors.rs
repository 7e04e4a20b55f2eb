use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file contains no table")]
    EmptyConfig,
    #[error("data file not found: '{table_path}'")]
    FileNotFound { table_path: String },
    #[error("Unknown datatype '{datatype}' for column '{column_name}'. Supported: integer, float, string, boolean")]
    UnknownDatatype {
        datatype: String,
        column_name: String,
    },
    #[error("Column '{column_name}' is declared more than once")]
    DuplicateColumn { column_name: String },
    #[error("Invalid bounds for column '{column_name}': {reason}")]
    InvalidBounds { column_name: String, reason: String },
}
