//! File readers.
//!
//! Materialize a [`Table`] from CSV or Parquet files through Arrow. The
//! validator never calls these: they are the loading side of the pipeline.
//!
//! ```no_run
//! use frameguard_core::readers::{read_table, ReaderConfig};
//!
//! let table = read_table("data.csv", &ReaderConfig::default())?;
//! # Ok::<(), frameguard_core::TableError>(())
//! ```

mod config;
pub mod csv_reader;
pub mod parquet_reader;

use std::path::Path;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use csv_reader::read_csv;
pub use parquet_reader::read_parquet;

use crate::errors::TableError;
use crate::tables::Table;

/// File format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Parquet,
}

impl FileFormat {
    /// Detect format from file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(FileFormat::Csv),
            "parquet" => Some(FileFormat::Parquet),
            _ => None,
        }
    }
}

/// Read a CSV or Parquet file, picking the reader from the extension.
pub fn read_table(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Table, TableError> {
    let path = path.as_ref();
    match FileFormat::from_path(path) {
        Some(FileFormat::Csv) => read_csv(path, config),
        Some(FileFormat::Parquet) => read_parquet(path, config),
        None => Err(TableError::UnknownFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(FileFormat::from_path("data.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_path("dir/DATA.CSV"), Some(FileFormat::Csv));
        assert_eq!(
            FileFormat::from_path("data.parquet"),
            Some(FileFormat::Parquet)
        );
        assert_eq!(FileFormat::from_path("data.json"), None);
        assert_eq!(FileFormat::from_path("data"), None);
    }

    #[test]
    fn test_read_unknown_format() {
        let err = read_table("data.xlsx", &ReaderConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown file format for 'data.xlsx'. Supported: .csv, .parquet"
        );
    }
}
