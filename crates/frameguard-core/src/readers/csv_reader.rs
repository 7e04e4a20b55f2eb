use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;
use std::sync::Arc;

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder as CsvReaderBuilder;
use arrow::error::ArrowError;

use crate::errors::TableError;
use crate::readers::ReaderConfig;
use crate::tables::Table;
use crate::types::Batches;

/// Read a CSV file with a header row into a [`Table`].
///
/// Column types are inferred from the first `infer_rows` records; empty
/// cells become missing values.
pub fn read_csv(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Table, TableError> {
    let mut file = BufReader::new(File::open(path)?);

    let format = Format::default()
        .with_header(true)
        .with_delimiter(config.delimiter);
    let (schema, _) = format.infer_schema(&mut file, Some(config.infer_rows))?;
    let schema = Arc::new(schema);
    file.rewind()?;

    let reader = CsvReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(config.batch_size)
        .build(file)?;
    let batches = reader.collect::<Result<Batches, ArrowError>>()?;

    Table::from_batches(schema, &batches)
}
