use std::fs::File;
use std::path::Path;

use arrow::error::ArrowError;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::errors::TableError;
use crate::readers::ReaderConfig;
use crate::tables::Table;
use crate::types::Batches;

/// Read every row group of a Parquet file into a [`Table`].
pub fn read_parquet(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Table, TableError> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = builder.schema().clone();

    let reader = builder.with_batch_size(config.batch_size).build()?;
    let batches = reader.collect::<Result<Batches, ArrowError>>()?;

    Table::from_batches(schema, &batches)
}
