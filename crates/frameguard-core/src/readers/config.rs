pub struct ReaderConfig {
    pub batch_size: usize,
    pub infer_rows: usize,
    pub delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 128 * 1024,
            infer_rows: 1000,
            delimiter: b',',
        }
    }
}

pub struct ReaderConfigBuilder {
    batch_size: usize,
    infer_rows: usize,
    delimiter: u8,
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfigBuilder {
    /// Create a new [`ReaderConfigBuilder`]
    pub fn new() -> Self {
        let reader = ReaderConfig::default();
        Self {
            batch_size: reader.batch_size,
            infer_rows: reader.infer_rows,
            delimiter: reader.delimiter,
        }
    }

    /// Build a [`ReaderConfig`]
    pub fn build(self) -> ReaderConfig {
        ReaderConfig {
            batch_size: self.batch_size,
            infer_rows: self.infer_rows,
            delimiter: self.delimiter,
        }
    }

    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }

    /// Number of CSV records scanned to infer column types
    pub fn with_infer_rows(self, infer_rows: usize) -> Self {
        Self { infer_rows, ..self }
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_default() {
        let reader = ReaderConfig::default();
        assert_eq!(reader.batch_size, 128 * 1024);
        assert_eq!(reader.infer_rows, 1000);
        assert_eq!(reader.delimiter, b',');
    }

    #[test]
    fn test_reader_builder() {
        let reader = ReaderConfigBuilder::new()
            .with_batch_size(128_000)
            .with_infer_rows(50)
            .with_delimiter(b';')
            .build();
        assert_eq!(reader.batch_size, 128_000);
        assert_eq!(reader.infer_rows, 50);
        assert_eq!(reader.delimiter, b';');
    }
}
