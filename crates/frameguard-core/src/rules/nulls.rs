use crate::config::NullPolicy;
use crate::errors::ValidationError;
use crate::rules::{RuleCategory, TableRule};
use crate::tables::Table;

/// Missing values are only allowed in allow-listed columns.
///
/// Every offending column is reported, along with the missing-value count of
/// each table column.
pub struct NullCheck<'a> {
    allow_null: &'a NullPolicy,
}

impl<'a> NullCheck<'a> {
    pub fn new(allow_null: &'a NullPolicy) -> Self {
        Self { allow_null }
    }
}

impl TableRule for NullCheck<'_> {
    fn name(&self) -> &'static str {
        "NullCheck"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Nulls
    }

    fn validate(&self, table: &Table) -> Result<(), ValidationError> {
        let null_counts: Vec<(String, usize)> = table
            .columns()
            .map(|(name, column)| (name.to_string(), column.missing_count()))
            .collect();

        let problematic: Vec<String> = null_counts
            .iter()
            .filter(|(name, count)| *count > 0 && !self.allow_null.allows(name))
            .map(|(name, _)| name.clone())
            .collect();

        if problematic.is_empty() {
            return Ok(());
        }
        Err(ValidationError::UnexpectedNulls {
            columns: problematic,
            allowed: self.allow_null.iter().map(String::from).collect(),
            null_counts,
        })
    }
}

/// Check that only columns in `allow_null` contain missing values.
pub fn validate_no_nulls(table: &Table, allow_null: &NullPolicy) -> Result<(), ValidationError> {
    NullCheck::new(allow_null).validate(table)
}
