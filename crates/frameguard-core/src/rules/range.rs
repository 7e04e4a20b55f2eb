use crate::columns::Column;
use crate::config::RangeSpec;
use crate::errors::ValidationError;
use crate::rules::{RuleCategory, TableRule};
use crate::tables::Table;
use crate::types::Value;

/// Per-column numeric bounds.
///
/// Columns are processed in declaration order and the minimum is checked
/// before the maximum. Ranged columns absent from the table are skipped and
/// missing values never violate a bound.
pub struct RangeCheck<'a> {
    ranges: &'a RangeSpec,
}

impl<'a> RangeCheck<'a> {
    pub fn new(ranges: &'a RangeSpec) -> Self {
        Self { ranges }
    }
}

impl TableRule for RangeCheck<'_> {
    fn name(&self) -> &'static str {
        "RangeCheck"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Ranges
    }

    fn validate(&self, table: &Table) -> Result<(), ValidationError> {
        for (name, bounds) in self.ranges.iter() {
            let Some(column) = table.column(name) else {
                continue;
            };
            if bounds.min.is_none() && bounds.max.is_none() {
                continue;
            }
            if !column.column_type().is_numeric() {
                return Err(ValidationError::NonNumericRange {
                    column: name.to_string(),
                    actual: column.column_type(),
                });
            }

            if let Some(min) = bounds.min {
                let values = violations(column, |v| v < min);
                if !values.is_empty() {
                    return Err(ValidationError::BelowMinimum {
                        column: name.to_string(),
                        min,
                        values,
                    });
                }
            }
            if let Some(max) = bounds.max {
                let values = violations(column, |v| v > max);
                if !values.is_empty() {
                    return Err(ValidationError::AboveMaximum {
                        column: name.to_string(),
                        max,
                        values,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Values of a numeric column matching `violates`, in row order.
///
/// Nulls are skipped; `NaN` never compares and so never violates.
fn violations<F>(column: &Column, violates: F) -> Vec<Value>
where
    F: Fn(Value) -> bool,
{
    match column {
        Column::Integer(array) => array
            .iter()
            .flatten()
            .map(Value::Integer)
            .filter(|v| violates(*v))
            .collect(),
        Column::Float(array) => array
            .iter()
            .flatten()
            .map(Value::Float)
            .filter(|v| violates(*v))
            .collect(),
        Column::String(_) | Column::Boolean(_) => Vec::new(),
    }
}

/// Check numeric columns of `table` against their configured bounds.
pub fn validate_ranges(table: &Table, ranges: &RangeSpec) -> Result<(), ValidationError> {
    RangeCheck::new(ranges).validate(table)
}
