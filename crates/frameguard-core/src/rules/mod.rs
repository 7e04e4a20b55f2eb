use std::fmt;

use crate::errors::ValidationError;
use crate::tables::Table;

pub mod nulls;
pub mod range;
pub mod schema;

pub use nulls::NullCheck;
pub use range::RangeCheck;
pub use schema::SchemaCheck;

/// Independent, ordered phases of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    Schema,
    Nulls,
    Ranges,
}

impl RuleCategory {
    /// Every category, in evaluation order.
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::Schema,
        RuleCategory::Nulls,
        RuleCategory::Ranges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Schema => "schema",
            RuleCategory::Nulls => "nulls",
            RuleCategory::Ranges => "ranges",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A check applied to a whole table.
pub trait TableRule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    fn category(&self) -> RuleCategory;
    /// Validates a [`Table`], failing on the first violation.
    fn validate(&self, table: &Table) -> Result<(), ValidationError>;
}
