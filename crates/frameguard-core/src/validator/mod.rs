//! Validator entry point.
//!
//! The [`Validator`] owns an immutable [`ValidationConfig`] and applies its
//! rule categories in a fixed order: schema, then nulls, then ranges. The
//! first failing category aborts the run.

use crate::config::ValidationConfig;
use crate::errors::ValidationError;
use crate::results::{CheckStatus, ValidationResult};
use crate::rules::{NullCheck, RangeCheck, RuleCategory, SchemaCheck, TableRule};
use crate::tables::Table;

/// Applies a [`ValidationConfig`] to tables.
///
/// The validator holds no state between calls and can be shared across
/// threads to validate different tables concurrently.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every configured check, stopping at the first failing category.
    ///
    /// The schema check only runs when a schema is declared and the range
    /// check only when ranges are declared. The null check always runs: an
    /// empty allow-list means no column may contain missing values.
    pub fn validate(&self, table: &Table) -> Result<(), ValidationError> {
        for rule in self.rules() {
            rule.validate(table)?;
        }
        Ok(())
    }

    /// Same checks as [`Validator::validate`], recorded per category.
    pub fn evaluate(&self, table_name: &str, table: &Table) -> ValidationResult {
        let mut result = ValidationResult::new(table_name.to_string(), table.num_rows());
        let rules = self.rules();

        for category in RuleCategory::ALL {
            let Some(rule) = rules.iter().find(|r| r.category() == category) else {
                result.add_check(category, CheckStatus::Disabled);
                continue;
            };
            if !result.is_passed() {
                result.add_check(category, CheckStatus::Skipped);
                continue;
            }
            match rule.validate(table) {
                Ok(()) => result.add_check(category, CheckStatus::Passed),
                Err(e) => {
                    result.add_check(category, CheckStatus::Failed);
                    result.set_failed(e);
                }
            }
        }
        result
    }

    /// Names of the rules [`Validator::validate`] runs, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules().iter().map(|r| r.name()).collect()
    }

    /// Enabled rules in evaluation order.
    fn rules(&self) -> Vec<Box<dyn TableRule + '_>> {
        let mut rules: Vec<Box<dyn TableRule + '_>> = Vec::with_capacity(3);
        if !self.config.schema().is_empty() {
            rules.push(Box::new(SchemaCheck::new(self.config.schema())));
        }
        rules.push(Box::new(NullCheck::new(self.config.allow_null())));
        if !self.config.ranges().is_empty() {
            rules.push(Box::new(RangeCheck::new(self.config.ranges())));
        }
        rules
    }
}
