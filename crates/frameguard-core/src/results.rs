use crate::errors::ValidationError;
use crate::rules::RuleCategory;

/// Outcome of a single rule category for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    /// Not run because an earlier category failed
    Skipped,
    /// Nothing configured for this category
    Disabled,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Skipped => "skipped",
            CheckStatus::Disabled => "disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub category: RuleCategory,
    pub status: CheckStatus,
}

/// Per-table validation record consumed by reporters.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub table_name: String,
    pub total_rows: usize,
    checks: Vec<CheckResult>,
    failure: Option<ValidationError>,
}

impl ValidationResult {
    pub fn new(table_name: String, total_rows: usize) -> Self {
        Self {
            table_name,
            total_rows,
            checks: Vec::new(),
            failure: None,
        }
    }

    pub fn add_check(&mut self, category: RuleCategory, status: CheckStatus) {
        self.checks.push(CheckResult { category, status });
    }

    pub fn set_failed(&mut self, error: ValidationError) {
        self.failure = Some(error);
    }

    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn status_of(&self, category: RuleCategory) -> Option<CheckStatus> {
        self.checks
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.status)
    }

    pub fn failure(&self) -> Option<&ValidationError> {
        self.failure.as_ref()
    }

    pub fn is_passed(&self) -> bool {
        self.failure.is_none()
    }
}
