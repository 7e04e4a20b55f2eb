use chrono::Local;
use frameguard_core::ValidationResult;
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    tables: Vec<TableFormatter>,
}

#[derive(Serialize, Deserialize)]
struct TableFormatter {
    name: String,
    n_rows: usize,
    pass: bool,
    checks: Vec<CheckFormatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorFormatter>,
}

#[derive(Serialize, Deserialize)]
struct CheckFormatter {
    category: String,
    status: String,
}

#[derive(Serialize, Deserialize)]
struct ErrorFormatter {
    kind: String,
    columns: Vec<String>,
    message: String,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            tables: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self) {}

    fn on_table_load(&self, _current: usize, _total: usize, _name: &str) {}

    fn on_validation_start(&self) {}

    fn on_table_result(&mut self, result: &ValidationResult) {
        let checks = result
            .checks()
            .iter()
            .map(|c| CheckFormatter {
                category: c.category.as_str().to_string(),
                status: c.status.as_str().to_string(),
            })
            .collect();
        let error = result.failure().map(|e| ErrorFormatter {
            kind: e.kind().as_str().to_string(),
            columns: e.columns().into_iter().map(String::from).collect(),
            message: e.to_string(),
        });

        self.tables.push(TableFormatter {
            name: result.table_name.clone(),
            n_rows: result.total_rows,
            pass: result.is_passed(),
            checks,
            error,
        });
    }

    fn on_summary(&self, _passed: usize, _failed: usize) {}
}
