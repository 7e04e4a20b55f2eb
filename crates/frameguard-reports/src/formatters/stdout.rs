use frameguard_core::{RuleCategory, ValidationResult};
use prettytable::{Cell, Row, Table};

use crate::{utils::numbers::format_numbers, Reporter};

pub struct StdOutFormatter {
    intro: String,
    summary: Vec<SummaryLine>,
}

struct SummaryLine {
    name: String,
    n_rows: usize,
    statuses: Vec<&'static str>,
    passed: bool,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        Self {
            intro: format!("frameguard v{} - Validation Report", version),
            summary: Vec::new(),
        }
    }

    pub fn render_table_result(&self, result: &ValidationResult) -> String {
        let status = if result.is_passed() {
            "PASSED"
        } else {
            "FAILED"
        };
        let mut out = format!(
            "\n{} ({} rows) - {}",
            result.table_name,
            format_numbers(result.total_rows),
            status
        );

        let width = RuleCategory::ALL
            .iter()
            .map(|c| c.as_str().len())
            .max()
            .unwrap_or(0);
        for check in result.checks() {
            let name = check.category.as_str();
            let dots = ".".repeat(width - name.len() + 10);
            out.push_str(&format!("\n  {} {} {}", name, dots, check.status.as_str()));
        }

        if let Some(error) = result.failure() {
            out.push_str(&format!("\n  Error [{}]:", error.kind()));
            for line in error.to_string().lines() {
                out.push_str(&format!("\n    {}", line));
            }
        }
        out
    }

    pub fn render_summary(&self, passed: usize, failed: usize) -> String {
        let mut table = Table::new();
        let mut header = vec![Cell::new("Table"), Cell::new("Rows")];
        header.extend(RuleCategory::ALL.iter().map(|c| Cell::new(c.as_str())));
        header.push(Cell::new("Result"));
        table.add_row(Row::new(header));

        for line in &self.summary {
            let mut cells = vec![
                Cell::new(&line.name),
                Cell::new(&format_numbers(line.n_rows)),
            ];
            cells.extend(line.statuses.iter().map(|s| Cell::new(s)));
            cells.push(Cell::new(if line.passed { "PASSED" } else { "FAILED" }));
            table.add_row(Row::new(cells));
        }

        format!("\n{}\nResult: {} failed, {} passed", table, failed, passed)
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        println!("{}", self.intro);
        println!("{}", "=".repeat(self.intro.len()));
    }

    fn on_loading(&self) {
        println!("Loading data...");
    }

    fn on_table_load(&self, current: usize, total: usize, name: &str) {
        println!("  [{}/{}] {}", current, total, name);
    }

    fn on_validation_start(&self) {
        println!("\nValidating...");
    }

    fn on_table_result(&mut self, result: &ValidationResult) {
        println!("{}", self.render_table_result(result));
        self.summary.push(SummaryLine {
            name: result.table_name.clone(),
            n_rows: result.total_rows,
            statuses: result.checks().iter().map(|c| c.status.as_str()).collect(),
            passed: result.is_passed(),
        });
    }

    fn on_summary(&self, passed: usize, failed: usize) {
        println!("{}", self.render_summary(passed, failed));
    }
}
