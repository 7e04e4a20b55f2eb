use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use frameguard_core::readers::{read_table, ReaderConfig};
use frameguard_core::{Table, Validator};
use frameguard_reports::{JsonFormatter, Reporter, StdOutFormatter};
use tracing::{debug, info, warn};

use crate::{
    constructor::construct_validation_config,
    errors::ConfigError,
    parser::{parse_config, Config},
    writer::{resolve_file_path, write_report},
    Args, OutputFormat,
};

/// Run the validation described by `args`. Returns whether every table passed.
pub fn run(args: &Args) -> Result<bool> {
    let config = parse_config(&args.config)?;
    let version = env!("CARGO_PKG_VERSION").to_string();

    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version);
            validate_tables(&config, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version);
            let all_passed = validate_tables(&config, &mut formatter)?;

            let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
            let output_path = resolve_file_path(args.path.as_deref(), &timestamp)?;
            let json = formatter
                .to_json()
                .context("Failed to serialize JSON report")?;
            write_report(&output_path, &json)?;
            info!(path = %output_path.display(), "JSON report written");

            Ok(all_passed)
        }
    }
}

/// Load every configured table, then validate them in configuration order.
pub fn validate_tables<R: Reporter>(config: &Config, reporter: &mut R) -> Result<bool> {
    reporter.on_start();
    reporter.on_loading();

    let reader_config = ReaderConfig::default();
    let n_table = config.table.len();
    let mut loaded: Vec<(&str, Validator, Table)> = Vec::with_capacity(n_table);

    for (i, t) in config.table.iter().enumerate() {
        reporter.on_table_load(i + 1, n_table, &t.name);

        let validation_config = construct_validation_config(t)
            .with_context(|| format!("Failed to parse table: '{}'", t.name))?;
        if !Path::new(&t.path).exists() {
            return Err(ConfigError::FileNotFound {
                table_path: t.path.clone(),
            }
            .into());
        }
        let table = read_table(&t.path, &reader_config)
            .with_context(|| format!("Failed to read table '{}' from {}", t.name, t.path))?;
        debug!(
            table = %t.name,
            rows = table.num_rows(),
            columns = table.num_columns(),
            "table loaded"
        );

        loaded.push((t.name.as_str(), Validator::new(validation_config), table));
    }

    reporter.on_validation_start();
    let (mut passed, mut failed) = (0usize, 0usize);
    for (name, validator, table) in &loaded {
        debug!(table = %name, rules = ?validator.rule_names(), "validating table");
        let result = validator.evaluate(name, table);
        match result.failure() {
            None => {
                info!(table = %name, "validation passed");
                passed += 1;
            }
            Some(error) => {
                warn!(
                    table = %name,
                    kind = %error.kind(),
                    columns = ?error.columns(),
                    "validation failed"
                );
                failed += 1;
            }
        }
        reporter.on_table_result(&result);
    }

    reporter.on_summary(passed, failed);
    Ok(failed == 0)
}
