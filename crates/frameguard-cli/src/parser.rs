use std::path::Path;

use anyhow::{Context, Result};
use frameguard_core::Value;
use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub table: Vec<TableConfig>,
}

#[derive(Debug, Deserialize)]
pub struct TableConfig {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub column: Vec<ColumnConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    /// Declared element type; the column is part of the schema when set
    pub datatype: Option<String>,
    #[serde(default)]
    pub nullable: bool,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

/// A `min` or `max` entry. TOML integers stay integers so large bounds are
/// not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Integer(i64),
    Float(f64),
}

impl From<Bound> for Value {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Integer(v) => Value::Integer(v),
            Bound::Float(v) => Value::Float(v),
        }
    }
}

pub fn parse_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config_str(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    if config.table.is_empty() {
        return Err(ConfigError::EmptyConfig.into());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            r#"
            [[table]]
            name = "users"
            path = "data/users.csv"

            [[table.column]]
            name = "age"
            datatype = "integer"
            min = 0
            max = 120.5

            [[table.column]]
            name = "nickname"
            nullable = true
            "#,
        )
        .unwrap();

        assert_eq!(config.table.len(), 1);
        let table = &config.table[0];
        assert_eq!(table.name, "users");
        assert_eq!(table.column.len(), 2);
        assert_eq!(table.column[0].datatype.as_deref(), Some("integer"));
        assert_eq!(table.column[0].min, Some(Bound::Integer(0)));
        assert_eq!(table.column[0].max, Some(Bound::Float(120.5)));
        assert!(!table.column[0].nullable);
        assert!(table.column[1].nullable);
        assert_eq!(table.column[1].datatype, None);
    }

    #[test]
    fn test_parse_large_integer_bound() {
        let config = parse_config_str(
            "[[table]]\nname = \"t\"\npath = \"t.csv\"\n\
             [[table.column]]\nname = \"id\"\nmax = 9007199254740993",
        )
        .unwrap();
        assert_eq!(
            config.table[0].column[0].max,
            Some(Bound::Integer(9_007_199_254_740_993))
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let err = parse_config_str("").unwrap_err();
        assert_eq!(err.to_string(), "Configuration file contains no table");
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config_str("[[table]]\nname = ").is_err());
    }
}
