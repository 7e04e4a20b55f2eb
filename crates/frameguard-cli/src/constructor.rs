use std::collections::HashSet;

use frameguard_core::{ColumnType, ValidationConfig, Value};

use crate::{errors::ConfigError, parser::TableConfig};

/// Build the validation rules of a configured table.
///
/// Columns with a `datatype` form the schema in file order, `nullable`
/// columns form the allow-list and `min`/`max` become range bounds.
pub fn construct_validation_config(table: &TableConfig) -> Result<ValidationConfig, ConfigError> {
    let mut seen = HashSet::new();
    let mut builder = ValidationConfig::builder();

    for column in &table.column {
        if !seen.insert(column.name.as_str()) {
            return Err(ConfigError::DuplicateColumn {
                column_name: column.name.clone(),
            });
        }

        if let Some(datatype) = &column.datatype {
            let column_type = datatype.parse::<ColumnType>().map_err(|_| {
                ConfigError::UnknownDatatype {
                    datatype: datatype.clone(),
                    column_name: column.name.clone(),
                }
            })?;
            builder = builder.with_column_type(column.name.clone(), column_type);
        }

        if column.nullable {
            builder = builder.allow_null(column.name.clone());
        }

        let min = column.min.map(Value::from);
        let max = column.max.map(Value::from);
        for (side, bound) in [("min", min), ("max", max)] {
            if let Some(Value::Float(v)) = bound {
                if !v.is_finite() {
                    return Err(ConfigError::InvalidBounds {
                        column_name: column.name.clone(),
                        reason: format!("{} {} is not a finite number", side, v),
                    });
                }
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::InvalidBounds {
                    column_name: column.name.clone(),
                    reason: format!("min {} is greater than max {}", min, max),
                });
            }
        }
        if let Some(min) = min {
            builder = builder.min(column.name.clone(), min);
        }
        if let Some(max) = max {
            builder = builder.max(column.name.clone(), max);
        }
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use frameguard_core::Bounds;

    use super::*;
    use crate::parser::parse_config_str;

    fn table_config(columns: &str) -> TableConfig {
        let config = parse_config_str(&format!(
            "[[table]]\nname = \"users\"\npath = \"users.csv\"\n{}",
            columns
        ))
        .unwrap();
        config.table.into_iter().next().unwrap()
    }

    #[test]
    fn test_construct_config() {
        let table = table_config(
            r#"
            [[table.column]]
            name = "age"
            datatype = "integer"
            min = 0
            max = 120

            [[table.column]]
            name = "name"
            datatype = "string"
            nullable = true

            [[table.column]]
            name = "score"
            max = 1.0
            "#,
        );
        let config = construct_validation_config(&table).unwrap();

        assert_eq!(
            config.schema().iter().collect::<Vec<_>>(),
            vec![("age", ColumnType::Integer), ("name", ColumnType::String)]
        );
        assert!(config.allow_null().allows("name"));
        assert!(!config.allow_null().allows("age"));
        assert_eq!(config.ranges().get("age"), Some(&Bounds::between(0, 120)));
        assert_eq!(config.ranges().get("score"), Some(&Bounds::at_most(1.0)));
        assert_eq!(config.ranges().get("name"), None);
    }

    #[test]
    fn test_unknown_datatype() {
        let table = table_config("[[table.column]]\nname = \"age\"\ndatatype = \"int128\"");
        let err = construct_validation_config(&table).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDatatype { .. }));
    }

    #[test]
    fn test_invalid_bounds() {
        let table = table_config("[[table.column]]\nname = \"age\"\nmin = 10\nmax = 1");
        let err = construct_validation_config(&table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid bounds for column 'age': min 10 is greater than max 1"
        );
    }

    #[test]
    fn test_non_finite_bounds() {
        let table = table_config("[[table.column]]\nname = \"score\"\nmin = nan\nmax = 1.0");
        let err = construct_validation_config(&table).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid bounds for column 'score': min NaN is not a finite number"
        );

        let table = table_config("[[table.column]]\nname = \"score\"\nmax = inf");
        let err = construct_validation_config(&table).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));
    }

    #[test]
    fn test_large_integer_bounds_kept_exact() {
        let table = table_config(
            "[[table.column]]\nname = \"id\"\nmin = 9007199254740993\nmax = 9007199254740993",
        );
        let config = construct_validation_config(&table).unwrap();
        assert_eq!(
            config.ranges().get("id").and_then(|b| b.min),
            Some(Value::Integer(9_007_199_254_740_993))
        );

        let table = table_config(
            "[[table.column]]\nname = \"id\"\nmin = 9007199254740993\nmax = 9007199254740992",
        );
        assert!(construct_validation_config(&table).is_err());
    }

    #[test]
    fn test_duplicate_column() {
        let table = table_config(
            "[[table.column]]\nname = \"age\"\n[[table.column]]\nname = \"age\"\nnullable = true",
        );
        let err = construct_validation_config(&table).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateColumn { .. }));
    }
}
