use std::env;

use thiserror::Error;

/// Table identity.
pub const TABLE_NAME_VAR: &str = "DynamoName";
/// Primary-key attribute name.
pub const PARTITION_KEY_VAR: &str = "DynamoPartitionKey";
/// Default page size.
pub const DEFAULT_LIMIT_VAR: &str = "DynamoDefaultLimit";
/// Secondary index used by the color query.
pub const COLOR_INDEX_VAR: &str = "DynamoIndexColor";
/// Key attribute of the color index.
pub const COLOR_INDEX_KEY_VAR: &str = "DynamoIndexColorKey";

/// Errors raised while resolving configuration. All of them are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("Invalid default page size '{value}': expected a positive integer")]
    InvalidPageSize { value: String },
}

/// Store configuration shared by every handler.
///
/// Resolved once per process and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub table_name: String,
    /// Attribute holding the widget name.
    pub key_attr: String,
    /// Page size used when a caller does not ask for one.
    pub default_limit: u32,
    pub color_index_name: String,
    pub color_index_key: String,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables (all required):
    /// - `DynamoName` - table name
    /// - `DynamoPartitionKey` - primary-key attribute name
    /// - `DynamoDefaultLimit` - default page size, a positive integer
    /// - `DynamoIndexColor` - color index name
    /// - `DynamoIndexColorKey` - color index key attribute
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let table_name = required(TABLE_NAME_VAR)?;
        let key_attr = required(PARTITION_KEY_VAR)?;
        let default_limit = parse_page_size(&required(DEFAULT_LIMIT_VAR)?)?;
        let color_index_name = required(COLOR_INDEX_VAR)?;
        let color_index_key = required(COLOR_INDEX_KEY_VAR)?;

        Ok(Self {
            table_name,
            key_attr,
            default_limit,
            color_index_name,
            color_index_key,
        })
    }
}

fn parse_page_size(value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::InvalidPageSize {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn test_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            (TABLE_NAME_VAR, "testing_ddb".to_string()),
            (PARTITION_KEY_VAR, "testing_ddb_pk".to_string()),
            (DEFAULT_LIMIT_VAR, "1".to_string()),
            (COLOR_INDEX_VAR, "testing_color_idx".to_string()),
            (COLOR_INDEX_KEY_VAR, "color".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<EnvConfig, ConfigError> {
        EnvConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_loads_all_values() {
        let config = load(&test_vars()).unwrap();

        assert_eq!(config.table_name, "testing_ddb");
        assert_eq!(config.key_attr, "testing_ddb_pk");
        assert_eq!(config.default_limit, 1);
        assert_eq!(config.color_index_name, "testing_color_idx");
        assert_eq!(config.color_index_key, "color");
    }

    #[test]
    fn test_each_missing_variable_is_reported() {
        for var in [
            TABLE_NAME_VAR,
            PARTITION_KEY_VAR,
            DEFAULT_LIMIT_VAR,
            COLOR_INDEX_VAR,
            COLOR_INDEX_KEY_VAR,
        ] {
            let mut vars = test_vars();
            vars.remove(var);

            assert_eq!(load(&vars), Err(ConfigError::Missing { var }));
        }
    }

    #[test]
    fn test_blank_variable_counts_as_missing() {
        let mut vars = test_vars();
        vars.insert(TABLE_NAME_VAR, "  ".to_string());

        assert_eq!(
            load(&vars),
            Err(ConfigError::Missing {
                var: TABLE_NAME_VAR
            })
        );
    }

    #[test]
    fn test_rejects_invalid_page_sizes() {
        for value in ["0", "-1", "ten"] {
            let mut vars = test_vars();
            vars.insert(DEFAULT_LIMIT_VAR, value.to_string());

            assert_eq!(
                load(&vars),
                Err(ConfigError::InvalidPageSize {
                    value: value.to_string()
                })
            );
        }
    }
}
