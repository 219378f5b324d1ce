//! Environment configuration and the widget/record mapping contract.

mod config;
mod mapping;

pub use config::{
    ConfigError, EnvConfig, COLOR_INDEX_KEY_VAR, COLOR_INDEX_VAR, DEFAULT_LIMIT_VAR,
    PARTITION_KEY_VAR, TABLE_NAME_VAR,
};
pub use mapping::COLOR_ATTR;
