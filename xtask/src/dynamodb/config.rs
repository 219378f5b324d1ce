//! Table configuration types (Functional Core - pure data).

use widgets_core::env::COLOR_ATTR;

/// Widget table schema: one string key and the color index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    /// Primary key attribute holding the widget name.
    pub key_attr: String,
    pub color_index: ColorIndex,
}

/// Global Secondary Index the color report queries.
///
/// Partitioned on `color` and sorted by the table key, so widgets of one
/// color come back ordered by name. Every attribute is projected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorIndex {
    pub name: String,
    pub partition_key: String,
    pub sort_key: String,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Sets the primary key attribute, which also sorts the color index.
    pub fn with_key_attr(mut self, name: &str) -> Self {
        self.key_attr = name.to_string();
        self.color_index.sort_key = name.to_string();
        self
    }

    /// Sets the name of the color index.
    pub fn with_color_index(mut self, name: &str) -> Self {
        self.color_index.name = name.to_string();
        self
    }
}

/// Returns the default widget table configuration.
pub fn widget_table_config() -> TableConfig {
    TableConfig {
        table_name: "widgets".to_string(),
        key_attr: "PK".to_string(),
        color_index: ColorIndex {
            name: "color-index".to_string(),
            partition_key: COLOR_ATTR.to_string(),
            sort_key: "PK".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_color_index() {
        let config = widget_table_config();

        assert_eq!(config.key_attr, "PK");
        assert_eq!(config.color_index.partition_key, "color");
        assert_eq!(config.color_index.sort_key, "PK");
    }

    #[test]
    fn test_overrides_follow_through_to_index() {
        let config = widget_table_config()
            .with_table_name("testing_ddb")
            .with_key_attr("testing_ddb_pk")
            .with_color_index("testing_color_idx");

        assert_eq!(config.table_name, "testing_ddb");
        assert_eq!(config.key_attr, "testing_ddb_pk");
        assert_eq!(config.color_index.name, "testing_color_idx");
        assert_eq!(config.color_index.sort_key, "testing_ddb_pk");
    }
}
