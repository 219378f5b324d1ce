//! Conversions between the wire-format widget and the store-format record.
//!
//! The primary-key attribute name comes from configuration, so the store
//! schema can change without touching handler logic.

use std::collections::HashMap;

use crate::storage::{Record, StoreError};
use crate::widget::Widget;

use super::config::EnvConfig;

/// Record attribute holding the widget color.
pub const COLOR_ATTR: &str = "color";

impl EnvConfig {
    /// Converts a widget to its store record.
    pub fn widget_to_record(&self, widget: &Widget) -> Record {
        HashMap::from([
            (self.key_attr.clone(), widget.name.clone()),
            (COLOR_ATTR.to_string(), widget.color.clone()),
        ])
    }

    /// Converts a store record to a widget.
    pub fn record_to_widget(&self, record: &Record) -> Result<Widget, StoreError> {
        Ok(Widget {
            name: get_attr(record, &self.key_attr)?,
            color: get_attr(record, COLOR_ATTR)?,
        })
    }

    /// Attributes a scan needs to rebuild widgets.
    pub fn widget_projection(&self) -> [String; 2] {
        [self.key_attr.clone(), COLOR_ATTR.to_string()]
    }
}

fn get_attr(record: &Record, attr: &str) -> Result<String, StoreError> {
    record
        .get(attr)
        .cloned()
        .ok_or_else(|| StoreError::InvalidData(format!("Missing attribute: {attr}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EnvConfig {
        EnvConfig {
            table_name: "testing_ddb".to_string(),
            key_attr: "testing_ddb_pk".to_string(),
            default_limit: 1,
            color_index_name: "testing_color_idx".to_string(),
            color_index_key: "color".to_string(),
        }
    }

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_widget_to_record() {
        let record = config().widget_to_record(&Widget::new("Super Widget", "Red"));

        assert_eq!(
            record,
            self::record(&[("testing_ddb_pk", "Super Widget"), ("color", "Red")])
        );
    }

    #[test]
    fn test_record_to_widget() {
        let widget = config()
            .record_to_widget(&record(&[("testing_ddb_pk", "Super Widget"), ("color", "Red")]))
            .unwrap();

        assert_eq!(widget, Widget::new("Super Widget", "Red"));
    }

    #[test]
    fn test_mapping_is_lossless() {
        let config = config();
        let widget = Widget::new("TEST001", "blue");

        let restored = config
            .record_to_widget(&config.widget_to_record(&widget))
            .unwrap();

        assert_eq!(restored, widget);
    }

    #[test]
    fn test_record_to_widget_ignores_extra_attributes() {
        let widget = config()
            .record_to_widget(&record(&[
                ("testing_ddb_pk", "TEST001"),
                ("color", "blue"),
                ("updatedAt", "2024-01-01"),
            ]))
            .unwrap();

        assert_eq!(widget, Widget::new("TEST001", "blue"));
    }

    #[test]
    fn test_record_to_widget_missing_attributes() {
        let config = config();

        let no_key = config.record_to_widget(&record(&[("color", "blue")]));
        assert_eq!(
            no_key,
            Err(StoreError::InvalidData(
                "Missing attribute: testing_ddb_pk".to_string()
            ))
        );

        let no_color = config.record_to_widget(&record(&[("testing_ddb_pk", "TEST001")]));
        assert!(matches!(no_color, Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_widget_projection() {
        assert_eq!(
            config().widget_projection(),
            ["testing_ddb_pk".to_string(), "color".to_string()]
        );
    }
}
