//! Demo data for the dev server's `--in-memory` mode.

use widgets_core::env::{EnvConfig, COLOR_ATTR};
use widgets_core::widget::Widget;

use crate::storage::InMemoryStore;

/// Built-in configuration used when the dev server runs without DynamoDB.
pub fn demo_config() -> EnvConfig {
    EnvConfig {
        table_name: "widgets".to_string(),
        key_attr: "PK".to_string(),
        default_limit: 3,
        color_index_name: "color-index".to_string(),
        color_index_key: COLOR_ATTR.to_string(),
    }
}

/// Generates demo widgets spread over a handful of colors.
pub fn demo_widgets() -> Vec<Widget> {
    vec![
        Widget::new("TEST001", "red"),
        Widget::new("TEST002", "blue"),
        Widget::new("TEST003", "green"),
        Widget::new("TEST004", "purple"),
        Widget::new("FOO", "yellow"),
        Widget::new("Super Widget", "blue"),
        Widget::new("Gizmo", "blue"),
        Widget::new("Sprocket", "red"),
    ]
}

/// An in-memory store seeded with [`demo_widgets`] under [`demo_config`].
pub fn demo_store() -> InMemoryStore {
    let config = demo_config();
    InMemoryStore::from_records(
        config.key_attr.clone(),
        demo_widgets()
            .iter()
            .map(|widget| config.widget_to_record(widget)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_store_holds_every_widget() {
        let config = demo_config();
        let records = demo_store().records().await;

        assert_eq!(records.len(), demo_widgets().len());
        for record in &records {
            assert!(config.record_to_widget(record).is_ok());
        }
    }

    #[test]
    fn test_demo_widget_names_are_unique() {
        let mut names: Vec<String> = demo_widgets().into_iter().map(|w| w.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), demo_widgets().len());
    }
}
