use serde::{Deserialize, Serialize};

/// The domain entity: a named widget with a color.
///
/// `name` is the identity. Both fields are non-empty for anything that was
/// written through the put handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Widget {
    #[serde(alias = "widgetName")]
    pub name: String,
    pub color: String,
}

impl Widget {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
