use serde::{Deserialize, Serialize};

/// One entry of the feed, as it appears in the source JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub body: String,
}

impl Item {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Serialized object form, e.g. `{"title":"A","body":"B"}`.
    pub fn to_json(&self) -> String {
        // Two string fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_keeps_field_order() {
        let item = Item::new("A", "B");
        assert_eq!(item.to_json(), r#"{"title":"A","body":"B"}"#);
    }
}
