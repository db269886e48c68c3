//! Catalog item data model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog entry, decoded from the `nome`/`imagem`/... JSON shape.
///
/// Every field is plain text. Missing or `null` fields decode to an empty
/// string and non-string values decode to their JSON text, so a sloppy
/// entry still renders instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Human-readable title
    #[serde(rename = "nome", default, deserialize_with = "lenient_text")]
    pub name: String,

    /// URL or path to the picture
    #[serde(rename = "imagem", default, deserialize_with = "lenient_text")]
    pub image: String,

    /// Free-form specifications; may carry inline markup
    #[serde(rename = "especificacoes", default, deserialize_with = "lenient_text")]
    pub specifications: String,

    /// Free-form history text
    #[serde(rename = "historia", default, deserialize_with = "lenient_text")]
    pub history: String,

    /// URL with more information
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: String,
}

impl Item {
    /// Build an item from its five text fields
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        specifications: impl Into<String>,
        history: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            specifications: specifications.into(),
            history: history.into(),
            link: link.into(),
        }
    }

    /// Check whether any searchable field contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased. Only `name`, `history`
    /// and `specifications` are searched.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.history.to_lowercase().contains(needle_lower)
            || self.specifications.to_lowercase().contains(needle_lower)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod item_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_source_field_names() {
        let json = r#"{
            "imagem": "img/fusca.jpg",
            "nome": "Fusca",
            "especificacoes": "<strong>Motor:</strong> 1.3",
            "historia": "O carro do povo.",
            "link": "https://example.com/fusca"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(
            item,
            Item::new(
                "Fusca",
                "img/fusca.jpg",
                "<strong>Motor:</strong> 1.3",
                "O carro do povo.",
                "https://example.com/fusca",
            )
        );
    }

    #[test]
    fn test_missing_and_null_fields_decode_empty() {
        let item: Item = serde_json::from_str(r#"{"nome": "Opala", "historia": null}"#).unwrap();
        assert_eq!(item.name, "Opala");
        assert_eq!(item.history, "");
        assert_eq!(item.image, "");
        assert_eq!(item.link, "");
    }

    #[test]
    fn test_non_string_fields_keep_json_text() {
        let item: Item = serde_json::from_str(r#"{"nome": 1969, "historia": true}"#).unwrap();
        assert_eq!(item.name, "1969");
        assert_eq!(item.history, "true");
    }

    #[test]
    fn test_serialize_uses_source_field_names() {
        let item = Item::new("Fusca", "f.jpg", "spec", "hist", "https://x");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["nome"], "Fusca");
        assert_eq!(value["imagem"], "f.jpg");
        assert_eq!(value["especificacoes"], "spec");
        assert_eq!(value["historia"], "hist");
        assert_eq!(value["link"], "https://x");
    }

    #[test]
    fn test_matches_searchable_fields_only() {
        let item = Item::new("Maverick", "maverick-v8.jpg", "V8 302", "Ford, 1973", "https://ford");

        assert!(item.matches("maverick"));
        assert!(item.matches("v8 302"));
        assert!(item.matches("1973"));
        assert!(item.matches(""));
        // image and link are not searchable
        assert!(!item.matches("jpg"));
        assert!(!item.matches("https"));
    }
}
