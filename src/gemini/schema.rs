//! Gemini structured-output schemas.
//!
//! The API speaks its own schema dialect, an OpenAPI subset with uppercase
//! type names. Only the pieces the study-content schema needs are modelled.

use std::collections::BTreeMap;

use serde::Serialize;

/// Gemini schema type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
}

/// One node of a Gemini response schema.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            properties: BTreeMap::new(),
            items: None,
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::leaf(SchemaType::Integer)
    }

    pub fn array_of(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    /// An object node; every listed property name in `required` must also be
    /// a key of `properties`.
    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|name| name.to_string()).collect(),
            ..Self::leaf(SchemaType::Object)
        }
    }
}

/// The schema the model must fill in: a speed block with a similar
/// multiple-choice question, plus five free-text study fields.
pub fn study_content_schema() -> Schema {
    let similar = Schema::object(
        vec![
            ("question", Schema::string()),
            ("options", Schema::array_of(Schema::string())),
            ("correctIndex", Schema::integer()),
        ],
        &["question", "options", "correctIndex"],
    );

    let speed = Schema::object(
        vec![("answer", Schema::string()), ("similar", similar)],
        &["answer", "similar"],
    );

    Schema::object(
        vec![
            ("speed", speed),
            ("socratic", Schema::string()),
            ("notebooklm", Schema::string()),
            ("perplexity", Schema::string()),
            ("tools", Schema::string()),
            ("mermaid", Schema::string()),
        ],
        &[
            "speed",
            "socratic",
            "notebooklm",
            "perplexity",
            "tools",
            "mermaid",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn type_tags_serialize_uppercase() {
        assert_eq!(
            serde_json::to_value(Schema::string()).unwrap(),
            json!({"type": "STRING"})
        );
        assert_eq!(
            serde_json::to_value(Schema::array_of(Schema::integer())).unwrap(),
            json!({"type": "ARRAY", "items": {"type": "INTEGER"}})
        );
    }

    #[test]
    fn study_schema_matches_the_contract() {
        let schema = serde_json::to_value(study_content_schema()).unwrap();

        assert_eq!(schema.pointer("/type"), Some(&json!("OBJECT")));
        assert_eq!(
            schema.pointer("/properties/speed/properties/similar/properties/correctIndex/type"),
            Some(&json!("INTEGER"))
        );
        assert_eq!(
            schema.pointer("/properties/speed/properties/similar/properties/options/items/type"),
            Some(&json!("STRING"))
        );
        assert_eq!(
            schema.pointer("/properties/speed/required"),
            Some(&json!(["answer", "similar"]))
        );
        assert_eq!(
            schema.pointer("/required"),
            Some(&json!([
                "speed",
                "socratic",
                "notebooklm",
                "perplexity",
                "tools",
                "mermaid"
            ]))
        );
    }

    #[test]
    fn empty_collections_stay_off_the_wire() {
        let leaf = serde_json::to_value(Schema::string()).unwrap();
        let Value::Object(map) = leaf else {
            panic!("schema must serialize to an object");
        };

        assert_eq!(map.len(), 1);
        assert!(map.contains_key("type"));
    }
}
