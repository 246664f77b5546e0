//! Read-only view of the parts of a Swagger/OpenAPI document we consume.
//!
//! Definitions are kept as raw JSON values until one is requested, and only
//! `properties` with each property's `type` and `description` are ever
//! interpreted. Interpretation never fails: odd values degrade to their JSON
//! text, and anything that is not a schema object becomes an untyped,
//! undocumented property.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Marker used for a property that declares no `type`.
///
/// This is what a JSON query prints for a missing key, and it flows through
/// the identity fallback like any other unknown token.
pub const MISSING_TYPE: &str = "null";

/// Description value that is treated the same as no description at all.
const NULL_DESCRIPTION: &str = "null";

/// Ordered mapping of property name to schema, in document order.
pub type PropertyMap = IndexMap<String, PropertySchema>;

/// The `type` keyword of a property.
///
/// OpenAPI 3.1 allows a list such as `["string", "null"]`; older documents
/// use a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    Single(String),
    Many(Vec<String>),
}

impl TypeToken {
    /// Reads a `type` value; non-string tokens become their JSON text.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(TypeToken::Many(items.iter().filter_map(json_text).collect())),
            other => json_text(other).map(TypeToken::Single),
        }
    }
}

/// Text of a scalar as `jq -r` prints it; `null` has none.
fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Schema for a single property of a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySchema {
    /// The raw `type` keyword, if present.
    pub declared_type: Option<TypeToken>,
    /// Human-readable description, if present.
    pub description: Option<String>,
}

impl PropertySchema {
    /// Creates a property with the given type token and description.
    pub fn new(declared_type: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            declared_type: Some(TypeToken::Single(declared_type.into())),
            description: description.map(str::to_string),
        }
    }

    /// Interprets a property schema value.
    ///
    /// A value that is not an object (such as the boolean schema `true`)
    /// yields a property with no type and no description.
    pub fn from_value(value: &Value) -> Self {
        let Some(schema) = value.as_object() else {
            return Self::default();
        };

        Self {
            declared_type: schema.get("type").and_then(TypeToken::from_value),
            description: schema.get("description").and_then(json_text),
        }
    }

    /// Returns the single type token used for mapping.
    ///
    /// For a list of tokens the first one that is not `"null"` wins. A
    /// missing `type` yields [`MISSING_TYPE`].
    ///
    /// ```
    /// use swagger_fields::schema::PropertySchema;
    ///
    /// let prop: PropertySchema =
    ///     serde_json::from_str(r#"{"type": ["null", "integer"]}"#).unwrap();
    /// assert_eq!(prop.type_token(), "integer");
    ///
    /// assert_eq!(PropertySchema::default().type_token(), "null");
    /// ```
    pub fn type_token(&self) -> &str {
        match &self.declared_type {
            Some(TypeToken::Single(token)) => token,
            Some(TypeToken::Many(tokens)) => tokens
                .iter()
                .map(String::as_str)
                .find(|t| *t != MISSING_TYPE)
                .unwrap_or(MISSING_TYPE),
            None => MISSING_TYPE,
        }
    }

    /// Returns the description if it should be rendered as documentation.
    ///
    /// Absent, empty and the literal `"null"` are all treated as no
    /// documentation.
    pub fn documentation(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty() && *text != NULL_DESCRIPTION)
    }
}

impl<'de> Deserialize<'de> for PropertySchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_value(&value))
    }
}

/// Interprets a `properties` value, keeping document order.
///
/// Anything other than an object yields an empty map.
pub fn properties_from_value(value: &Value) -> PropertyMap {
    value
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .map(|(name, schema)| (name.clone(), PropertySchema::from_value(schema)))
                .collect()
        })
        .unwrap_or_default()
}

/// A named schema object holding a flat property map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    pub properties: PropertyMap,
}

impl Definition {
    /// Interprets a definition value; a missing `properties` is an empty map.
    pub fn from_value(value: &Value) -> Self {
        Self {
            properties: value
                .get("properties")
                .map(properties_from_value)
                .unwrap_or_default(),
        }
    }
}

/// The subset of a Swagger 2.0 or OpenAPI 3.x document that holds schemas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Swagger 2.0 location.
    #[serde(default)]
    pub definitions: IndexMap<String, Value>,
    /// OpenAPI 3.x location.
    #[serde(default)]
    pub components: Option<Components>,
}

/// OpenAPI 3.x `components` object; only `schemas` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Value>,
}

impl Document {
    /// Looks up and interprets a definition, preferring `definitions` over
    /// `components.schemas`.
    pub fn definition(&self, name: &str) -> Option<Definition> {
        self.definitions
            .get(name)
            .or_else(|| {
                self.components
                    .as_ref()
                    .and_then(|components| components.schemas.get(name))
            })
            .map(Definition::from_value)
    }

    /// All definition names in document order, Swagger 2.0 entries first.
    pub fn definition_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.keys().cloned().collect();
        if let Some(components) = &self.components {
            for name in components.schemas.keys() {
                if !self.definitions.contains_key(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn documentation_suppresses_absent_null_and_empty() {
        assert_eq!(PropertySchema::new("string", None).documentation(), None);
        assert_eq!(PropertySchema::new("string", Some("null")).documentation(), None);
        assert_eq!(PropertySchema::new("string", Some("")).documentation(), None);
    }

    #[test]
    fn documentation_keeps_real_text() {
        let prop = PropertySchema::new("string", Some("Name of the user."));
        assert_eq!(prop.documentation(), Some("Name of the user."));
    }

    #[test]
    fn json_null_description_is_absent() {
        let prop: PropertySchema =
            serde_json::from_str(r#"{"type": "string", "description": null}"#).unwrap();
        assert_eq!(prop.description, None);
        assert_eq!(prop.documentation(), None);
    }

    #[test]
    fn single_type_token() {
        let prop: PropertySchema = serde_json::from_str(r#"{"type": "boolean"}"#).unwrap();
        assert_eq!(prop.type_token(), "boolean");
    }

    #[test]
    fn type_list_skips_null() {
        let prop: PropertySchema =
            serde_json::from_str(r#"{"type": ["string", "null"]}"#).unwrap();
        assert_eq!(prop.type_token(), "string");

        let only_null: PropertySchema = serde_json::from_str(r#"{"type": ["null"]}"#).unwrap();
        assert_eq!(only_null.type_token(), MISSING_TYPE);
    }

    #[test]
    fn reference_without_type_uses_missing_marker() {
        let prop: PropertySchema =
            serde_json::from_str(r##"{"$ref": "#/definitions/User"}"##).unwrap();
        assert_eq!(prop.type_token(), MISSING_TYPE);
    }

    #[test]
    fn non_string_description_becomes_json_text() {
        let prop = PropertySchema::from_value(&json!({"type": "integer", "description": 42}));
        assert_eq!(prop.type_token(), "integer");
        assert_eq!(prop.documentation(), Some("42"));
    }

    #[test]
    fn non_string_type_becomes_raw_json_text() {
        let numeric = PropertySchema::from_value(&json!({"type": 7}));
        assert_eq!(numeric.type_token(), "7");

        let object = PropertySchema::from_value(&json!({"type": {"kind": "x"}}));
        assert_eq!(object.type_token(), r#"{"kind":"x"}"#);
    }

    #[test]
    fn boolean_schema_is_untyped_and_undocumented() {
        let prop = PropertySchema::from_value(&json!(true));
        assert_eq!(prop.type_token(), MISSING_TYPE);
        assert_eq!(prop.documentation(), None);

        let from_str: PropertySchema = serde_json::from_str("false").unwrap();
        assert_eq!(from_str, PropertySchema::default());
    }

    #[test]
    fn properties_keep_document_order() {
        let value: Value = serde_json::from_str(
            r#"{"properties": {"zeta": {"type": "string"}, "alpha": {"type": "integer"}, "mid": {}}}"#,
        )
        .unwrap();
        let def = Definition::from_value(&value);
        let names: Vec<&str> = def.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn malformed_properties_value_is_empty() {
        assert!(Definition::from_value(&json!({"properties": 5})).properties.is_empty());
        assert!(Definition::from_value(&json!(true)).properties.is_empty());
    }

    #[test]
    fn document_prefers_swagger_definitions() {
        let doc: Document = serde_json::from_str(
            r#"{
                "definitions": {"User": {"properties": {"id": {"type": "integer"}}}},
                "components": {"schemas": {
                    "User": {"properties": {"other": {"type": "string"}}},
                    "Team": {"properties": {"name": {"type": "string"}}}
                }}
            }"#,
        )
        .unwrap();

        let user = doc.definition("User").unwrap();
        assert!(user.properties.contains_key("id"));
        assert!(doc.definition("Team").is_some());
        assert!(doc.definition("Missing").is_none());
        assert_eq!(doc.definition_names(), vec!["User", "Team"]);
    }

    #[test]
    fn unrelated_malformed_definitions_do_not_fail_parsing() {
        let doc: Document = serde_json::from_str(
            r#"{
                "definitions": {
                    "User": {"properties": {"id": {"type": "integer"}}},
                    "Legacy": {"required": true, "properties": {"anything": true}},
                    "Odd": 12
                }
            }"#,
        )
        .unwrap();

        let user = doc.definition("User").unwrap();
        assert_eq!(user.properties.len(), 1);
        assert_eq!(doc.definition("Legacy").unwrap().properties.len(), 1);
        assert!(doc.definition("Odd").unwrap().properties.is_empty());
    }
}
