//! Shared test fixtures for swagger-fields tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::schema::{PropertyMap, PropertySchema};

/// A small Swagger 2.0 document with one populated and one empty definition.
pub const SAMPLE_JSON: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Sample", "version": "1.0" },
  "definitions": {
    "User": {
      "type": "object",
      "properties": {
        "id": { "type": "integer", "format": "int64", "description": "Unique identifier." },
        "login": { "type": "string", "description": "The user's username.\nUnique per instance." },
        "is_admin": { "type": "boolean", "description": "null" },
        "email": { "type": "string", "description": "" },
        "teams": { "type": "array", "items": { "$ref": "#/definitions/Team" } }
      }
    },
    "Empty": { "type": "object" }
  }
}"##;

/// The `User` definition of [`SAMPLE_JSON`] as an OpenAPI 3 YAML document.
pub const SAMPLE_YAML: &str = r##"openapi: 3.0.0
info:
  title: Sample
  version: "1.0"
components:
  schemas:
    User:
      type: object
      properties:
        id:
          type: integer
          format: int64
          description: Unique identifier.
        login:
          type: string
          description: "The user's username.\nUnique per instance."
        is_admin:
          type: boolean
          description: "null"
        email:
          type: string
          description: ""
        teams:
          type: array
          items:
            $ref: "#/components/schemas/Team"
"##;

/// A document whose `User` definition carries odd property values, next to
/// definitions that are not valid schemas at all.
pub const IRREGULAR_JSON: &str = r#"{
  "definitions": {
    "User": {
      "properties": {
        "id": { "type": "integer", "description": "Unique identifier." },
        "age": { "type": "integer", "description": 42 },
        "anything": true,
        "code": { "type": 7 }
      }
    },
    "Legacy": { "required": true, "properties": { "flag": true } },
    "Broken": 12
  }
}"#;

/// Writes `content` to `file_name` inside a fresh temp directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
pub fn write_document(file_name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write document");
    (dir, path)
}

/// Builds a property map from `(name, type, description)` triples, in order.
pub fn make_properties(entries: &[(&str, &str, Option<&str>)]) -> PropertyMap {
    entries
        .iter()
        .map(|(name, ty, desc)| (name.to_string(), PropertySchema::new(*ty, *desc)))
        .collect()
}
