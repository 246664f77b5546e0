//! Swagger/OpenAPI definition to Rust field generator.
//!
//! This crate reads one named definition from a Swagger 2.0 or OpenAPI 3.x
//! document and emits the field declarations of an equivalent Rust struct.
//! Every field is wrapped in `Option`, scalar types are mapped onto Rust
//! primitives, and descriptions become `///` doc comments.
//!
//! ## Modules
//!
//! - [`mapping`] - Schema type token to Rust type translation
//! - [`schema`] - Document, definition and property model
//! - [`extract`] - Locating a definition's properties (in-process or via `jq`)
//! - [`emit`] - Rendering property maps as field declarations
//! - [`errors`] - Error types for extraction
//!
//! ## Example Usage
//!
//! ```
//! use swagger_fields::emit::render_fields;
//! use swagger_fields::extract::{DocumentExtractor, SchemaExtractor};
//!
//! let extractor = DocumentExtractor::from_json_str(r#"{
//!     "definitions": {
//!         "Label": {
//!             "properties": {
//!                 "id": { "type": "integer", "description": "Unique identifier." },
//!                 "exclusive": { "type": "boolean" },
//!                 "color": { "type": "string", "description": null }
//!             }
//!         }
//!     }
//! }"#).unwrap();
//!
//! let properties = extractor.properties("Label").unwrap();
//! assert_eq!(
//!     render_fields(&properties),
//!     "/// Unique identifier.\n\
//!      id: Option<i64>,\n\
//!      exclusive: Option<bool>,\n\
//!      color: Option<String>,\n"
//! );
//! ```
//!
//! ## Generated Output
//!
//! Output is meant to be pasted into a hand-written struct:
//!
//! ```text
//! /// Unique identifier.
//! id: Option<i64>,
//! tags: Option<array>,
//! ```

pub mod emit;
pub mod errors;
pub mod extract;
pub mod mapping;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_utils;

pub use emit::{FieldBlock, emit_fields, render_fields, write_fields};
pub use errors::{FieldGenError, Result};
pub use extract::{DocumentExtractor, JqExtractor, SchemaExtractor};
pub use mapping::{FieldType, map_type};
pub use schema::{Definition, PropertyMap, PropertySchema};
