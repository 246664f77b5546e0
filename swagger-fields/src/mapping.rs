//! Translation of JSON-Schema type tokens into Rust type names.
//!
//! Only three scalar tokens have a Rust counterpart. Every other token is
//! carried through unchanged as [`FieldType::Raw`], so the mapping is total:
//!
//! | token     | Rust type |
//! |-----------|-----------|
//! | `string`  | `String`  |
//! | `integer` | `i64`     |
//! | `boolean` | `bool`    |
//! | other     | the token |

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The Rust type a schema property maps onto.
///
/// ## Examples
///
/// ```
/// use swagger_fields::mapping::{FieldType, map_type};
///
/// assert_eq!(map_type("integer"), FieldType::Integer);
/// assert_eq!(map_type("integer").to_string(), "i64");
///
/// // Unknown tokens pass through untouched
/// assert_eq!(map_type("array"), FieldType::Raw("array".to_string()));
/// assert_eq!(map_type("array").to_string(), "array");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `string` -> `String`
    String,
    /// `integer` -> `i64`
    Integer,
    /// `boolean` -> `bool`
    Boolean,
    /// Any token without a known mapping, emitted verbatim.
    ///
    /// This covers `object`, `array`, `number` and reference names alike.
    Raw(String),
}

impl FieldType {
    /// Returns the Rust spelling of this type.
    pub fn rust_name(&self) -> &str {
        match self {
            FieldType::String => "String",
            FieldType::Integer => "i64",
            FieldType::Boolean => "bool",
            FieldType::Raw(token) => token,
        }
    }

    /// Whether the source token was one of the known scalars.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, FieldType::Raw(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// Known scalar tokens, keyed exactly as they appear in a schema.
static TYPE_TABLE: LazyLock<HashMap<&'static str, FieldType>> = LazyLock::new(|| {
    HashMap::from([
        ("string", FieldType::String),
        ("integer", FieldType::Integer),
        ("boolean", FieldType::Boolean),
    ])
});

/// Maps a declared schema type onto a [`FieldType`].
///
/// Matching is exact and case-sensitive; anything not in the table becomes
/// [`FieldType::Raw`] holding the original token.
pub fn map_type(declared_type: &str) -> FieldType {
    TYPE_TABLE
        .get(declared_type)
        .cloned()
        .unwrap_or_else(|| FieldType::Raw(declared_type.to_string()))
}
