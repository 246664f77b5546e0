//! Rendering of struct field declarations from a property map.
//!
//! Each property becomes one [`FieldBlock`]: zero or more `///` doc lines
//! followed by a single `name: Option<Type>,` line. Blocks are produced
//! lazily and strictly in property order.
//!
//! ## Example
//!
//! ```
//! use swagger_fields::emit::render_fields;
//! use swagger_fields::schema::{PropertyMap, PropertySchema};
//!
//! let mut props = PropertyMap::new();
//! props.insert("id".into(), PropertySchema::new("integer", Some("Unique identifier.")));
//! props.insert("notes".into(), PropertySchema::new("string", None));
//!
//! assert_eq!(
//!     render_fields(&props),
//!     "/// Unique identifier.\nid: Option<i64>,\nnotes: Option<String>,\n"
//! );
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::mapping::{FieldType, map_type};
use crate::schema::{PropertyMap, PropertySchema};

/// Prefix for every documentation line.
pub const DOC_MARKER: &str = "///";

/// The rendered form of a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlock<'a> {
    pub name: &'a str,
    pub field_type: FieldType,
    /// Fully prefixed doc lines, without line terminators.
    pub doc_lines: Vec<String>,
}

impl<'a> FieldBlock<'a> {
    /// Builds the block for one property, independent of any other.
    pub fn from_property(name: &'a str, schema: &PropertySchema) -> Self {
        Self {
            name,
            field_type: map_type(schema.type_token()),
            doc_lines: schema.documentation().map(format_doc).unwrap_or_default(),
        }
    }

    /// The field declaration line, e.g. `id: Option<i64>,`.
    pub fn declaration(&self) -> String {
        format!("{}: Option<{}>,", self.name, self.field_type)
    }
}

impl fmt::Display for FieldBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.doc_lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", self.declaration())
    }
}

/// Prefixes every line of `text` with [`DOC_MARKER`] and one space.
///
/// Blank lines inside the text are kept, so the output has exactly as many
/// entries as `text.lines()`.
pub fn format_doc(text: &str) -> Vec<String> {
    text.lines().map(|line| format!("{DOC_MARKER} {line}")).collect()
}

/// Lazily renders each property of `properties`, in order.
pub fn emit_fields(properties: &PropertyMap) -> impl Iterator<Item = FieldBlock<'_>> {
    properties.iter().map(|(name, schema)| {
        let block = FieldBlock::from_property(name, schema);
        debug!(
            property = %name,
            field_type = %block.field_type,
            doc_lines = block.doc_lines.len(),
            "Emitting field"
        );
        block
    })
}

/// Streams all field blocks to `writer`.
pub fn write_fields<W: Write>(writer: &mut W, properties: &PropertyMap) -> io::Result<()> {
    for block in emit_fields(properties) {
        write!(writer, "{block}")?;
    }
    writer.flush()
}

/// Renders all field blocks into a single string.
pub fn render_fields(properties: &PropertyMap) -> String {
    emit_fields(properties).map(|block| block.to_string()).collect()
}
