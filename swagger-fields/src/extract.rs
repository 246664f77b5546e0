//! Extraction of a definition's property map from a document.
//!
//! Two extractors are provided:
//!
//! - [`DocumentExtractor`] parses the whole document in-process with serde
//! - [`JqExtractor`] delegates the lookup to the external `jq` program
//!
//! Both return properties in the order they appear in the document.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::{FieldGenError, Result};
use crate::schema::{Document, PropertyMap, properties_from_value};

/// Source of definitions and their property maps.
pub trait SchemaExtractor {
    /// Returns the ordered property map of the named definition.
    fn properties(&self, definition: &str) -> Result<PropertyMap>;

    /// Returns all definition names in document order.
    fn definitions(&self) -> Result<Vec<String>>;
}

/// Input format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Extracts definitions from a document parsed in memory.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    document: Document,
}

impl DocumentExtractor {
    /// Reads and parses the document at `path`.
    #[instrument]
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FieldGenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match DocumentFormat::from_path(path) {
            DocumentFormat::Json => Self::from_json_str(&content),
            DocumentFormat::Yaml => Self::from_yaml_str(&content),
        }
    }

    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(content)?;
        Ok(Self::from_document(document))
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: Document = serde_yaml::from_str(content)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        debug!(
            definitions = document.definition_names().len(),
            "Loaded document"
        );
        Self { document }
    }
}

impl SchemaExtractor for DocumentExtractor {
    #[instrument(skip(self))]
    fn properties(&self, definition: &str) -> Result<PropertyMap> {
        let found = self
            .document
            .definition(definition)
            .ok_or_else(|| FieldGenError::DefinitionNotFound(definition.to_string()))?;

        debug!(properties = found.properties.len(), "Extracted definition");
        Ok(found.properties)
    }

    fn definitions(&self) -> Result<Vec<String>> {
        Ok(self.document.definition_names())
    }
}

/// Query returning a definition's properties, or `null` when it does not exist.
const PROPERTIES_QUERY: &str = "(.definitions[$name] // .components.schemas[$name]) \
    | if . == null then null else (.properties // {}) end";

/// Query returning every definition name in document order.
const NAMES_QUERY: &str =
    "[(.definitions // {} | keys_unsorted[]), (.components.schemas // {} | keys_unsorted[])]";

/// Extracts definitions by running `jq` against a document on disk.
///
/// jq preserves key order in its output, so the returned map follows the
/// document.
#[derive(Debug, Clone)]
pub struct JqExtractor {
    program: String,
    document: PathBuf,
}

impl JqExtractor {
    /// Uses the `jq` program found on `PATH`.
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self::with_program("jq", document)
    }

    /// Uses a specific program name or path instead of `jq`.
    pub fn with_program(program: impl Into<String>, document: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            document: document.into(),
        }
    }

    /// Runs a query and returns its stdout.
    #[instrument(skip(self, query), fields(program = %self.program, document = %self.document.display()))]
    fn run(&self, query: &str, name: &str) -> Result<String> {
        let program = which::which(&self.program).map_err(|e| {
            FieldGenError::QueryToolUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            }
        })?;

        let output = Command::new(&program)
            .args(["-c", "--arg", "name", name, query])
            .arg(&self.document)
            .output()
            .map_err(|e| FieldGenError::QueryToolUnavailable {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(FieldGenError::QueryFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = stdout.len(), "Query completed");
        Ok(stdout)
    }
}

impl SchemaExtractor for JqExtractor {
    fn properties(&self, definition: &str) -> Result<PropertyMap> {
        let stdout = self.run(PROPERTIES_QUERY, definition)?;
        let properties: Option<Value> = serde_json::from_str(&stdout)?;
        properties
            .as_ref()
            .map(properties_from_value)
            .ok_or_else(|| FieldGenError::DefinitionNotFound(definition.to_string()))
    }

    fn definitions(&self) -> Result<Vec<String>> {
        let stdout = self.run(NAMES_QUERY, "")?;
        let names: Vec<String> = serde_json::from_str(&stdout)?;

        // A name present in both locations is listed once, at its first position.
        let unique: IndexSet<String> = names.into_iter().collect();
        Ok(unique.into_iter().collect())
    }
}
