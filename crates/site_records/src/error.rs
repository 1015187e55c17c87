//! Error types for field, record, corpus, and run-level failures.

use serde_json::Value;
use thiserror::Error;

/// A field value that cannot be normalized into its declared kind.
///
/// Fatal for the record being normalized, but not for the run: the corpus loader records it as a
/// [`Context`](crate::Context) error and moves on to the next record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent from the record.
    #[error("missing field {field}")]
    MissingField {
        /// Name of the absent field.
        field: String,
    },
    /// A list-shaped field holds something other than a list.
    #[error("Expect list of strings, got {found}")]
    NotAList {
        /// Kind of value that was found instead.
        found: &'static str,
    },
    /// A record or nested record is not a mapping.
    #[error("expected a mapping, got {found}")]
    NotAMapping {
        /// Kind of value that was found instead.
        found: &'static str,
    },
    /// A date field that no supported format can parse.
    #[error("Cannot parse date {value}")]
    InvalidDate {
        /// The raw value, rendered as JSON.
        value: String,
    },
    /// A scalar of the wrong kind.
    #[error("expected {expected}, got {found}")]
    InvalidValue {
        /// What the field accepts.
        expected: &'static str,
        /// Kind of value that was found instead.
        found: &'static str,
    },
}

/// A [`ValidationError`] together with the context path active when it was raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}:{error}", .path.join(":"))]
pub struct RecordError {
    /// Path segments (record id, field name, nested index, ...) at the point of failure.
    pub path: Vec<String>,
    /// The underlying failure.
    pub error: ValidationError,
}

impl RecordError {
    /// Attach a path to a validation failure.
    pub fn new(path: Vec<String>, error: ValidationError) -> Self {
        Self { path, error }
    }
}

/// Corpus-level failures that are not ordinary data defects.
///
/// These propagate unmodified to the caller; they are the "unexpected failure" class.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The source text is not valid YAML.
    #[error("Yaml file is invalid: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A source that must be a mapping of id to record is something else.
    #[error("Invalid content: expected a mapping of records, got {found}")]
    NotAMapping {
        /// Kind of value that was found instead.
        found: &'static str,
    },
    /// A source that must be a list of records is something else.
    #[error("Invalid content: expected a list of records, got {found}")]
    NotAList {
        /// Kind of value that was found instead.
        found: &'static str,
    },
    /// A normalized record could not be read back as its typed form.
    #[error("normalized record `{id}` has an unexpected shape: {source}")]
    Shape {
        /// Id of the offending record.
        id: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Raised by [`Context::bail`](crate::Context::bail) when any errors were recorded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Errors in the input.\n{report}")]
pub struct ValidationFailed {
    /// The full formatted error report.
    pub report: String,
}

/// Short human-readable name for the kind of a raw value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
