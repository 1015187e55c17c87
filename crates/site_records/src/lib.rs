//! Record normalization and contextual diagnostics for hand-maintained site data.
//!
//! People, lectures, and documents arrive as loosely-structured YAML. This crate turns each raw
//! record into a normalized record whose fields are present and of the declared kind, while
//! accumulating warnings (defaults that were substituted) and errors (records that could not be
//! normalized) in a [`Context`] instead of stopping at the first defect.
//!
//! The layers, leaves first:
//!
//! - [`context`]: the diagnostics accumulator keyed by a nested path.
//! - [`normalize`]: one normalizer per [`FieldKind`].
//! - [`schema`]: static per-record-type field tables and [`normalize_record`].
//! - [`corpus`]: loads a whole source into a typed [`Corpus`].
//! - [`select`]: tag selection and roster ordering over a corpus.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod corpus;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod normalize;
pub mod schema;
pub mod select;

pub use context::Context;
pub use corpus::{load_documents, load_lectures, load_people, parse_yaml, Corpus, Entry};
pub use diagnostics::{DiagnosticsSink, Level, MemorySink, NullSink, TracingSink};
pub use error::{CorpusError, RecordError, ValidationError, ValidationFailed};
pub use model::{document_id, Document, Lecture, LectureFile, Person};
pub use normalize::{FieldKind, DEFAULT_ORDER, UNTITLED};
pub use schema::{
    normalize_record, FieldSpec, Presence, RecordSchema, DOCUMENT_SCHEMA, FILE_SCHEMA,
    LECTURE_SCHEMA, PERSON_SCHEMA,
};
pub use select::{missing_count, order_roster, roster_sort_key, select, TagQuery, Tagged};
