//! Static per-record-type field tables and the record normalizer that applies them.

use crate::context::Context;
use crate::diagnostics::Level;
use crate::error::{RecordError, ValidationError};
use crate::normalize::FieldKind;
use serde_json::{Map, Value};

/// Whether a field may be absent from a raw record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    /// Absence is fatal for the record.
    Required,
    /// Absence is treated exactly like an explicit `null`.
    Defaulted,
    /// Absence is left alone; a present value is still normalized.
    Optional,
}

/// One row of a record schema: a field name bound to exactly one normalizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    /// Field name in the raw record.
    pub name: &'static str,
    /// Normalizer applied to the field.
    pub kind: FieldKind,
    /// Policy for an absent field.
    pub presence: Presence,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    const fn defaulted(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Defaulted,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }
}

/// The declared fields of one record type, in processing order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordSchema {
    /// Record type name used in log lines.
    pub record: &'static str,
    /// Fields in the fixed order they are normalized (and therefore reported) in.
    pub fields: &'static [FieldSpec],
}

/// People: one YAML file per person.
pub const PERSON_SCHEMA: RecordSchema = RecordSchema {
    record: "person",
    fields: &[
        FieldSpec::defaulted("order", FieldKind::Order),
        FieldSpec::required("name", FieldKind::Name),
        FieldSpec::required("position", FieldKind::Position),
        FieldSpec::required("url", FieldKind::Url),
        FieldSpec::required("bio", FieldKind::Bio),
        FieldSpec::required("tags", FieldKind::StringList),
        FieldSpec::optional("roster_note", FieldKind::Note),
    ],
};

/// Lectures: one mapping of lecture id to record.
pub const LECTURE_SCHEMA: RecordSchema = RecordSchema {
    record: "lecture",
    fields: &[
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("title", FieldKind::Title),
        FieldSpec::required("vimeo", FieldKind::StringList),
        FieldSpec::required("ready", FieldKind::Bool),
        FieldSpec::required("files", FieldKind::Files),
        FieldSpec::required("presenters", FieldKind::StringList),
    ],
};

/// Entries of a lecture's `files` list.
pub const FILE_SCHEMA: RecordSchema = RecordSchema {
    record: "file",
    fields: &[
        FieldSpec::required("desc", FieldKind::Text),
        FieldSpec::required("url", FieldKind::Url),
    ],
};

/// Documents: one list of records.
pub const DOCUMENT_SCHEMA: RecordSchema = RecordSchema {
    record: "document",
    fields: &[
        FieldSpec::defaulted("id", FieldKind::Text),
        FieldSpec::defaulted("title", FieldKind::Text),
        FieldSpec::defaulted("tags", FieldKind::StringList),
        FieldSpec::defaulted("desc", FieldKind::Text),
        FieldSpec::required("google_docs_share_link", FieldKind::Url),
    ],
};

/// Normalize `record` in place against `schema`.
///
/// Fields are visited in the schema's declared order. For each one, `record_id` and then the
/// field name are pushed onto the context path around the normalizer, so warnings name the exact
/// location. The first failing field aborts this record: the failure is logged with its full
/// path and returned to the caller, which decides whether the run continues.
pub fn normalize_record(
    record_id: &str,
    record: &mut Map<String, Value>,
    schema: &RecordSchema,
    ctx: &mut Context,
) -> Result<(), RecordError> {
    normalize_fields(record_id, record, schema.fields, ctx).map_err(|err| {
        ctx.emit(
            Level::Error,
            format!("Problem with {} {record_id}: {err}", schema.record),
        );
        err
    })
}

pub(crate) fn normalize_fields(
    record_id: &str,
    record: &mut Map<String, Value>,
    fields: &[FieldSpec],
    ctx: &mut Context,
) -> Result<(), RecordError> {
    ctx.scoped(record_id, |ctx| {
        for spec in fields {
            if !record.contains_key(spec.name) {
                match spec.presence {
                    Presence::Required => {
                        return Err(RecordError::new(
                            ctx.path().to_vec(),
                            ValidationError::MissingField {
                                field: spec.name.to_string(),
                            },
                        ))
                    }
                    Presence::Defaulted => {
                        record.insert(spec.name.to_string(), Value::Null);
                    }
                    Presence::Optional => continue,
                }
            }
            let Some(slot) = record.get_mut(spec.name) else {
                continue;
            };
            let raw = std::mem::take(slot);
            let normalized =
                ctx.scoped(spec.name, |ctx| spec.kind.normalize(spec.name, raw, ctx))?;
            *slot = normalized;
        }
        Ok(())
    })
}
