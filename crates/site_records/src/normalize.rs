//! Field normalizers: one per semantic field kind.
//!
//! Every normalizer takes the raw value (including `null`, which is never skipped) and either
//! returns the normalized value or fails. Text and flag fields never fail: whatever the data
//! holds is coerced. A normalizer warns only when it substitutes a default,
//! so running it again over its own output is silent and returns the same value.

pub mod date;

use crate::context::Context;
use crate::error::{value_kind, RecordError, ValidationError};
use crate::schema::{normalize_fields, FILE_SCHEMA};
use serde_json::Value;

/// Default roster `order` for people who do not declare one.
pub const DEFAULT_ORDER: i64 = 100;

/// Sentinel title for lectures whose title is `null`.
pub const UNTITLED: &str = "(untitled)";

/// Marker that turns a bare string into a one-element list (a single video URL, say).
const URL_MARKER: &str = "http";

/// Semantic kind of a record field; each kind owns exactly one normalizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Free text; `null` becomes `""` with a warning.
    Text,
    /// A person's position; `null` becomes `""` with a warning.
    Position,
    /// A person's biography; `null` becomes `""` with a warning.
    Bio,
    /// A lecture title; `null` becomes `"(untitled)"` with a warning.
    Title,
    /// A person's display name; `null` is kept as the "no name" sentinel.
    Name,
    /// A link; `null` becomes `""` with a warning.
    Url,
    /// Optional free text; `null` is kept without comment.
    Note,
    /// A calendar date, stored as `YYYY-MM-DD`; anything unparseable is fatal.
    Date,
    /// A flag; booleans and `null` pass through, anything else is reduced to its truthiness.
    Bool,
    /// Roster order; `null` becomes the default order.
    Order,
    /// A list of strings (tags, video URLs, presenter ids); `null` becomes `[]` with a warning.
    StringList,
    /// A list of `{desc, url}` records; `null` becomes `[]` with a warning.
    Files,
}

impl FieldKind {
    /// Normalize `value` for the field called `field`.
    ///
    /// Failures carry the context path active when they were raised, so nested failures (a file
    /// entry missing its `url`) point at the innermost location.
    pub fn normalize(
        self,
        field: &str,
        value: Value,
        ctx: &mut Context,
    ) -> Result<Value, RecordError> {
        let result = match self {
            FieldKind::Files => return normalize_files(value, ctx),
            FieldKind::Text => normalize_text(value, ctx, "empty string", ""),
            FieldKind::Position => normalize_text(value, ctx, "No position specified", ""),
            FieldKind::Bio => normalize_text(value, ctx, "No bio.", ""),
            FieldKind::Title => normalize_text(value, ctx, "untitled lecture", UNTITLED),
            FieldKind::Url => normalize_text(value, ctx, "Empty URL", ""),
            FieldKind::Name | FieldKind::Note => Ok(normalize_optional_text(value)),
            FieldKind::Date => normalize_date(value),
            FieldKind::Bool => Ok(normalize_bool(value)),
            FieldKind::Order => normalize_order(value),
            FieldKind::StringList => normalize_string_list(field, value, ctx),
        };
        result.map_err(|error| RecordError::new(ctx.path().to_vec(), error))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize_text(
    value: Value,
    ctx: &mut Context,
    missing: &str,
    default: &str,
) -> Result<Value, ValidationError> {
    if value.is_null() {
        ctx.warn(missing);
        return Ok(Value::String(default.to_string()));
    }
    Ok(normalize_optional_text(value))
}

fn normalize_optional_text(value: Value) -> Value {
    match value {
        Value::Null | Value::String(_) => value,
        other => Value::String(coerce_text(&other)),
    }
}

/// Best-effort string form: scalars as written, a list of scalars joined by spaces, anything
/// else as its JSON text.
fn coerce_text(value: &Value) -> String {
    if let Some(text) = scalar_text(value) {
        return text;
    }
    if let Value::Array(items) = value {
        let parts: Option<Vec<String>> = items.iter().map(scalar_text).collect();
        if let Some(parts) = parts {
            return parts.join(" ");
        }
    }
    value.to_string()
}

fn normalize_date(value: Value) -> Result<Value, ValidationError> {
    let parsed = value.as_str().and_then(date::parse_date);
    match parsed {
        Some(date) => Ok(Value::String(date.format("%Y-%m-%d").to_string())),
        None => Err(ValidationError::InvalidDate {
            value: value.to_string(),
        }),
    }
}

fn normalize_bool(value: Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) => value,
        other => Value::Bool(truthy(&other)),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn normalize_order(value: Value) -> Result<Value, ValidationError> {
    match value {
        Value::Null => Ok(Value::from(DEFAULT_ORDER)),
        Value::Number(n) if n.is_i64() => Ok(Value::Number(n)),
        other => Err(ValidationError::InvalidValue {
            expected: "an integer",
            found: value_kind(&other),
        }),
    }
}

fn normalize_string_list(
    field: &str,
    value: Value,
    ctx: &mut Context,
) -> Result<Value, ValidationError> {
    match value {
        Value::Null => {
            ctx.warn(format!("No {field} specified"));
            Ok(Value::Array(Vec::new()))
        }
        Value::String(s) if s.contains(URL_MARKER) => Ok(Value::Array(vec![Value::String(s)])),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                scalar_text(item)
                    .map(Value::String)
                    .ok_or(ValidationError::InvalidValue {
                        expected: "a list of strings",
                        found: value_kind(item),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(ValidationError::NotAList {
            found: value_kind(&other),
        }),
    }
}

fn normalize_files(value: Value, ctx: &mut Context) -> Result<Value, RecordError> {
    let items = match value {
        Value::Null => {
            ctx.warn("No files");
            return Ok(Value::Array(Vec::new()));
        }
        Value::Array(items) => items,
        other => {
            return Err(RecordError::new(
                ctx.path().to_vec(),
                ValidationError::NotAList {
                    found: value_kind(&other),
                },
            ))
        }
    };

    let mut files = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let mut entry = match item {
            Value::Object(map) => map,
            other => {
                let mut path = ctx.path().to_vec();
                path.push(index.to_string());
                return Err(RecordError::new(
                    path,
                    ValidationError::NotAMapping {
                        found: value_kind(&other),
                    },
                ));
            }
        };
        normalize_fields(&index.to_string(), &mut entry, FILE_SCHEMA.fields, ctx)?;
        files.push(Value::Object(entry));
    }
    Ok(Value::Array(files))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn quiet() -> Context {
        Context::with_sink(Box::new(NullSink))
    }

    fn run(kind: FieldKind, field: &str, value: Value) -> (Result<Value, RecordError>, Context) {
        let mut ctx = quiet();
        let out = ctx.scoped("rec", |ctx| {
            ctx.scoped(field, |ctx| kind.normalize(field, value, ctx))
        });
        (out, ctx)
    }

    #[test]
    fn text_defaults_null_with_a_warning_and_stringifies_scalars() {
        let (out, ctx) = run(FieldKind::Text, "desc", json!(null));
        assert_eq!(out, Ok(json!("")));
        assert_eq!(ctx.warnings(), ["rec:desc:empty string"]);

        let (out, ctx) = run(FieldKind::Text, "desc", json!(42));
        assert_eq!(out, Ok(json!("42")));
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn text_coerces_containers_instead_of_failing() {
        let (out, ctx) = run(FieldKind::Bio, "bio", json!(["line one", "line two"]));
        assert_eq!(out, Ok(json!("line one line two")));
        assert!(ctx.warnings().is_empty());

        let (out, _) = run(FieldKind::Text, "desc", json!({"en": "Hi"}));
        assert_eq!(out, Ok(json!("{\"en\":\"Hi\"}")));

        let (out, _) = run(FieldKind::Name, "name", json!([["nested"]]));
        assert_eq!(out, Ok(json!("[[\"nested\"]]")));

        let (again, ctx) = run(FieldKind::Bio, "bio", json!("line one line two"));
        assert_eq!(again, Ok(json!("line one line two")));
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn title_null_becomes_untitled_sentinel() {
        let (out, ctx) = run(FieldKind::Title, "title", json!(null));
        assert_eq!(out, Ok(json!("(untitled)")));
        assert_eq!(ctx.warnings(), ["rec:title:untitled lecture"]);

        let (out, ctx) = run(FieldKind::Title, "title", json!("Welcome"));
        assert_eq!(out, Ok(json!("Welcome")));
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn name_passes_null_through_silently() {
        let (out, ctx) = run(FieldKind::Name, "name", json!(null));
        assert_eq!(out, Ok(json!(null)));
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn person_fields_warn_with_their_own_messages() {
        let (_, ctx) = run(FieldKind::Position, "position", json!(null));
        assert_eq!(ctx.warnings(), ["rec:position:No position specified"]);
        let (_, ctx) = run(FieldKind::Bio, "bio", json!(null));
        assert_eq!(ctx.warnings(), ["rec:bio:No bio."]);
        let (out, ctx) = run(FieldKind::Url, "url", json!(null));
        assert_eq!(out, Ok(json!("")));
        assert_eq!(ctx.warnings(), ["rec:url:Empty URL"]);
    }

    #[test]
    fn date_is_normalized_to_iso_and_garbage_is_fatal() {
        let (out, _) = run(FieldKind::Date, "date", json!("Feb 3, 2016"));
        assert_eq!(out, Ok(json!("2016-02-03")));

        let (out, _) = run(FieldKind::Date, "date", json!("not-a-date"));
        let err = out.expect_err("unparseable date");
        assert_eq!(err.path, ["rec", "date"]);
        assert_eq!(err.to_string(), "rec:date:Cannot parse date \"not-a-date\"");

        let (out, _) = run(FieldKind::Date, "date", json!(null));
        assert!(out.is_err());
    }

    #[test]
    fn bool_passes_through_and_reduces_other_values_to_truthiness() {
        assert_eq!(run(FieldKind::Bool, "ready", json!(false)).0, Ok(json!(false)));
        assert_eq!(run(FieldKind::Bool, "ready", json!(null)).0, Ok(json!(null)));
        assert_eq!(run(FieldKind::Bool, "ready", json!("yes")).0, Ok(json!(true)));
        assert_eq!(run(FieldKind::Bool, "ready", json!(1)).0, Ok(json!(true)));
        assert_eq!(run(FieldKind::Bool, "ready", json!(0)).0, Ok(json!(false)));
        assert_eq!(run(FieldKind::Bool, "ready", json!("")).0, Ok(json!(false)));
        assert_eq!(run(FieldKind::Bool, "ready", json!([])).0, Ok(json!(false)));
    }

    #[test]
    fn order_defaults_null_and_keeps_integers() {
        assert_eq!(run(FieldKind::Order, "order", json!(null)).0, Ok(json!(100)));
        assert_eq!(run(FieldKind::Order, "order", json!(3)).0, Ok(json!(3)));
        assert!(run(FieldKind::Order, "order", json!(1.5)).0.is_err());
    }

    #[test]
    fn string_list_null_becomes_empty_with_exactly_one_warning() {
        let (out, ctx) = run(FieldKind::StringList, "tags", json!(null));
        assert_eq!(out, Ok(json!([])));
        assert_eq!(ctx.warnings(), ["rec:tags:No tags specified"]);
    }

    #[test]
    fn string_list_wraps_a_single_url() {
        let (out, ctx) = run(FieldKind::StringList, "vimeo", json!("https://vimeo.com/123"));
        assert_eq!(out, Ok(json!(["https://vimeo.com/123"])));
        assert!(ctx.warnings().is_empty());
    }

    #[test]
    fn string_list_rejects_non_lists() {
        let (out, _) = run(FieldKind::StringList, "tags", json!("management"));
        assert_eq!(
            out.expect_err("bare tag").error,
            ValidationError::NotAList { found: "string" }
        );
        let (out, _) = run(FieldKind::StringList, "tags", json!({"a": 1}));
        assert!(out.is_err());
        let (out, _) = run(FieldKind::StringList, "tags", json!([["nested"]]));
        assert!(out.is_err());
    }

    #[test]
    fn files_normalizes_each_entry_under_its_index() {
        let (out, ctx) = run(
            FieldKind::Files,
            "files",
            json!([
                {"desc": "Part 1 PDF", "url": "https://example.com/1.pdf"},
                {"desc": null, "url": null}
            ]),
        );
        assert_eq!(
            out,
            Ok(json!([
                {"desc": "Part 1 PDF", "url": "https://example.com/1.pdf"},
                {"desc": "", "url": ""}
            ]))
        );
        assert_eq!(
            ctx.warnings(),
            ["rec:files:1:desc:empty string", "rec:files:1:url:Empty URL"]
        );
    }

    #[test]
    fn files_null_becomes_empty_with_a_warning() {
        let (out, ctx) = run(FieldKind::Files, "files", json!(null));
        assert_eq!(out, Ok(json!([])));
        assert_eq!(ctx.warnings(), ["rec:files:No files"]);
    }

    #[test]
    fn files_entry_missing_url_fails_at_the_entry() {
        let (out, ctx) = run(FieldKind::Files, "files", json!([{"desc": "slides"}]));
        let err = out.expect_err("missing url");
        assert_eq!(err.path, ["rec", "files", "0"]);
        assert_eq!(
            err.error,
            ValidationError::MissingField {
                field: "url".into()
            }
        );
        assert!(ctx.path().is_empty());
    }

    #[test]
    fn files_entry_that_is_not_a_mapping_fails() {
        let (out, _) = run(FieldKind::Files, "files", json!(["slides.pdf"]));
        let err = out.expect_err("bare string entry");
        assert_eq!(err.path, ["rec", "files", "0"]);
        assert_eq!(err.error, ValidationError::NotAMapping { found: "string" });
    }
}
