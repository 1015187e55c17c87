//! Corpus loading: normalize every record of a source and keep the ones that survive.

use crate::context::Context;
use crate::diagnostics::Level;
use crate::error::{value_kind, CorpusError};
use crate::model::{Document, Lecture, Person};
use crate::schema::{normalize_record, RecordSchema, DOCUMENT_SCHEMA, LECTURE_SCHEMA, PERSON_SCHEMA};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// One record of a corpus with its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<T> {
    /// Record id (person handle, lecture key, document id).
    pub id: String,
    /// The normalized record.
    pub record: T,
}

/// The normalized records of one type, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus<T> {
    entries: Vec<Entry<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for Corpus<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Corpus<T> {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Lookup by id keeps resolving to the first record with that id.
    pub fn push(&mut self, id: impl Into<String>, record: T) {
        let id = id.into();
        self.index.entry(id.clone()).or_insert(self.entries.len());
        self.entries.push(Entry { id, record });
    }

    /// Look a record up by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.entries[i].record)
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterate entries in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for Corpus<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (id, record) in iter {
            corpus.push(id, record);
        }
        corpus
    }
}

impl<'a, T> IntoIterator for &'a Corpus<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse YAML text into the value model shared by every layer.
pub fn parse_yaml(text: &str) -> Result<Value, CorpusError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Load people from `(handle, raw record)` pairs, one per source file.
pub fn load_people<I>(sources: I, ctx: &mut Context) -> Result<Corpus<Person>, CorpusError>
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut corpus = Corpus::new();
    for (handle, raw) in sources {
        ctx.emit(Level::Info, format!("loading person {handle}"));
        if let Some(person) = load_entry(&handle, raw, &PERSON_SCHEMA, ctx)? {
            corpus.push(handle, person);
        }
    }
    Ok(corpus)
}

/// Load lectures from one mapping of lecture id to record.
pub fn load_lectures(raw: Value, ctx: &mut Context) -> Result<Corpus<Lecture>, CorpusError> {
    let Value::Object(records) = raw else {
        return Err(CorpusError::NotAMapping {
            found: value_kind(&raw),
        });
    };
    let mut corpus = Corpus::new();
    for (id, raw) in records {
        if let Some(lecture) = load_entry(&id, raw, &LECTURE_SCHEMA, ctx)? {
            corpus.push(id, lecture);
        }
    }
    ctx.emit(Level::Info, format!("lectures loaded: {}", corpus.len()));
    Ok(corpus)
}

/// Load documents from one list of records.
///
/// A document is addressed by its `id` when that is a string, otherwise by `#<index>`. Documents
/// without an id take the one derived from their sharing link.
pub fn load_documents(raw: Value, ctx: &mut Context) -> Result<Corpus<Document>, CorpusError> {
    let Value::Array(records) = raw else {
        return Err(CorpusError::NotAList {
            found: value_kind(&raw),
        });
    };
    let mut corpus = Corpus::new();
    for (index, raw) in records.into_iter().enumerate() {
        let key = match raw.get("id").and_then(Value::as_str) {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => format!("#{index}"),
        };
        let Some(mut document) = load_entry::<Document>(&key, raw, &DOCUMENT_SCHEMA, ctx)? else {
            continue;
        };
        if document.id.trim().is_empty() {
            document.id = document.doc_id();
        }
        if corpus.contains(&document.id) {
            ctx.scoped(key.as_str(), |ctx| {
                ctx.warn(format!("duplicate document id {}", document.id))
            });
        }
        corpus.push(document.id.clone(), document);
    }
    ctx.emit(Level::Info, format!("documents loaded: {}", corpus.len()));
    Ok(corpus)
}

fn load_entry<T: DeserializeOwned>(
    id: &str,
    raw: Value,
    schema: &RecordSchema,
    ctx: &mut Context,
) -> Result<Option<T>, CorpusError> {
    let mut record = match raw {
        Value::Object(record) => record,
        other => {
            let message = format!("expected a mapping, got {}", value_kind(&other));
            ctx.emit(Level::Error, format!("Problem with {} {id}: {message}", schema.record));
            ctx.scoped(id, |ctx| ctx.record_error(message));
            return Ok(None);
        }
    };
    if let Err(err) = normalize_record(id, &mut record, schema, ctx) {
        ctx.within(&err.path, |ctx| ctx.record_error(err.error.to_string()));
        return Ok(None);
    }
    serde_json::from_value(Value::Object(record))
        .map(Some)
        .map_err(|source| CorpusError::Shape {
            id: id.to_string(),
            source,
        })
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

    fn lecture(date: &str) -> Value {
        json!({
            "date": date,
            "title": "Intro",
            "vimeo": ["https://vimeo.com/1"],
            "ready": true,
            "files": [],
            "presenters": ["censi"],
        })
    }

    #[test]
    fn bad_record_is_recorded_and_excluded_while_others_load() {
        let mut ctx = quiet();
        let raw = json!({
            "C01_intro": lecture("Feb 3, 2016"),
            "C02_broken": lecture("not-a-date"),
            "C03_autonomy": lecture("Feb 5, 2016"),
        });

        let corpus = load_lectures(raw, &mut ctx).expect("load");

        let ids: Vec<_> = corpus.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["C01_intro", "C03_autonomy"]);
        assert_eq!(
            ctx.errors(),
            ["C02_broken:date:Cannot parse date \"not-a-date\""]
        );
        assert!(ctx.bail().is_err());
    }

    #[test]
    fn every_broken_record_is_reported_not_just_the_first() {
        let mut ctx = quiet();
        let raw = json!({
            "a": {"title": "no date"},
            "b": "not a mapping",
            "c": lecture("nope"),
        });

        let corpus = load_lectures(raw, &mut ctx).expect("load");

        assert!(corpus.is_empty());
        assert_eq!(
            ctx.errors(),
            [
                "a:missing field date",
                "b:expected a mapping, got string",
                "c:date:Cannot parse date \"nope\"",
            ]
        );
    }

    #[test]
    fn top_level_shape_errors_are_corpus_errors() {
        let mut ctx = quiet();
        assert!(matches!(
            load_lectures(json!(["x"]), &mut ctx),
            Err(CorpusError::NotAMapping { found: "list" })
        ));
        assert!(matches!(
            load_documents(json!({"a": 1}), &mut ctx),
            Err(CorpusError::NotAList { found: "mapping" })
        ));
        assert!(!ctx.has_errors());
    }

    #[test]
    fn people_keep_source_order_and_support_lookup() {
        let mut ctx = quiet();
        let person = |name: &str| {
            json!({"name": name, "position": "", "url": "", "bio": "", "tags": []})
        };
        let corpus = load_people(
            vec![
                ("zed".to_string(), person("Zed Alpha")),
                ("amy".to_string(), person("Amy Zulu")),
            ],
            &mut ctx,
        )
        .expect("load");

        let ids: Vec<_> = corpus.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["zed", "amy"]);
        assert_eq!(
            corpus.get("amy").and_then(|p| p.name.as_deref()),
            Some("Amy Zulu")
        );
        assert_eq!(corpus.get("amy").map(|p| p.order), Some(100));
        assert!(corpus.get("nobody").is_none());
    }

    #[test]
    fn documents_without_id_use_the_share_link_id() {
        let mut ctx = quiet();
        let raw = json!([
            {"google_docs_share_link": "https://docs.google.com/document/d/abc123/edit?usp=sharing"},
            {"id": "setup", "title": "Setup", "tags": ["setup"], "desc": "How to",
             "google_docs_share_link": "https://drive.google.com/open?id=zz"},
            {"title": "broken"},
        ]);

        let corpus = load_documents(raw, &mut ctx).expect("load");

        let ids: Vec<_> = corpus.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["abc123", "setup"]);
        assert_eq!(ctx.errors(), ["#2:missing field google_docs_share_link"]);
        assert!(ctx
            .warnings()
            .iter()
            .any(|w| w == "#0:id:empty string"));
    }

    #[test]
    fn parse_yaml_reads_mappings_and_reports_syntax_errors() {
        let value = parse_yaml("C01:\n  title: Intro\n  date: Feb 3, 2016\n").expect("yaml");
        assert_eq!(value["C01"]["date"], json!("Feb 3, 2016"));
        assert!(matches!(
            parse_yaml("a: [unterminated"),
            Err(CorpusError::Yaml(_))
        ));
    }
}
