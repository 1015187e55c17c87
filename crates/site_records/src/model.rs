//! Typed views of normalized records.
//!
//! These are read back from a normalized mapping with `serde`; normalization guarantees the
//! shape, so a failure here is a bug rather than a data defect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SHARE_LINK_PREFIXES: &[&str] = &[
    "https://docs.google.com/document/d/",
    "https://drive.google.com/file/d/",
    "https://drive.google.com/open?id=",
];
const SHARE_LINK_SUFFIXES: &[&str] = &["/edit?usp=sharing", "/view?usp=sharing"];

/// A member of the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name; `None` when the person has not filled it in.
    pub name: Option<String>,
    /// Role or title.
    pub position: String,
    /// Personal page; empty when unknown.
    pub url: String,
    /// Short biography; may be empty.
    pub bio: String,
    /// Roster groups this person belongs to.
    pub tags: Vec<String>,
    /// Primary roster sort key; lower sorts first.
    pub order: i64,
    /// Extra line shown under the position.
    #[serde(default)]
    pub roster_note: Option<String>,
}

/// A supporting file attached to a lecture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureFile {
    /// Link text.
    pub desc: String,
    /// Link target.
    pub url: String,
}

/// A recorded lecture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    /// Day the lecture was given.
    pub date: NaiveDate,
    /// Title, or `"(untitled)"`.
    pub title: String,
    /// Vimeo page URLs.
    pub vimeo: Vec<String>,
    /// Whether the lecture is ready for publishing; `None` reads as not ready.
    pub ready: Option<bool>,
    /// Slides and other materials.
    pub files: Vec<LectureFile>,
    /// Person ids, resolved against the people corpus only when rendering.
    pub presenters: Vec<String>,
}

impl Lecture {
    /// Whether the lecture is marked ready.
    pub fn is_ready(&self) -> bool {
        self.ready.unwrap_or(false)
    }
}

/// A shared Google document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Anchor id on the published page.
    pub id: String,
    /// Title; may be empty.
    pub title: String,
    /// Listing groups.
    pub tags: Vec<String>,
    /// Description; may be empty.
    pub desc: String,
    /// Google Docs or Drive sharing link.
    pub google_docs_share_link: String,
}

impl Document {
    /// Google document id extracted from the sharing link.
    pub fn doc_id(&self) -> String {
        document_id(&self.google_docs_share_link)
    }

    /// Whether the document is a publication (no static PDF is produced for those).
    pub fn is_paper(&self) -> bool {
        self.tags.iter().any(|t| t == "paper")
    }
}

/// Extract the document id from a Google Docs or Drive sharing link.
///
/// Links in other shapes are returned unchanged apart from the known prefixes and suffixes.
pub fn document_id(share_link: &str) -> String {
    let mut id = share_link.to_string();
    for prefix in SHARE_LINK_PREFIXES {
        id = id.replace(prefix, "");
    }
    for suffix in SHARE_LINK_SUFFIXES {
        id = id.replace(suffix, "");
    }
    id
}
