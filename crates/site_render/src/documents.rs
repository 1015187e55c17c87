//! The documents page: markdown headings with one paragraph per document.

use crate::templates::{ICON_GDOC, ICON_PDF};
use crate::text::one_line;
use serde::{Deserialize, Serialize};
use site_records::{select, Context, Corpus, Document, Level, TagQuery};

/// One listing group of the documents page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    /// Markdown heading.
    pub heading: String,
    /// Documents carrying any of these tags are listed.
    #[serde(default)]
    pub tags: Vec<String>,
    /// List only documents without tags; `tags` is ignored.
    #[serde(default)]
    pub untagged: bool,
    /// Disabled sections are skipped.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl DocumentSection {
    fn tagged(heading: &str, tags: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            untagged: false,
            enabled: true,
        }
    }

    /// The selection this section lists.
    pub fn query(&self) -> TagQuery {
        if self.untagged {
            TagQuery::Untagged
        } else {
            TagQuery::Any(self.tags.clone())
        }
    }
}

/// Layout of the documents page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsSettings {
    /// Site-relative directory of the static PDF exports.
    pub pdf_dir: String,
    /// Sections in page order.
    pub sections: Vec<DocumentSection>,
}

impl Default for DocumentsSettings {
    fn default() -> Self {
        Self {
            pdf_dir: "media/pdfs".to_string(),
            sections: vec![
                DocumentSection::tagged("Basic Setup Documents", &["setup"]),
                DocumentSection::tagged("Procedures and HOWTos", &["procedure+howto"]),
                DocumentSection::tagged("The Design of Duckietown", &["design"]),
                DocumentSection::tagged(
                    "Spring 2016: Documents Specific to MIT 2.166 Students",
                    &["spring2016", "modules+labs"],
                ),
                DocumentSection::tagged("Publications", &["paper"]),
                DocumentSection {
                    heading: "Untagged documents".to_string(),
                    tags: Vec::new(),
                    untagged: true,
                    enabled: false,
                },
            ],
        }
    }
}

/// Render the documents page. `head`, when given, is trimmed and placed before the listing.
pub fn render_documents_page(
    documents: &Corpus<Document>,
    settings: &DocumentsSettings,
    head: Option<&str>,
    ctx: &mut Context,
) -> String {
    let mut s = head.map(|h| h.trim().to_string()).unwrap_or_default();
    s.push('\n');
    for section in settings.sections.iter().filter(|s| s.enabled) {
        let selected = select(documents, &section.query());
        ctx.emit(
            Level::Info,
            format!("{:?}: selected {}", section.query(), selected.len()),
        );
        s.push_str(&format!("\n\n## {}\n\n", section.heading));
        for entry in selected {
            s.push_str(&render_document(&entry.record, settings));
        }
        s.push('\n');
    }
    s.push_str("\n\n");
    s
}

/// Render one document paragraph.
pub fn render_document(document: &Document, settings: &DocumentsSettings) -> String {
    let (title, class) = if document.title.is_empty() {
        ("Missing title", "missing")
    } else {
        (document.title.as_str(), "")
    };

    let pdf_link = if document.is_paper() {
        String::new()
    } else {
        format!(
            "<span class=\"pdflink\">(<a href=\"{}/{}.pdf\">{ICON_PDF} static pdf</a>)</span>",
            settings.pdf_dir,
            document.doc_id()
        )
    };

    let desc = match one_line(&document.desc) {
        desc if desc.is_empty() => "<span class=\"missing\">Missing description</span>".to_string(),
        desc => desc,
    };

    format!(
        "\n\n<p id=\"{}\" class=\"{class}\"><a class=\"title\" href=\"{}\">{ICON_GDOC}{title}</a> {pdf_link}: {desc}</p>\n\n",
        document.id, document.google_docs_share_link
    )
}
