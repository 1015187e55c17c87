//! `sitegen.toml`: every knob of the generator, defaulting to the published site.

use serde::Deserialize;
use site_records::Level;
use site_render::{DocumentSection, DocumentsSettings, RosterSettings};
use std::path::PathBuf;

/// Top-level configuration. Every table is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `[log]`
    pub log: LogSettings,
    /// `[roster]`
    pub roster: RosterSettings,
    /// `[documents]`
    pub documents: DocumentsConfig,
    /// `[pdf]`
    pub pdf: PdfSettings,
}

/// Where diagnostic lines go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBackend {
    /// Colored lines on stderr.
    #[default]
    Console,
    /// A `tracing` subscriber formatting to stderr.
    Tracing,
}

/// `[log]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Lowest level written; `SITEGEN_LOG` overrides it.
    pub level: Level,
    /// Color console lines; `NO_COLOR` turns it off.
    pub color: bool,
    /// Console or tracing output.
    pub backend: LogBackend,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Level::Info,
            color: true,
            backend: LogBackend::Console,
        }
    }
}

/// `[documents]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// File whose trimmed contents open the documents page.
    pub head_file: Option<PathBuf>,
    /// Site-relative directory of the static PDF exports.
    pub pdf_dir: String,
    /// Listing sections in page order.
    pub sections: Vec<DocumentSection>,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        let layout = DocumentsSettings::default();
        Self {
            head_file: None,
            pdf_dir: layout.pdf_dir,
            sections: layout.sections,
        }
    }
}

impl DocumentsConfig {
    /// The renderer's view of this table.
    pub fn layout(&self) -> DocumentsSettings {
        DocumentsSettings {
            pdf_dir: self.pdf_dir.clone(),
            sections: self.sections.clone(),
        }
    }
}

/// `[pdf]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Directory the per-document PDFs are cached in.
    pub output_dir: PathBuf,
    /// Merged output file.
    pub joined: PathBuf,
    /// Export URL; `{id}` is replaced by the document id.
    pub export_url: String,
    /// Program that prints a URL's body to stdout.
    pub download_program: String,
    /// Program that concatenates PDFs (`<pdfs…> cat output <joined>`).
    pub merge_program: String,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("media/pdfs"),
            joined: PathBuf::from("joined.pdf"),
            export_url: "https://docs.google.com/document/d/{id}/export?format=pdf".to_string(),
            download_program: "curl".to_string(),
            merge_program: "pdftk".to_string(),
        }
    }
}

impl PdfSettings {
    /// Export URL for one document.
    pub fn export_url_for(&self, doc_id: &str) -> String {
        self.export_url.replace("{id}", doc_id)
    }
}
