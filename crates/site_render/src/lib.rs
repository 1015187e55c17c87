//! HTML page fragments for the lectures, roster, and documents pages.
//!
//! Renderers read normalized corpora from [`site_records`] and build strings. They never fail:
//! the [`Context`](site_records::Context) they take only collects warnings (an unknown presenter
//! id, say), and asset lookups go through an [`AssetProbe`] so pages can be rendered without a
//! checkout of the site.
//!
//! # Example
//!
//! ```rust
//! use site_records::{load_documents, parse_yaml, Context, NullSink};
//! use site_render::{render_documents_page, DocumentsSettings};
//!
//! let mut ctx = Context::with_sink(Box::new(NullSink));
//! let raw = parse_yaml(
//!     "- id: setup\n  title: Setup\n  tags: [setup]\n  desc: Start here\n  \
//!      google_docs_share_link: https://docs.google.com/document/d/abc/edit?usp=sharing\n",
//! )
//! .expect("yaml");
//! let documents = load_documents(raw, &mut ctx).expect("documents");
//!
//! let page = render_documents_page(&documents, &DocumentsSettings::default(), None, &mut ctx);
//! assert!(page.contains("## Basic Setup Documents"));
//! assert!(page.contains("media/pdfs/abc.pdf"));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod documents;
pub mod lectures;
pub mod roster;
pub mod templates;
pub mod text;

pub use assets::{AssetProbe, FsAssetProbe, KnownAssets};
pub use documents::{render_document, render_documents_page, DocumentSection, DocumentsSettings};
pub use lectures::{render_lecture, render_lectures_page};
pub use roster::{render_person, render_roster_page, RosterSection, RosterSettings};
