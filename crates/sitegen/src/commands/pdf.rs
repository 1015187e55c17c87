//! `sitegen pdf [<documents.yaml>|-]`: export every non-paper document as PDF and merge them.
//!
//! Exports already present in the output directory are reused. Whatever could be collected is
//! merged and written to stdout; if any download failed the command still fails afterwards.

use super::documents::source_arg;
use super::write_stdout;
use crate::config::PdfSettings;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{SitegenError, SitegenResult};
use crate::runtime::input::Source;
use crate::SitegenCommand;
use site_records::{load_documents, Context, Corpus, Document, Level};
use std::fs;
use std::path::{Path, PathBuf};

const INVALID_SUFFIX: &str = ".invalid-response.html";

/// Downloads and merges document PDFs.
pub struct PdfCommand;

/// One document's export.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PdfJob {
    /// Google document id.
    pub doc_id: String,
    /// Export URL.
    pub url: String,
    /// Cached PDF path.
    pub target: PathBuf,
}

impl PdfJob {
    /// Where an unusable response is kept for inspection.
    pub fn invalid_target(&self) -> PathBuf {
        let mut name = self.target.clone().into_os_string();
        name.push(INVALID_SUFFIX);
        PathBuf::from(name)
    }
}

/// Exports for every document that is not a paper, in corpus order.
pub fn plan(documents: &Corpus<Document>, settings: &PdfSettings, out_dir: &Path) -> Vec<PdfJob> {
    documents
        .iter()
        .filter(|entry| !entry.record.is_paper())
        .map(|entry| {
            let doc_id = entry.record.doc_id();
            PdfJob {
                url: settings.export_url_for(&doc_id),
                target: out_dir.join(format!("{doc_id}.pdf")),
                doc_id,
            }
        })
        .collect()
}

/// Whether a downloaded body is a PDF (`%PDF` magic).
pub fn is_pdf_payload(bytes: &[u8]) -> bool {
    bytes.get(1..4) == Some(b"PDF".as_slice())
}

impl SitegenCommand for PdfCommand {
    type Options = Source;

    fn parse(args: &[String]) -> SitegenResult<Self::Options> {
        source_arg(args)
    }

    fn run(ctx: &CommandContext, source: Self::Options) -> SitegenResult<()> {
        let settings = &ctx.config().pdf;
        let runner = ctx.process();
        runner.ensure_command(
            &settings.download_program,
            "install it or set `pdf.download_program` in the config",
        )?;
        runner.ensure_command(
            &settings.merge_program,
            "install it or set `pdf.merge_program` in the config",
        )?;

        let mut diagnostics = ctx.diagnostics();
        let raw = source
            .read_yaml(ctx.root())
            .map_err(|err| err.with_operation("load documents"))?;
        let documents = load_documents(raw, &mut diagnostics)?;
        diagnostics.bail()?;

        let out_dir = ctx.root().join(&settings.output_dir);
        fs::create_dir_all(&out_dir).map_err(|err| {
            SitegenError::io(format!("failed to create output directory: {err}"))
                .with_path(&out_dir)
        })?;

        let mut pdfs = Vec::new();
        for job in plan(&documents, settings, &out_dir) {
            if job.target.exists() || fetch(ctx, &job, &mut diagnostics)? {
                pdfs.push(job.target);
            }
        }

        if pdfs.is_empty() {
            diagnostics.emit(Level::Warn, "No PDFs to merge.");
        } else {
            let joined = ctx.root().join(&settings.joined);
            let mut args: Vec<String> = pdfs.iter().map(|p| p.display().to_string()).collect();
            args.extend(["cat".into(), "output".into(), joined.display().to_string()]);
            diagnostics.emit(Level::Debug, runner.describe(&settings.merge_program, &args));
            runner
                .run(ctx.root(), &settings.merge_program, &args)
                .map_err(|err| err.with_operation("merge PDFs"))?;

            let data = fs::read(&joined).map_err(|err| {
                SitegenError::io(format!("failed to read merged PDF: {err}")).with_path(&joined)
            })?;
            diagnostics.emit(Level::Info, format!("Writing on stdout {}", data.len()));
            write_stdout(&data)?;
        }

        if diagnostics.has_errors() {
            diagnostics.emit(Level::Error, "Could not download all files.");
        }
        diagnostics.bail()?;
        Ok(())
    }
}

/// Download one export. Returns whether a valid PDF was stored; failures are recorded under the
/// document id.
fn fetch(ctx: &CommandContext, job: &PdfJob, diagnostics: &mut Context) -> SitegenResult<bool> {
    let settings = &ctx.config().pdf;
    let args = vec!["--silent".to_string(), "--location".to_string(), job.url.clone()];
    diagnostics.emit(Level::Info, format!("Downloading {}", job.target.display()));
    diagnostics.emit(
        Level::Debug,
        ctx.process().describe(&settings.download_program, &args),
    );

    let data = match ctx
        .process()
        .capture(ctx.root(), &settings.download_program, &args)
    {
        Ok(data) => data,
        Err(err) => {
            diagnostics.emit(
                Level::Error,
                format!("Download failed for document {}: {err}", job.doc_id),
            );
            diagnostics.scoped(job.doc_id.as_str(), |d| {
                d.record_error(format!("download failed: {err}"))
            });
            return Ok(false);
        }
    };

    if is_pdf_payload(&data) {
        fs::write(&job.target, &data).map_err(|err| {
            SitegenError::io(format!("failed to write PDF: {err}")).with_path(&job.target)
        })?;
        return Ok(true);
    }

    let invalid = job.invalid_target();
    diagnostics.emit(
        Level::Error,
        format!("Invalid response for document {}", job.doc_id),
    );
    diagnostics.scoped(job.doc_id.as_str(), |d| {
        d.record_error(format!("not a PDF; response kept in {}", invalid.display()))
    });
    fs::write(&invalid, &data).map_err(|err| {
        SitegenError::io(format!("failed to keep invalid response: {err}")).with_path(&invalid)
    })?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use site_records::NullSink;

    fn documents() -> Corpus<Document> {
        let raw = site_records::parse_yaml(
            "\
- id: setup
  title: Setup
  tags: [setup]
  desc: Start here
  google_docs_share_link: https://docs.google.com/document/d/abc/edit?usp=sharing
- id: icra
  title: Duckietown
  tags: [paper]
  desc: Paper
  google_docs_share_link: https://drive.google.com/open?id=paper1
- title: Untitled
  tags: []
  desc: ''
  google_docs_share_link: https://drive.google.com/file/d/xyz/view?usp=sharing
",
        )
        .expect("yaml");
        let mut ctx = Context::with_sink(Box::new(NullSink));
        load_documents(raw, &mut ctx).expect("documents")
    }

    #[test]
    fn plan_skips_papers_and_uses_share_link_ids() {
        let jobs = plan(&documents(), &PdfSettings::default(), Path::new("out"));

        assert_eq!(
            jobs,
            vec![
                PdfJob {
                    doc_id: "abc".into(),
                    url: "https://docs.google.com/document/d/abc/export?format=pdf".into(),
                    target: PathBuf::from("out/abc.pdf"),
                },
                PdfJob {
                    doc_id: "xyz".into(),
                    url: "https://docs.google.com/document/d/xyz/export?format=pdf".into(),
                    target: PathBuf::from("out/xyz.pdf"),
                },
            ]
        );
        assert_eq!(
            jobs[0].invalid_target(),
            PathBuf::from("out/abc.pdf.invalid-response.html")
        );
    }

    #[test]
    fn pdf_payload_is_recognized_by_magic() {
        assert!(is_pdf_payload(b"%PDF-1.4\n..."));
        assert!(!is_pdf_payload(b"<!DOCTYPE html>"));
        assert!(!is_pdf_payload(b"%P"));
        assert!(!is_pdf_payload(b""));
    }
}
