//! `sitegen documents [<documents.yaml>|-]`

use super::publish;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{SitegenError, SitegenResult};
use crate::runtime::input::Source;
use crate::SitegenCommand;
use site_records::load_documents;
use site_render::render_documents_page;
use std::fs;

/// Renders the documents page from a file or stdin.
pub struct DocumentsCommand;

impl SitegenCommand for DocumentsCommand {
    type Options = Source;

    fn parse(args: &[String]) -> SitegenResult<Self::Options> {
        source_arg(args)
    }

    fn run(ctx: &CommandContext, source: Self::Options) -> SitegenResult<()> {
        let head = match &ctx.config().documents.head_file {
            Some(path) => {
                let path = ctx.root().join(path);
                let text = fs::read_to_string(&path).map_err(|err| {
                    SitegenError::io(format!("failed to read page head: {err}"))
                        .with_path(&path)
                        .with_hint("check `documents.head_file` in the config")
                })?;
                Some(text)
            }
            None => None,
        };

        let mut diagnostics = ctx.diagnostics();
        let raw = source
            .read_yaml(ctx.root())
            .map_err(|err| err.with_operation("load documents"))?;
        let documents = load_documents(raw, &mut diagnostics)?;
        diagnostics.bail()?;

        let page = render_documents_page(
            &documents,
            &ctx.config().documents.layout(),
            head.as_deref(),
            &mut diagnostics,
        );
        publish(&diagnostics, &page)
    }
}

/// Zero or one argument naming the documents source.
pub(crate) fn source_arg(args: &[String]) -> SitegenResult<Source> {
    match args {
        [] => Ok(Source::Stdin),
        [one] => Ok(Source::from_arg(Some(one))),
        _ => Err(SitegenError::input(format!(
            "Expected at most one argument <documents.yaml>, got {args:?}."
        ))),
    }
}
