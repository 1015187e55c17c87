//! Command implementations.

pub mod check;
pub mod documents;
pub mod lectures;
pub mod pdf;
pub mod roster;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{SitegenError, SitegenResult};
use crate::runtime::input::people_sources;
use site_records::{load_people, Context, Corpus, Level, Person};
use std::io::{self, Write};

fn load_people_at(
    ctx: &CommandContext,
    path: &str,
    diagnostics: &mut Context,
) -> SitegenResult<Corpus<Person>> {
    let sources = people_sources(&ctx.root().join(path))
        .map_err(|err| err.with_operation("load people"))?;
    Ok(load_people(sources, diagnostics)?)
}

/// Abort on recorded errors, report warnings, then print `page` to stdout.
fn publish(diagnostics: &Context, page: &str) -> SitegenResult<()> {
    diagnostics.bail()?;
    if !diagnostics.warnings().is_empty() {
        diagnostics.emit(Level::Warn, diagnostics.format_warnings());
    }
    write_stdout(format!("{page}\n").as_bytes())
}

fn write_stdout(bytes: &[u8]) -> SitegenResult<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.flush())
        .map_err(|err| SitegenError::io(format!("failed to write to stdout: {err}")))
}

fn expect_args<'a>(args: &'a [String], names: &[&str]) -> SitegenResult<&'a [String]> {
    if args.len() == names.len() {
        Ok(args)
    } else {
        Err(SitegenError::input(format!(
            "Expected {} argument(s) <{}>, got {args:?}.",
            names.len(),
            names.join("> <")
        )))
    }
}
