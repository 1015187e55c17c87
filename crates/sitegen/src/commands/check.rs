//! `sitegen check <people-dir> [--lectures <file>] [--documents <file>] [--json]`
//!
//! Normalizes every given source without publishing anything. Lectures are also rendered (and
//! the output discarded) so presenter cross-references are checked too.

use super::{load_people_at, write_stdout};
use crate::runtime::context::CommandContext;
use crate::runtime::error::{SitegenError, SitegenResult};
use crate::runtime::input::read_yaml_file;
use crate::SitegenCommand;
use serde::Serialize;
use site_records::{load_documents, load_lectures, Context, Level};
use site_render::render_lectures_page;
use std::path::PathBuf;

/// Validates sources and reports diagnostics.
pub struct CheckCommand;

/// Parsed `check` arguments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckOptions {
    /// People directory or file.
    pub people: String,
    /// Lectures YAML file.
    pub lectures: Option<PathBuf>,
    /// Documents YAML file.
    pub documents: Option<PathBuf>,
    /// Print the diagnostics as JSON on stdout.
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    warnings: &'a [String],
    errors: &'a [String],
}

impl SitegenCommand for CheckCommand {
    type Options = CheckOptions;

    fn parse(args: &[String]) -> SitegenResult<Self::Options> {
        let mut options = CheckOptions::default();
        let mut people = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--lectures" => options.lectures = Some(flag_value(&mut iter, arg)?),
                "--documents" => options.documents = Some(flag_value(&mut iter, arg)?),
                "--json" => options.json = true,
                other if other.starts_with("--") => {
                    return Err(SitegenError::input(format!("unknown check option: {other}")))
                }
                other if people.is_none() => people = Some(other.to_string()),
                other => {
                    return Err(SitegenError::input(format!(
                        "unexpected argument: {other}"
                    )))
                }
            }
        }
        options.people = people.ok_or_else(|| {
            SitegenError::input("missing <people-dir>").with_hint("sitegen check <people-dir>")
        })?;
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> SitegenResult<()> {
        let mut diagnostics = ctx.diagnostics();
        let people = load_people_at(ctx, &options.people, &mut diagnostics)?;

        if let Some(path) = &options.lectures {
            let raw = read_yaml_file(&ctx.root().join(path))
                .map_err(|err| err.with_operation("load lectures"))?;
            let lectures = load_lectures(raw, &mut diagnostics)?;
            render_lectures_page(&lectures, &people, &mut diagnostics);
        }
        if let Some(path) = &options.documents {
            let raw = read_yaml_file(&ctx.root().join(path))
                .map_err(|err| err.with_operation("load documents"))?;
            load_documents(raw, &mut diagnostics)?;
        }

        report(&diagnostics, options.json)?;
        diagnostics.bail()?;
        Ok(())
    }
}

fn flag_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> SitegenResult<PathBuf> {
    iter.next()
        .map(PathBuf::from)
        .ok_or_else(|| SitegenError::input(format!("missing value for {flag}")))
}

fn report(diagnostics: &Context, json: bool) -> SitegenResult<()> {
    if json {
        let summary = Summary {
            warnings: diagnostics.warnings(),
            errors: diagnostics.errors(),
        };
        let mut body = serde_json::to_string_pretty(&summary)
            .map_err(|err| SitegenError::io(format!("failed to encode summary: {err}")))?;
        body.push('\n');
        return write_stdout(body.as_bytes());
    }
    if !diagnostics.warnings().is_empty() {
        diagnostics.emit(Level::Warn, diagnostics.format_warnings());
    }
    diagnostics.emit(
        Level::Info,
        format!(
            "{} warning(s), {} error(s)",
            diagnostics.warnings().len(),
            diagnostics.errors().len()
        ),
    );
    Ok(())
}
