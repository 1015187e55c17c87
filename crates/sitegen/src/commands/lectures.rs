//! `sitegen lectures <people-dir> <lectures.yaml>`

use super::{expect_args, load_people_at, publish};
use crate::runtime::context::CommandContext;
use crate::runtime::error::SitegenResult;
use crate::runtime::input::read_yaml_file;
use crate::SitegenCommand;
use site_records::load_lectures;
use site_render::render_lectures_page;
use std::path::PathBuf;

/// Renders the lectures page.
pub struct LecturesCommand;

/// Parsed `lectures` arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LecturesOptions {
    /// People directory or file.
    pub people: String,
    /// Lectures YAML file.
    pub lectures: PathBuf,
}

impl SitegenCommand for LecturesCommand {
    type Options = LecturesOptions;

    fn parse(args: &[String]) -> SitegenResult<Self::Options> {
        let args = expect_args(args, &["people-dir", "lectures.yaml"])?;
        Ok(LecturesOptions {
            people: args[0].clone(),
            lectures: PathBuf::from(&args[1]),
        })
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> SitegenResult<()> {
        let mut diagnostics = ctx.diagnostics();
        let people = load_people_at(ctx, &options.people, &mut diagnostics)?;
        let raw = read_yaml_file(&ctx.root().join(&options.lectures))
            .map_err(|err| err.with_operation("load lectures"))?;
        let lectures = load_lectures(raw, &mut diagnostics)?;
        diagnostics.bail()?;

        let page = render_lectures_page(&lectures, &people, &mut diagnostics);
        publish(&diagnostics, &page)
    }
}
