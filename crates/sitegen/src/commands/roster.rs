//! `sitegen roster <people-dir>`

use super::{expect_args, load_people_at, publish};
use crate::runtime::context::CommandContext;
use crate::runtime::error::SitegenResult;
use crate::SitegenCommand;
use site_render::{render_roster_page, FsAssetProbe};

/// Renders the roster page. Photos are looked up relative to the working directory.
pub struct RosterCommand;

impl SitegenCommand for RosterCommand {
    /// The people directory or file.
    type Options = String;

    fn parse(args: &[String]) -> SitegenResult<Self::Options> {
        let args = expect_args(args, &["people-dir"])?;
        Ok(args[0].clone())
    }

    fn run(ctx: &CommandContext, people: Self::Options) -> SitegenResult<()> {
        let mut diagnostics = ctx.diagnostics();
        let people = load_people_at(ctx, &people, &mut diagnostics)?;
        diagnostics.bail()?;

        let assets = FsAssetProbe::new(ctx.root());
        let page = render_roster_page(&people, &ctx.config().roster, &assets, &mut diagnostics);
        publish(&diagnostics, &page)
    }
}
