//! Command-line generator for the course website's lectures, roster, and documents pages.
//!
//! The crate is a small CLI layer over [`site_records`] (loading and validation) and
//! [`site_render`] (HTML output). Command modules own argument parsing and the order of
//! load, bail, render, publish; [`runtime`] owns configuration, diagnostics output, input
//! reading, and external processes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod runtime;

use crate::cli::{Invocation, TopLevelCommand, DEFAULT_CONFIG};
use crate::commands::check::CheckCommand;
use crate::commands::documents::DocumentsCommand;
use crate::commands::lectures::LecturesCommand;
use crate::commands::pdf::PdfCommand;
use crate::commands::roster::RosterCommand;
use crate::config::SiteConfig;
use crate::runtime::config::ConfigLoader;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{SitegenError, SitegenResult};
use std::path::Path;
use std::process::ExitCode;

/// Shared contract for top-level sitegen commands.
///
/// [`SitegenCommand::parse`] only translates raw arguments into typed options; all reading,
/// rendering, and printing happens in [`SitegenCommand::run`].
pub trait SitegenCommand {
    /// Typed options produced by argument parsing.
    type Options;

    /// Parse command-line arguments into typed options.
    fn parse(args: &[String]) -> SitegenResult<Self::Options>;

    /// Execute the command.
    fn run(ctx: &CommandContext, options: Self::Options) -> SitegenResult<()>;
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] under `root` is used when
/// present and the built-in defaults otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> SitegenResult<SiteConfig> {
    match explicit {
        Some(path) => ConfigLoader::<SiteConfig>::new(root, path).load(),
        None => {
            let loader = ConfigLoader::<SiteConfig>::new(root, DEFAULT_CONFIG);
            if loader.path().exists() {
                loader.load()
            } else {
                Ok(SiteConfig::default())
            }
        }
    }
}

/// Run `sitegen` with the current process arguments.
pub fn execute_from_env() -> SitegenResult<()> {
    let Invocation { config, command } = cli::parse(std::env::args().skip(1).collect())?;
    if command == TopLevelCommand::Help {
        cli::print_usage();
        return Ok(());
    }

    let cwd = std::env::current_dir().map_err(|err| {
        SitegenError::environment(format!("cannot resolve the working directory: {err}"))
    })?;
    let ctx = CommandContext::new(load_config(&cwd, config.as_deref())?)?;
    dispatch(&ctx, command)
}

/// Run one parsed command in `ctx`.
pub fn dispatch(ctx: &CommandContext, command: TopLevelCommand) -> SitegenResult<()> {
    match command {
        TopLevelCommand::Lectures(args) => {
            LecturesCommand::run(ctx, LecturesCommand::parse(&args)?)
        }
        TopLevelCommand::Roster(args) => RosterCommand::run(ctx, RosterCommand::parse(&args)?),
        TopLevelCommand::Documents(args) => {
            DocumentsCommand::run(ctx, DocumentsCommand::parse(&args)?)
        }
        TopLevelCommand::Pdf(args) => PdfCommand::run(ctx, PdfCommand::parse(&args)?),
        TopLevelCommand::Check(args) => CheckCommand::run(ctx, CheckCommand::parse(&args)?),
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Print a failure to stderr and map it to the process exit code: `2` when the input did not
/// validate, `1` for anything else.
pub fn exit_code(result: SitegenResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_status())
        }
    }
}
