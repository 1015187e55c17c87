//! Top-level CLI parsing and help output.

use crate::runtime::error::{SitegenError, SitegenResult};
use std::path::PathBuf;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "sitegen.toml";

/// Top-level `sitegen` commands, each carrying its remaining arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Lectures(Vec<String>),
    Roster(Vec<String>),
    Documents(Vec<String>),
    Pdf(Vec<String>),
    Check(Vec<String>),
    Help,
}

/// A parsed command line: global options plus the selected command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    /// Explicit `--config <path>`; `None` means [`DEFAULT_CONFIG`] if it exists.
    pub config: Option<PathBuf>,
    pub command: TopLevelCommand,
}

/// Parse raw command-line arguments.
pub fn parse(args: Vec<String>) -> SitegenResult<Invocation> {
    let mut config = None;
    let mut rest = args.as_slice();
    while let Some(first) = rest.first() {
        match first.as_str() {
            "--config" => {
                let path = rest
                    .get(1)
                    .ok_or_else(|| SitegenError::input("missing value for --config"))?;
                config = Some(PathBuf::from(path));
                rest = &rest[2..];
            }
            other => match other.strip_prefix("--config=") {
                Some(path) => {
                    config = Some(PathBuf::from(path));
                    rest = &rest[1..];
                }
                None => break,
            },
        }
    }

    let Some((cmd, tail)) = rest.split_first() else {
        return Ok(Invocation {
            config,
            command: TopLevelCommand::Help,
        });
    };
    let tail = tail.to_vec();
    let command = match cmd.as_str() {
        "lectures" => TopLevelCommand::Lectures(tail),
        "roster" => TopLevelCommand::Roster(tail),
        "documents" => TopLevelCommand::Documents(tail),
        "pdf" => TopLevelCommand::Pdf(tail),
        "check" => TopLevelCommand::Check(tail),
        "help" | "--help" | "-h" => TopLevelCommand::Help,
        other => {
            return Err(SitegenError::input(format!("unknown sitegen command: {other}"))
                .with_hint("run `sitegen help` for the command list"))
        }
    };
    Ok(Invocation { config, command })
}

/// Print the top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: sitegen [--config <file>] <command> [args]\n\
         \n\
         Commands:\n\
           lectures <people-dir> <lectures.yaml>   Print the lectures page\n\
           roster <people-dir>                     Print the people roster\n\
           documents [<documents.yaml>|-]          Print the documents page\n\
           pdf [<documents.yaml>|-]                Download document PDFs and print them merged\n\
           check <people-dir> [--lectures <file>] [--documents <file>] [--json]\n\
                                                   Validate sources without rendering\n\
         \n\
         Environment:\n\
           SITEGEN_LOG   Log level override (debug|info|warn|error)\n\
           NO_COLOR      Disable colored diagnostics\n"
    );
}
