//! Shared process execution helpers.

use crate::runtime::error::{SitegenError, SitegenResult};
use std::path::Path;
use std::process::{Command, Stdio};

/// Shared process runner used by command modules.
///
/// Children run from a caller-provided root. Their stdout is either captured or discarded, never
/// inherited, because sitegen's own stdout carries the generated page.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a process runner.
    pub fn new() -> Self {
        Self
    }

    /// Return whether the given program is available by checking `--version`.
    pub fn command_available(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Require a command to exist.
    pub fn ensure_command(&self, program: &str, hint: &str) -> SitegenResult<()> {
        if self.command_available(program) {
            Ok(())
        } else {
            Err(SitegenError::environment(format!(
                "required command `{program}` not found"
            ))
            .with_hint(hint))
        }
    }

    /// Run a process to completion, discarding its stdout.
    ///
    /// Stderr is inherited so tool diagnostics reach the operator. Non-zero exits become
    /// [`SitegenError::process_exit`].
    pub fn run(&self, root: &Path, program: &str, args: &[String]) -> SitegenResult<()> {
        let status = Command::new(program)
            .current_dir(root)
            .args(args)
            .stdout(Stdio::null())
            .status()
            .map_err(|err| {
                SitegenError::process_launch(format!("failed to start `{program}`: {err}"))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SitegenError::process_exit(format!(
                "`{program}` exited with status {status}"
            )))
        }
    }

    /// Run a process and return everything it wrote to stdout.
    pub fn capture(&self, root: &Path, program: &str, args: &[String]) -> SitegenResult<Vec<u8>> {
        let output = Command::new(program)
            .current_dir(root)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| {
                SitegenError::process_launch(format!("failed to start `{program}`: {err}"))
            })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(SitegenError::process_exit(format!(
                "`{program}` exited with status {}",
                output.status
            )))
        }
    }

    /// Render a process invocation in a stable `+ program args` format for logging.
    pub fn describe(&self, program: &str, args: &[String]) -> String {
        if args.is_empty() {
            format!("+ {program}")
        } else {
            format!("+ {program} {}", args.join(" "))
        }
    }
}
