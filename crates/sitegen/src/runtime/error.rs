//! Structured sitegen error types.

use site_records::{CorpusError, ValidationFailed};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Stable error categories for sitegen commands.
///
/// Only [`Validation`](SitegenErrorCategory::Validation) has its own exit status; every other
/// category is an unexpected failure from the operator's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SitegenErrorCategory {
    /// Invalid or unreadable configuration.
    Config,
    /// Missing local prerequisites (a download or merge program).
    Environment,
    /// Failure to spawn a child process.
    ProcessLaunch,
    /// Child process exited unsuccessfully.
    ProcessExit,
    /// The data was read but is not valid; the report has already been logged.
    Validation,
    /// Bad command-line arguments, missing input files, or malformed YAML.
    Input,
    /// Filesystem or general I/O failure.
    Io,
}

/// Structured sitegen error with contextual metadata.
///
/// The formatted display output is CLI-friendly. Optional `operation`, `target`, and `hint`
/// fields can be attached as the error propagates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SitegenError {
    /// High-level error category.
    pub category: SitegenErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for sitegen internals.
pub type SitegenResult<T> = Result<T, SitegenError>;

impl SitegenError {
    /// Create an error with the given category and message.
    pub fn new(category: SitegenErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::Config, message)
    }

    /// Create an environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::Environment, message)
    }

    /// Create a process launch error.
    pub fn process_launch(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::ProcessLaunch, message)
    }

    /// Create a process exit error.
    pub fn process_exit(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::ProcessExit, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::Validation, message)
    }

    /// Create an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::Input, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(SitegenErrorCategory::Io, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Process exit status for this error: `2` for validation failures, `1` otherwise.
    pub fn exit_status(&self) -> u8 {
        match self.category {
            SitegenErrorCategory::Validation => 2,
            _ => 1,
        }
    }
}

impl Display for SitegenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [target: {target}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for SitegenError {}

impl From<std::io::Error> for SitegenError {
    fn from(value: std::io::Error) -> Self {
        SitegenError::io(value.to_string())
    }
}

impl From<CorpusError> for SitegenError {
    fn from(value: CorpusError) -> Self {
        SitegenError::input(value.to_string())
    }
}

impl From<ValidationFailed> for SitegenError {
    fn from(_: ValidationFailed) -> Self {
        // The report itself was already logged by `Context::bail`.
        SitegenError::validation("Errors in the input.")
    }
}
