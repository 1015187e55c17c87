//! Injected diagnostics sink used for operator-facing log lines.
//!
//! The [`Context`](crate::Context) accumulates warnings and errors for the final report; the sink
//! is where progress and failure details are logged while the run is in flight. A sink is chosen
//! once when the context is created and is never swapped mid-run.

use serde::Deserialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Severity of an emitted diagnostic line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fine-grained detail (sort scores and the like).
    Debug,
    /// Progress information.
    Info,
    /// Usable but suspicious data.
    #[serde(alias = "warning")]
    Warn,
    /// Failures.
    Error,
}

impl Level {
    /// Lowercase label used in console output and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Parse a level label (`debug`, `info`, `warn`/`warning`, `error`), case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for diagnostic log lines.
pub trait DiagnosticsSink {
    /// Emit one message at the given level.
    fn emit(&self, level: Level, message: &str);
}

/// Forwards every line to the `tracing` macros at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _level: Level, _message: &str) {}
}

/// Keeps emitted lines in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a [`Context`](crate::Context)
/// and inspect the lines through another.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<(Level, String)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages emitted at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
