//! Diagnostics context: a path-keyed accumulator of warnings and errors.

use crate::diagnostics::{DiagnosticsSink, Level, TracingSink};
use crate::error::ValidationFailed;
use std::fmt;

const WARNINGS_HEADER: &str = "Please fix the following problems:";
const ERRORS_HEADER: &str = "You need to fix the following problems:";

/// Accumulates warnings and errors for one run, each prefixed with the path that was active when
/// it was recorded.
///
/// A context is owned by exactly one top-level run (for example one full lectures normalization)
/// and discarded afterwards. The path is a scoped stack: every [`push`](Self::push) must be
/// paired with a [`pop`](Self::pop) on all exit paths, which [`scoped`](Self::scoped) does for
/// the caller.
pub struct Context {
    path: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    sink: Box<dyn DiagnosticsSink>,
}

impl Context {
    /// Create a context that logs through [`TracingSink`].
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// Create a context that logs through the given sink.
    pub fn with_sink(sink: Box<dyn DiagnosticsSink>) -> Self {
        Self {
            path: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            sink,
        }
    }

    /// Enter a nested location (record id, field name, list index).
    pub fn push(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    /// Leave the innermost location.
    pub fn pop(&mut self) -> Option<String> {
        self.path.pop()
    }

    /// Run `f` with `segment` pushed, popping it again whatever `f` returns.
    pub fn scoped<T>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.push(segment);
        let out = f(self);
        self.pop();
        out
    }

    /// Run `f` with every segment of `segments` pushed, popping them all afterwards.
    pub fn within<T>(&mut self, segments: &[String], f: impl FnOnce(&mut Self) -> T) -> T {
        let depth = self.path.len();
        self.path.extend(segments.iter().cloned());
        let out = f(self);
        self.path.truncate(depth);
        out
    }

    /// Current path segments, outermost first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Record a non-fatal problem at the current path.
    pub fn warn(&mut self, message: impl AsRef<str>) {
        let line = self.located(message.as_ref());
        self.warnings.push(line);
    }

    /// Record a fatal problem at the current path.
    ///
    /// This never aborts anything by itself; the run stops at the next [`bail`](Self::bail).
    pub fn record_error(&mut self, message: impl AsRef<str>) {
        let line = self.located(message.as_ref());
        self.errors.push(line);
    }

    /// Whether any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Recorded warnings, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Recorded errors, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All warnings as one report for the operator.
    pub fn format_warnings(&self) -> String {
        format_report(WARNINGS_HEADER, &self.warnings)
    }

    /// All errors as one report for the operator.
    pub fn format_errors(&self) -> String {
        format_report(ERRORS_HEADER, &self.errors)
    }

    /// Abort the run if any error was recorded.
    ///
    /// The error report is logged at error level and carried by the returned [`ValidationFailed`].
    pub fn bail(&self) -> Result<(), ValidationFailed> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let report = self.format_errors();
        self.sink.emit(Level::Error, &report);
        Err(ValidationFailed { report })
    }

    /// Log a line through the sink without recording it.
    pub fn emit(&self, level: Level, message: impl AsRef<str>) {
        self.sink.emit(level, message.as_ref());
    }

    fn located(&self, message: &str) -> String {
        format!("{}:{message}", self.path.join(":"))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("path", &self.path)
            .field("warnings", &self.warnings)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

fn format_report(header: &str, lines: &[String]) -> String {
    let mut out = header.to_string();
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{MemorySink, NullSink};
    use pretty_assertions::assert_eq;

    fn quiet() -> Context {
        Context::with_sink(Box::new(NullSink))
    }

    #[test]
    fn messages_are_prefixed_with_the_active_path() {
        let mut ctx = quiet();
        ctx.push("alice");
        ctx.push("tags");
        ctx.warn("No tags specified");
        ctx.pop();
        ctx.record_error("missing field url");
        ctx.pop();

        assert_eq!(ctx.warnings(), ["alice:tags:No tags specified"]);
        assert_eq!(ctx.errors(), ["alice:missing field url"]);
    }

    #[test]
    fn popping_does_not_rewrite_recorded_messages() {
        let mut ctx = quiet();
        ctx.scoped("C01", |ctx| ctx.scoped("files", |ctx| ctx.warn("No files")));
        ctx.warn("top level");

        assert_eq!(ctx.warnings(), ["C01:files:No files", ":top level"]);
        assert!(ctx.path().is_empty());
    }

    #[test]
    fn scoped_pops_when_the_body_fails() {
        let mut ctx = quiet();
        let result: Result<(), &str> = ctx.scoped("C01", |ctx| {
            ctx.scoped("date", |_| Err::<(), _>("unparseable"))?;
            Ok(())
        });

        assert_eq!(result, Err("unparseable"));
        assert!(ctx.path().is_empty());
    }

    #[test]
    fn within_restores_the_previous_depth() {
        let mut ctx = quiet();
        ctx.push("outer");
        ctx.within(&["C01".to_string(), "files".to_string()], |ctx| {
            ctx.record_error("bad")
        });

        assert_eq!(ctx.path(), ["outer"]);
        assert_eq!(ctx.errors(), ["outer:C01:files:bad"]);
    }

    #[test]
    fn reports_list_one_message_per_line() {
        let mut ctx = quiet();
        ctx.scoped("bob", |ctx| {
            ctx.warn("No bio.");
            ctx.warn("Empty URL");
        });

        assert_eq!(
            ctx.format_warnings(),
            "Please fix the following problems:\nbob:No bio.\nbob:Empty URL"
        );
        assert_eq!(ctx.format_errors(), "You need to fix the following problems:");
    }

    #[test]
    fn bail_fails_only_when_errors_were_recorded_and_logs_the_report() {
        let sink = MemorySink::new();
        let mut ctx = Context::with_sink(Box::new(sink.clone()));
        ctx.warn("only a warning");
        assert!(ctx.bail().is_ok());
        assert!(!ctx.has_errors());

        ctx.scoped("C02", |ctx| ctx.record_error("missing field date"));
        let failed = ctx.bail().expect_err("errors recorded");

        assert!(ctx.has_errors());
        assert_eq!(
            failed.report,
            "You need to fix the following problems:\nC02:missing field date"
        );
        assert_eq!(sink.messages_at(Level::Error), vec![failed.report.clone()]);
    }
}
