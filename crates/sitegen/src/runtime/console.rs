//! Colored stderr sink for interactive runs.

use nu_ansi_term::Color;
use site_records::{DiagnosticsSink, Level};
use std::cell::RefCell;
use std::io::{self, Write};

/// Writes one line per diagnostic, colored by level, dropping lines below `min_level`.
pub struct ConsoleSink<W: Write> {
    min_level: Level,
    color: bool,
    out: RefCell<W>,
}

impl ConsoleSink<io::Stderr> {
    /// Sink writing to the process stderr.
    pub fn stderr(min_level: Level, color: bool) -> Self {
        Self::new(io::stderr(), min_level, color)
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W, min_level: Level, color: bool) -> Self {
        Self {
            min_level,
            color,
            out: RefCell::new(out),
        }
    }

    /// Consume the sink and return its writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> DiagnosticsSink for ConsoleSink<W> {
    fn emit(&self, level: Level, message: &str) {
        if level < self.min_level {
            return;
        }
        let line = format_line(level, message, self.color);
        // A closed stderr is not worth failing the run over.
        let _ = writeln!(self.out.borrow_mut(), "{line}");
    }
}

/// Render one console line: `<level>: <message>`, painted when `color` is set.
pub fn format_line(level: Level, message: &str, color: bool) -> String {
    let line = format!("{level}: {message}");
    if !color {
        return line;
    }
    let paint = match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Purple,
    };
    paint.paint(line).to_string()
}
