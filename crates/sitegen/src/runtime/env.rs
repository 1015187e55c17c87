//! Environment normalization helpers.

use site_records::Level;
use std::env;

/// Variable that overrides the configured log level.
pub const LOG_ENV: &str = "SITEGEN_LOG";

/// Shared environment helper utilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvHelper;

impl EnvHelper {
    /// Whether a `NO_COLOR` value disables colored output. Any non-empty value does.
    pub fn color_disabled(raw: Option<&str>) -> bool {
        raw.is_some_and(|value| !value.is_empty())
    }

    /// Parse a log level override; unknown labels are ignored.
    pub fn level_override(raw: Option<&str>) -> Option<Level> {
        raw.and_then(Level::parse)
    }

    /// `NO_COLOR` from the process environment.
    pub fn no_color(&self) -> bool {
        Self::color_disabled(env::var("NO_COLOR").ok().as_deref())
    }

    /// `SITEGEN_LOG` from the process environment.
    pub fn log_level(&self) -> Option<Level> {
        Self::level_override(env::var(LOG_ENV).ok().as_deref())
    }
}
