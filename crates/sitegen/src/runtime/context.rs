//! Shared command context passed into commands.

use crate::config::{LogBackend, SiteConfig};
use crate::runtime::console::ConsoleSink;
use crate::runtime::env::EnvHelper;
use crate::runtime::error::{SitegenError, SitegenResult};
use crate::runtime::process::ProcessRunner;
use site_records::{Context, Level};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shared execution context for sitegen commands.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
    config: SiteConfig,
    process: ProcessRunner,
    level: Level,
    color: bool,
}

impl CommandContext {
    /// Create a context rooted at the current directory.
    ///
    /// The effective log level and color choice are fixed here, and the `tracing` subscriber is
    /// installed when that backend is configured.
    pub fn new(config: SiteConfig) -> SitegenResult<Self> {
        let root = std::env::current_dir().map_err(|err| {
            SitegenError::environment(format!("cannot resolve the working directory: {err}"))
        })?;
        Ok(Self::with_root(root, config, EnvHelper))
    }

    /// Create a context rooted at `root`.
    pub fn with_root(root: PathBuf, config: SiteConfig, env: EnvHelper) -> Self {
        let level = env.log_level().unwrap_or(config.log.level);
        let color = config.log.color && !env.no_color();
        if config.log.backend == LogBackend::Tracing {
            init_tracing(level);
        }
        Self {
            root,
            config,
            process: ProcessRunner::new(),
            level,
            color,
        }
    }

    /// Directory relative paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loaded configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Shared process runner.
    pub fn process(&self) -> &ProcessRunner {
        &self.process
    }

    /// A fresh diagnostics context for one run, logging through the configured backend.
    pub fn diagnostics(&self) -> Context {
        match self.config.log.backend {
            LogBackend::Console => {
                Context::with_sink(Box::new(ConsoleSink::stderr(self.level, self.color)))
            }
            LogBackend::Tracing => Context::new(),
        }
    }
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::try_new(level.as_str()).unwrap_or_else(|_| EnvFilter::new("info"));
    // A second context in the same process keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
