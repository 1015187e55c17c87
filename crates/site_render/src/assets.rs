//! Lookups for static assets the pages link to.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Answers whether a site-relative asset path exists.
pub trait AssetProbe {
    /// Whether `relative` (for example `media/staff/alice.jpg`) exists.
    fn exists(&self, relative: &str) -> bool;
}

/// Probes a checkout of the site on disk.
#[derive(Clone, Debug)]
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    /// Probe paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProbe for FsAssetProbe {
    fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }
}

/// A fixed set of known assets.
#[derive(Clone, Debug, Default)]
pub struct KnownAssets(BTreeSet<String>);

impl KnownAssets {
    /// Known assets from a list of site-relative paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }
}

impl AssetProbe for KnownAssets {
    fn exists(&self, relative: &str) -> bool {
        self.0.contains(relative)
    }
}
