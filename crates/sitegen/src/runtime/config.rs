//! Typed configuration loading helpers.

use crate::runtime::error::{SitegenError, SitegenResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization; callers validate
/// the typed value afterwards.
///
/// ```rust
/// # use serde::Deserialize;
/// # use std::path::Path;
/// # use sitegen::runtime::config::ConfigLoader;
/// #[derive(Deserialize)]
/// struct ExampleConfig {
///     enabled: bool,
/// }
///
/// let loader = ConfigLoader::<ExampleConfig>::new(Path::new("/site"), "sitegen.toml");
/// assert_eq!(loader.path(), Path::new("/site/sitegen.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for `path`, resolved against `root` when relative.
    pub fn new(root: &Path, path: impl AsRef<Path>) -> Self {
        Self {
            path: root.join(path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`SitegenErrorCategory::Config`](crate::runtime::error::SitegenErrorCategory::Config).
    pub fn load(&self) -> SitegenResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            SitegenError::config(format!("failed to read {}: {err}", self.path.display()))
        })?;
        toml::from_str(&body).map_err(|err| {
            SitegenError::config(format!("failed to parse {}: {err}", self.path.display()))
        })
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::SitegenErrorCategory;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct ExampleConfig {
        value: String,
        count: u32,
    }

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "sitegen-config-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn load_reads_toml_relative_to_root() {
        let root = unique_test_root();
        fs::create_dir_all(root.join("conf")).expect("create config dir");
        fs::write(root.join("conf/site.toml"), "value = \"ok\"\ncount = 7\n").expect("write");

        let loaded = ConfigLoader::<ExampleConfig>::new(&root, "conf/site.toml")
            .load()
            .expect("load config");
        assert_eq!(
            loaded,
            ExampleConfig {
                value: "ok".into(),
                count: 7,
            }
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn absolute_paths_ignore_the_root() {
        let loader = ConfigLoader::<ExampleConfig>::new(Path::new("/site"), "/etc/sitegen.toml");
        assert_eq!(loader.path(), Path::new("/etc/sitegen.toml"));
    }

    #[test]
    fn missing_and_invalid_files_are_config_errors() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        fs::write(root.join("broken.toml"), "value = [").expect("write broken config");

        let missing = ConfigLoader::<ExampleConfig>::new(&root, "missing.toml")
            .load()
            .expect_err("missing config should fail");
        assert_eq!(missing.category, SitegenErrorCategory::Config);
        assert!(missing.to_string().contains("missing.toml"));

        let broken = ConfigLoader::<ExampleConfig>::new(&root, "broken.toml")
            .load()
            .expect_err("invalid config should fail");
        assert_eq!(broken.category, SitegenErrorCategory::Config);
        assert!(broken.to_string().contains("broken.toml"));

        let _ = fs::remove_dir_all(root);
    }
}
