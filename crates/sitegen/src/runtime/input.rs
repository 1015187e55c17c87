//! Reading YAML sources from disk or stdin.

use crate::runtime::error::{SitegenError, SitegenResult};
use serde_json::Value;
use site_records::parse_yaml;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Where a command reads one YAML document from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// Standard input (`-` or no argument).
    Stdin,
    /// A file.
    File(PathBuf),
}

impl Source {
    /// Interpret an optional command-line argument; `-` and absence both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Read and parse the source, resolving files against `root`.
    pub fn read_yaml(&self, root: &Path) -> SitegenResult<Value> {
        match self {
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| SitegenError::io(format!("failed to read stdin: {err}")))?;
                parse_yaml(&text).map_err(|err| {
                    SitegenError::input(format!("Yaml input is invalid: {err}"))
                        .with_operation("read stdin")
                })
            }
            Source::File(path) => read_yaml_file(&root.join(path)),
        }
    }
}

/// Read and parse one YAML file.
pub fn read_yaml_file(path: &Path) -> SitegenResult<Value> {
    if !path.exists() {
        return Err(SitegenError::input("Could not find file").with_path(path));
    }
    let text = fs::read_to_string(path)
        .map_err(|err| SitegenError::io(format!("failed to read file: {err}")).with_path(path))?;
    parse_yaml(&text)
        .map_err(|err| SitegenError::input(format!("Yaml file is invalid: {err}")).with_path(path))
}

/// Load every person file under `path`, keyed by file stem.
///
/// `path` is either a directory, whose `*.yaml`/`*.yml` files are read in file-name order, or a
/// single YAML file describing one person.
pub fn people_sources(path: &Path) -> SitegenResult<Vec<(String, Value)>> {
    if !path.exists() {
        return Err(SitegenError::input("Could not find people")
            .with_path(path)
            .with_hint("pass a directory of per-person YAML files"));
    }
    let files = if path.is_dir() {
        yaml_files_in(path)?
    } else {
        vec![path.to_path_buf()]
    };

    files
        .into_iter()
        .map(|file| {
            let handle = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok((handle, read_yaml_file(&file)?))
        })
        .collect()
}

fn yaml_files_in(dir: &Path) -> SitegenResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| {
        SitegenError::io(format!("failed to list directory: {err}")).with_path(dir)
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext));
        if path.is_file() && is_yaml {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
