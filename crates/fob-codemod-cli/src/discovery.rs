//! Source file discovery.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{CliError, Result};

/// Directory that is never descended into, even without a .gitignore
const NODE_MODULES: &str = "node_modules";

/// Collects the files a transform should visit.
///
/// Directories are walked recursively, honoring `.gitignore`/`.ignore`
/// files and skipping hidden entries and `node_modules`. Files named
/// directly are always included, whatever their extension.
#[derive(Debug, Clone)]
pub struct SourceWalker {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl SourceWalker {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            extensions: ["ts", "tsx", "js", "jsx"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Walk every root and return the matching files, sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::FileNotFound`] for a root that does not exist and
    /// [`CliError::Walk`] when a directory cannot be read.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for root in &self.roots {
            if root.is_file() {
                files.push(root.clone());
            } else if root.is_dir() {
                dirs.push(root.as_path());
            } else {
                return Err(CliError::FileNotFound(root.clone()));
            }
        }

        if let Some((first, rest)) = dirs.split_first() {
            let mut builder = WalkBuilder::new(first);
            for dir in rest {
                builder.add(dir);
            }

            let walker = builder
                .hidden(true)
                .git_ignore(true)
                .require_git(false)
                .filter_entry(|entry| entry.file_name() != NODE_MODULES)
                .build();

            for entry in walker {
                let entry = entry?;
                let path = entry.path();

                if entry.file_type().is_some_and(|ft| ft.is_file()) && self.should_process(path)
                {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        tracing::debug!(count = files.len(), "Discovered source files");
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}
