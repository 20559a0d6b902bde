//! Tree walker: lazily discovers candidate source files under a root directory.

use crate::error::{handle_path_error, walk_error};
use crate::patterns::Pattern;
use anyhow::Result;
use ignore::WalkBuilder;
use log::debug;
use std::path::{Path, PathBuf};

/// Depth-first walker that prunes one directory name and keeps files by suffix.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    pub(crate) root: PathBuf,
    pub(crate) extension: String,
    pub(crate) excluded_dir: String,
    pub(crate) respect_gitignore: bool,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: Pattern::default_extension(),
            excluded_dir: Pattern::default_excluded_dir(),
            respect_gitignore: false,
        }
    }

    /// File-name suffix a file must end with to be yielded, e.g. `.js`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dir = name.into();
        self
    }

    /// Also honor `.gitignore`, `.ignore` and git exclude files.
    pub fn with_gitignore(mut self, enable: bool) -> Self {
        self.respect_gitignore = enable;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Yields matching file paths in name-sorted, depth-first order.
    ///
    /// Fails up front when the root is missing or not a directory. Errors met
    /// while listing directories below the root are yielded in sequence.
    pub fn walk(&self) -> Result<impl Iterator<Item = Result<PathBuf>>> {
        if !self.root.is_dir() {
            return Err(handle_path_error(&self.root).into());
        }

        let excluded_dir = self.excluded_dir.clone();
        let extension = self.extension.clone();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(self.respect_gitignore)
            .hidden(false)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                let pruned =
                    entry.depth() > 0 && is_dir && entry.file_name() == excluded_dir.as_str();
                if pruned {
                    debug!("Pruning {}", entry.path().display());
                }
                !pruned
            })
            .build();

        Ok(walker.filter_map(move |entry| -> Option<Result<PathBuf>> {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        return None;
                    }
                    let matches = entry
                        .file_name()
                        .to_string_lossy()
                        .ends_with(extension.as_str());
                    matches.then(|| Ok(entry.into_path()))
                }
                Err(err) => Some(Err(walk_error(err).into())),
            }
        }))
    }
}
