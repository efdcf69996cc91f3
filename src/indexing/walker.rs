//! File system walker for discovering Go source files
//!
//! This module provides directory traversal with support for:
//! - Single-directory listing (the default) or recursive walks
//! - .gitignore rules and `.gosigignore` files
//! - `_test.go` filtering
//! - Hidden file handling

use crate::config::WalkConfig;
use crate::parsing::go::{GO_EXTENSION, GO_TEST_SUFFIX};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Custom ignore file honoured next to `.gitignore`
pub const IGNORE_FILE: &str = ".gosigignore";

/// Walks directories to find Go files to list
#[derive(Debug, Clone)]
pub struct FileWalker {
    config: WalkConfig,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk a directory and return an iterator of Go files, in walk order
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(true) // Skip hidden files and directories
            .git_ignore(true) // Respect .gitignore files
            .git_global(false)
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(false)
            .require_git(false); // Allow gitignore to work in non-git directories

        // Without recursion only the root's own entries are visited
        if !self.config.recursive {
            builder.max_depth(Some(1));
        }

        builder.add_custom_ignore_filename(IGNORE_FILE);

        let include_tests = self.config.include_tests;

        builder
            .build()
            .filter_map(Result::ok) // Skip files we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(move |path| is_go_source(path, include_tests))
    }

    /// All Go files under `root`, sorted by path
    pub fn collect_sorted(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.walk(root).collect();
        files.sort();
        files
    }
}

fn is_go_source(path: &Path, include_tests: bool) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if name.starts_with('.') {
        return false;
    }

    let is_go = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == GO_EXTENSION);

    is_go && (include_tests || !name.ends_with(GO_TEST_SUFFIX))
}
