//! Directory to packages: walk, parse, group.

use crate::ast::{Package, SourceFile};
use crate::config::WalkConfig;
use crate::error::{LoadError, LoadResult, ParseError};
use crate::indexing::FileWalker;
use crate::parsing::GoParser;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Loads every Go package under a directory.
///
/// Files are parsed in parallel, but the result is always ordered by package
/// directory, then package name, then file path. Listing the same unchanged
/// directory twice yields the same packages in the same order.
#[derive(Debug, Clone)]
pub struct PackageLoader {
    config: WalkConfig,
}

impl PackageLoader {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    pub fn load(&self, root: &Path) -> LoadResult<Vec<Package>> {
        if !root.exists() {
            return Err(LoadError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(LoadError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let files = FileWalker::new(self.config.clone()).collect_sorted(root);
        tracing::info!("found {} Go files under {}", files.len(), root.display());

        let parsed = self.parse_files(&files)?;
        let packages = group_packages(parsed);

        tracing::info!(
            "loaded {} packages from {}",
            packages.len(),
            root.display()
        );
        Ok(packages)
    }

    /// Parse `files`, keeping their order.
    ///
    /// When several files fail, the error of the first one in path order is
    /// returned.
    pub fn parse_files(&self, files: &[PathBuf]) -> LoadResult<Vec<SourceFile>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.parallel_threads)
            .build()
            .map_err(|e| LoadError::ThreadPool {
                reason: e.to_string(),
            })?;

        let results: Vec<LoadResult<SourceFile>> = pool.install(|| {
            files
                .par_iter()
                .map_init(GoParser::new, |parser, path| match parser {
                    Ok(parser) => parse_path(parser, path),
                    Err(e) => Err(LoadError::Parse(ParseError::ParserInit {
                        language: "Go".to_string(),
                        reason: e.to_string(),
                    })),
                })
                .collect()
        });

        results.into_iter().collect()
    }
}

fn parse_path(parser: &mut GoParser, path: &Path) -> LoadResult<SourceFile> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let code = String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    tracing::debug!("parsing {}", path.display());
    Ok(parser.parse_file(path, &code)?)
}

/// Group files by `(directory, package name)`, keeping file order within a
/// package.
pub fn group_packages(files: Vec<SourceFile>) -> Vec<Package> {
    let mut packages: BTreeMap<(PathBuf, String), Package> = BTreeMap::new();

    for file in files {
        let dir = file
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        packages
            .entry((dir.clone(), file.package.clone()))
            .or_insert_with(|| Package::new(file.package.clone(), &dir))
            .files
            .push(file);
    }

    packages.into_values().collect()
}
