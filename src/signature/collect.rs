//! Exported declaration traversal.

use super::format::format_signature;
use crate::ast::{Node, Package, SourceFile};

/// Signatures of the exported functions and methods among `nodes`, in order.
///
/// Non-function nodes and unexported declarations are skipped.
pub fn collect_exported_signatures<'a, I>(nodes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes
        .into_iter()
        .filter_map(Node::as_declaration)
        .filter(|decl| decl.is_exported())
        .map(format_signature)
        .collect()
}

/// Signatures of one file in source order.
pub fn collect_file_signatures(file: &SourceFile) -> Vec<String> {
    collect_exported_signatures(&file.nodes)
}

/// Signatures of one package, files in the order they are stored.
pub fn collect_package_signatures(package: &Package) -> Vec<String> {
    package
        .files
        .iter()
        .flat_map(collect_file_signatures)
        .collect()
}

/// Signatures of every package, packages in the order given.
pub fn collect_signatures(packages: &[Package]) -> Vec<String> {
    packages
        .iter()
        .flat_map(collect_package_signatures)
        .collect()
}
