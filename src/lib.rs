//! The main library module for gosig
pub mod ast;
pub mod config;
pub mod error;
pub mod indexing;
pub mod io;
pub mod logging;
pub mod parsing;
pub mod signature;

// Explicit exports for better API clarity
pub use ast::{Declaration, Field, Node, Package, Receiver, SourceFile, TypeExpr};
pub use config::Settings;
pub use error::{LoadError, LoadResult, ParseError, ParseResult};
pub use indexing::{FileWalker, PackageLoader};
pub use parsing::GoParser;
pub use signature::{
    collect_exported_signatures, collect_file_signatures, collect_package_signatures,
    collect_signatures, format_signature, render,
};
