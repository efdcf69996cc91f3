//! Package loading: the directory-level front end of signature listing.
//!
//! [`FileWalker`] finds `.go` files, [`PackageLoader`] parses them and groups
//! them into [`Package`](crate::ast::Package)s in a stable order.

pub mod loader;
pub mod walker;

pub use loader::PackageLoader;
pub use walker::FileWalker;
