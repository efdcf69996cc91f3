//! Signature listing core.
//!
//! Three layers, leaves first:
//! - [`render`]: type expression to text
//! - [`format`]: one declaration to one `func ...` line
//! - [`collect`]: exported declarations of files and packages, in document order
//!
//! Everything here is pure. Parsing, directory walking and printing live in
//! [`crate::parsing`], [`crate::indexing`] and [`crate::io`].

pub mod collect;
pub mod format;
pub mod render;

pub use collect::{
    collect_exported_signatures, collect_file_signatures, collect_package_signatures,
    collect_signatures,
};
pub use format::{format_field_list, format_receiver, format_signature};
pub use render::render;
