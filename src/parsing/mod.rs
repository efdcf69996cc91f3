//! Source parsing.
//!
//! Turns source text into the [`crate::ast`] model. Only Go is supported.

pub mod go;

pub use go::GoParser;
