//! Go language parser implementation
//!
//! Uses tree-sitter-go to build a concrete syntax tree and lowers the
//! top-level function and method declarations into [`crate::ast`] nodes.
//!
//! ## Node mapping
//!
//! | tree-sitter node | model |
//! |------------------|-------|
//! | `function_declaration`, `method_declaration` | [`Node::Func`](crate::ast::Node::Func) |
//! | any other top-level node | [`Node::Other`](crate::ast::Node::Other) |
//! | `type_identifier`, `identifier`, `int_literal` | [`TypeExpr::Ident`](crate::ast::TypeExpr::Ident) |
//! | `pointer_type` | [`TypeExpr::Pointer`](crate::ast::TypeExpr::Pointer) |
//! | `qualified_type`, `selector_expression` (array length) | [`TypeExpr::Qualified`](crate::ast::TypeExpr::Qualified) |
//! | `slice_type` | [`TypeExpr::Slice`](crate::ast::TypeExpr::Slice) |
//! | `array_type` | [`TypeExpr::Array`](crate::ast::TypeExpr::Array) |
//! | `variadic_parameter_declaration` | [`TypeExpr::Variadic`](crate::ast::TypeExpr::Variadic) |
//! | anything else | [`TypeExpr::Other`](crate::ast::TypeExpr::Other) with the node kind |
//!
//! Type parameters of generic functions are not lowered.

pub mod parser;

pub use parser::GoParser;

/// File extension of Go sources
pub const GO_EXTENSION: &str = "go";

/// Suffix of Go test files
pub const GO_TEST_SUFFIX: &str = "_test.go";
