//! Syntax model consumed by the signature renderer.
//!
//! These types are produced once by [`crate::parsing::GoParser`] and read by
//! [`crate::signature`]. They mirror Go declarations as written in source,
//! before any name resolution: a type is a tree of syntactic forms, not a
//! resolved type.

use std::path::{Path, PathBuf};

/// Type expression as written in source.
///
/// Only the forms that commonly appear in public APIs are modelled. Any other
/// syntactic form is kept as [`TypeExpr::Other`] with the name of its syntax
/// node so it can still be labelled in output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// Plain name: `int`, `Server`, or an array length such as `3`
    Ident(String),
    /// Pointer type: `*T`
    Pointer(Box<TypeExpr>),
    /// Dotted name: `fmt.Stringer`
    Qualified { owner: Box<TypeExpr>, member: String },
    /// Slice type: `[]T`
    Slice(Box<TypeExpr>),
    /// Array type: `[N]T`
    Array { len: Box<TypeExpr>, elem: Box<TypeExpr> },
    /// Variadic parameter type: `...T`
    Variadic(Box<TypeExpr>),
    /// Any form not modelled above (maps, channels, func types, generics, ...)
    Other { kind: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn qualified(owner: TypeExpr, member: impl Into<String>) -> Self {
        Self::Qualified {
            owner: Box::new(owner),
            member: member.into(),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn array(len: TypeExpr, elem: TypeExpr) -> Self {
        Self::Array {
            len: Box::new(len),
            elem: Box::new(elem),
        }
    }

    pub fn variadic(elem: TypeExpr) -> Self {
        Self::Variadic(Box::new(elem))
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }
}

/// One parameter or result group: zero or more names sharing a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, ty: TypeExpr) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ty,
        }
    }

    /// Field without names, as in most result lists.
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

/// Method receiver: `(s *Server)`.
///
/// Usually zero or one binding name, but any number is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub binding_names: Vec<String>,
    pub ty: TypeExpr,
}

impl Receiver {
    pub fn new<S: Into<String>>(binding_names: impl IntoIterator<Item = S>, ty: TypeExpr) -> Self {
        Self {
            binding_names: binding_names.into_iter().map(Into::into).collect(),
            ty,
        }
    }
}

/// Function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub receiver: Option<Receiver>,
    pub parameters: Vec<Field>,
    pub results: Vec<Field>,
}

impl Declaration {
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            parameters: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn method(name: impl Into<String>, receiver: Receiver) -> Self {
        Self {
            receiver: Some(receiver),
            ..Self::function(name)
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Field>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_results(mut self, results: Vec<Field>) -> Self {
        self.results = results;
        self
    }

    /// Exported names start with an upper-case letter.
    pub fn is_exported(&self) -> bool {
        is_exported(&self.name)
    }
}

/// Go visibility rule: capitalization of the first character.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Top-level item of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Func(Declaration),
    /// Imports, type/var/const declarations, comments and so on
    Other { kind: String },
}

impl Node {
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Node::Func(decl) => Some(decl),
            Node::Other { .. } => None,
        }
    }
}

/// One parsed `.go` file, nodes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub package: String,
    pub nodes: Vec<Node>,
}

impl SourceFile {
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(Node::as_declaration)
    }
}

/// Files of one package in one directory, in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub dir: PathBuf,
    pub files: Vec<SourceFile>,
}

impl Package {
    pub fn new(name: impl Into<String>, dir: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            dir: dir.as_ref().to_path_buf(),
            files: Vec::new(),
        }
    }
}
