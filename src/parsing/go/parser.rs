//! Go parser implementation
//!
//! Uses tree-sitter-go crate's LANGUAGE constant (converted via .into()).
//!
//! Note: This parser uses ABI-15.

use crate::ast::{Declaration, Field, Node as AstNode, Receiver, SourceFile, TypeExpr};
use crate::error::{ParseError, ParseResult};
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Longest source excerpt quoted in a syntax error
const SNIPPET_LIMIT: usize = 24;

/// Go language parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> ParseResult<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| ParseError::ParserInit {
                language: "Go".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse one Go file into its package name and top-level nodes.
    ///
    /// Files with syntax errors are rejected rather than partially lowered,
    /// so a listing never silently misses a declaration.
    pub fn parse_file(&mut self, path: &Path, code: &str) -> ParseResult<SourceFile> {
        let tree = self
            .parser
            .parse(code, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();

        if let Some(error_node) = first_error(root) {
            return Err(syntax_error(path, error_node, code));
        }

        let mut package = None;
        let mut nodes = Vec::new();

        for child in root.named_children(&mut root.walk()) {
            match child.kind() {
                "package_clause" => {
                    package = child.named_child(0).map(|n| code[n.byte_range()].to_string());
                    nodes.push(other_node(child));
                }
                "function_declaration" | "method_declaration" => {
                    match lower_declaration(child, code) {
                        Some(decl) => nodes.push(AstNode::Func(decl)),
                        None => {
                            tracing::debug!(
                                "{}:{}: declaration without a name",
                                path.display(),
                                child.start_position().row + 1
                            );
                            nodes.push(other_node(child));
                        }
                    }
                }
                _ => nodes.push(other_node(child)),
            }
        }

        let package = package.ok_or_else(|| ParseError::MissingPackage {
            path: path.to_path_buf(),
        })?;

        tracing::trace!(
            "parsed {} (package {package}, {} top-level nodes)",
            path.display(),
            nodes.len()
        );

        Ok(SourceFile {
            path: path.to_path_buf(),
            package,
            nodes,
        })
    }
}

fn other_node(node: Node) -> AstNode {
    AstNode::Other {
        kind: node.kind().to_string(),
    }
}

/// Lower a `function_declaration` or `method_declaration`
fn lower_declaration(node: Node, code: &str) -> Option<Declaration> {
    let name = node
        .child_by_field_name("name")
        .map(|n| code[n.byte_range()].to_string())?;

    let receiver = node
        .child_by_field_name("receiver")
        .and_then(|list| lower_receiver(list, code));

    let parameters = node
        .child_by_field_name("parameters")
        .map(|list| lower_field_list(list, code))
        .unwrap_or_default();

    let results = match node.child_by_field_name("result") {
        Some(list) if list.kind() == "parameter_list" => lower_field_list(list, code),
        // func F() error
        Some(ty) => vec![Field::unnamed(lower_type(ty, code))],
        None => Vec::new(),
    };

    Some(Declaration {
        name,
        receiver,
        parameters,
        results,
    })
}

/// Method receivers in Go are parameter lists: func (r *Type) method()
///
/// Only the first declaration of the list is used.
fn lower_receiver(list: Node, code: &str) -> Option<Receiver> {
    let field = lower_field_list(list, code).into_iter().next()?;
    Some(Receiver {
        binding_names: field.names,
        ty: field.ty,
    })
}

/// Lower a `parameter_list`, keeping grouped names together: `(a, b int)`
fn lower_field_list(list: Node, code: &str) -> Vec<Field> {
    let mut fields = Vec::new();

    for child in list.named_children(&mut list.walk()) {
        match child.kind() {
            "parameter_declaration" => {
                fields.push(lower_parameter(child, code));
            }
            "variadic_parameter_declaration" => {
                let field = lower_parameter(child, code);
                fields.push(Field {
                    names: field.names,
                    ty: TypeExpr::variadic(field.ty),
                });
            }
            // comments inside the list
            _ => {}
        }
    }

    fields
}

fn lower_parameter(node: Node, code: &str) -> Field {
    let names = node
        .named_children(&mut node.walk())
        .filter(|child| child.kind() == "identifier")
        .map(|child| code[child.byte_range()].to_string())
        .collect();

    let ty = match node.child_by_field_name("type") {
        Some(ty) => lower_type(ty, code),
        None => TypeExpr::other(node.kind()),
    };

    Field { names, ty }
}

/// Lower a type node, or an array length expression.
fn lower_type(node: Node, code: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" | "field_identifier" | "package_identifier"
        | "int_literal" => TypeExpr::ident(&code[node.byte_range()]),
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::pointer(lower_type(inner, code)),
            None => TypeExpr::other(node.kind()),
        },
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeExpr::qualified(lower_type(package, code), &code[name.byte_range()])
                }
                _ => TypeExpr::other(node.kind()),
            }
        }
        "slice_type" => match node.child_by_field_name("element") {
            Some(elem) => TypeExpr::slice(lower_type(elem, code)),
            None => TypeExpr::other(node.kind()),
        },
        "array_type" => {
            match (
                node.child_by_field_name("length"),
                node.child_by_field_name("element"),
            ) {
                (Some(len), Some(elem)) => {
                    TypeExpr::array(lower_type(len, code), lower_type(elem, code))
                }
                _ => TypeExpr::other(node.kind()),
            }
        }
        // [pkg.Size]T
        "selector_expression" => {
            match (
                node.child_by_field_name("operand"),
                node.child_by_field_name("field"),
            ) {
                (Some(operand), Some(field)) => {
                    TypeExpr::qualified(lower_type(operand, code), &code[field.byte_range()])
                }
                _ => TypeExpr::other(node.kind()),
            }
        }
        kind => TypeExpr::other(kind),
    }
}

/// First `ERROR` or missing node in document order.
///
/// Subtrees without errors are skipped; the walk keeps no per-level state.
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn syntax_error(path: &Path, node: Node, code: &str) -> ParseError {
    let position = node.start_position();
    let snippet = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        code[node.byte_range()]
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .chars()
            .take(SNIPPET_LIMIT)
            .collect()
    };

    ParseError::SyntaxError {
        path: path.to_path_buf(),
        line: position.row + 1,
        column: position.column + 1,
        snippet,
    }
}
