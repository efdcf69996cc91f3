//! Type expression rendering.

use crate::ast::TypeExpr;

/// Render a type expression in its canonical textual form.
///
/// Unmodelled forms render as the name of their syntax node (for example
/// `map_type`), so the enclosing signature is still printed.
pub fn render(expr: &TypeExpr) -> String {
    let mut out = String::new();
    render_into(expr, &mut out);
    out
}

fn render_into(expr: &TypeExpr, out: &mut String) {
    match expr {
        TypeExpr::Ident(name) => out.push_str(name),
        TypeExpr::Pointer(inner) => {
            out.push('*');
            render_into(inner, out);
        }
        TypeExpr::Qualified { owner, member } => {
            render_into(owner, out);
            out.push('.');
            out.push_str(member);
        }
        TypeExpr::Slice(elem) => {
            out.push_str("[]");
            render_into(elem, out);
        }
        TypeExpr::Array { len, elem } => {
            out.push('[');
            render_into(len, out);
            out.push(']');
            render_into(elem, out);
        }
        TypeExpr::Variadic(elem) => {
            out.push_str("...");
            render_into(elem, out);
        }
        TypeExpr::Other { kind } => out.push_str(kind),
    }
}
