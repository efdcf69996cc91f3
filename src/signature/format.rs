//! One-line `func` signatures.

use super::render::render;
use crate::ast::{Declaration, Field, Receiver};

/// Format a declaration as `func [(<recv>) ]<Name>(<params>) <results>`.
///
/// The space before the results segment is always written, so a declaration
/// without results ends in a trailing space.
pub fn format_signature(decl: &Declaration) -> String {
    let params = format_field_list(&decl.parameters);
    let results = format_field_list(&decl.results);

    match &decl.receiver {
        Some(receiver) => format!(
            "func ({}) {}({params}) {results}",
            format_receiver(receiver),
            decl.name
        ),
        None => format!("func {}({params}) {results}", decl.name),
    }
}

/// Receiver text without parentheses: `s *Server`.
///
/// An unnamed receiver keeps the separating space: ` *Server`.
pub fn format_receiver(receiver: &Receiver) -> String {
    format!("{} {}", receiver.binding_names.join(", "), render(&receiver.ty))
}

/// Comma-separated `names type` groups.
pub fn format_field_list(fields: &[Field]) -> String {
    fields.iter().map(format_field).collect::<Vec<_>>().join(", ")
}

fn format_field(field: &Field) -> String {
    let ty = render(&field.ty);
    if field.names.is_empty() {
        ty
    } else {
        format!("{} {ty}", field.names.join(", "))
    }
}
