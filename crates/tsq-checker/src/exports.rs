//! Export significance analysis.
//!
//! Export flags attach at different granularities depending on statement
//! kind: export assignments and re-export declarations are inherently
//! export-significant, variable statements carry the flag on each
//! declarator, and every other declaration kind carries it on the
//! statement itself. That asymmetry is the host grammar's and is
//! preserved exactly; collapsing it would change which files classify
//! as modules.

use tsq_ast::classify::is_declaration_statement_kind;
use tsq_ast::{ModifierFlags, NodeArena, NodeData, NodeIndex, SyntaxKind};

/// Whether the file is a module: true iff at least one top-level
/// statement is export-significant.
pub fn is_file_module(arena: &NodeArena, file: NodeIndex) -> bool {
    let Some(statements) = arena.statements_of(file) else {
        return false;
    };
    statements.iter().any(|stmt| is_statement_exported(arena, stmt))
}

/// Whether one statement makes the enclosing file externally visible.
pub fn is_statement_exported(arena: &NodeArena, stmt: NodeIndex) -> bool {
    let Some(node) = arena.get(stmt) else {
        return false;
    };
    match node.kind() {
        SyntaxKind::ExportAssignment | SyntaxKind::ExportDeclaration => true,
        SyntaxKind::VariableStatement => arena
            .variable_declarations_of(stmt)
            .iter()
            .any(|&declaration| {
                arena
                    .combined_modifier_flags(declaration)
                    .contains(ModifierFlags::EXPORT)
            }),
        kind if is_declaration_statement_kind(kind) => arena
            .combined_modifier_flags(stmt)
            .contains(ModifierFlags::EXPORT),
        _ => false,
    }
}

/// Whether the file contains an `export = expr` assignment (as opposed to
/// the `export default expr` form).
pub fn has_export_equals(arena: &NodeArena, file: NodeIndex) -> bool {
    let Some(statements) = arena.statements_of(file) else {
        return false;
    };
    statements.iter().any(|stmt| {
        matches!(
            arena.get(stmt).map(|n| &n.data),
            Some(NodeData::ExportAssignment {
                is_export_equals: true,
                ..
            })
        )
    })
}
