//! Conservative purity classification for expressions.

use crate::arena::{NodeArena, NodeIndex};
use crate::classify::is_literal_expression_kind;
use crate::syntax_kind::SyntaxKind;

/// Whether evaluating `expr` may have an observable side effect.
///
/// Only literals, bare identifier references and `this` are effect-free.
/// Everything else (calls, property accesses, operators, template
/// interpolations, ...) may invoke user-defined behavior such as getters
/// or coercions even when it looks syntactically inert, so it reports
/// `true`. Unresolvable nodes also report `true`.
pub fn has_evaluation_effect(arena: &NodeArena, expr: NodeIndex) -> bool {
    let Some(node) = arena.get(expr) else {
        return true;
    };
    !(is_literal_expression_kind(node.kind())
        || node.kind() == SyntaxKind::Identifier
        || node.kind() == SyntaxKind::ThisKeyword)
}
