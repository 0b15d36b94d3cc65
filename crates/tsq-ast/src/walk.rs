//! Upward AST walks over parent back-references.

use crate::arena::{Node, NodeArena, NodeIndex};
use crate::classify::is_source_file_kind;

/// Search strictly upward from `node` for the first ancestor satisfying
/// `predicate`. The starting node itself is never tested; returns `None`
/// once the root's missing parent is reached. O(depth), no side effects.
pub fn find_first_node_above(
    arena: &NodeArena,
    node: NodeIndex,
    predicate: impl Fn(&Node) -> bool,
) -> Option<NodeIndex> {
    let mut current = node;
    loop {
        let parent = arena.parent(current);
        let parent_node = arena.get(parent)?;
        if predicate(parent_node) {
            return Some(parent);
        }
        current = parent;
    }
}

/// Source file that (transitively) owns `node`, or `None` when the node is
/// detached or is itself the file root.
pub fn enclosing_source_file(arena: &NodeArena, node: NodeIndex) -> Option<NodeIndex> {
    find_first_node_above(arena, node, |n| is_source_file_kind(n.kind()))
}
