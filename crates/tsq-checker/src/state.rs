//! Checker facade shared by the query modules.

use rustc_hash::{FxHashMap, FxHashSet};
use tsq_ast::{NodeArena, NodeIndex};
use tsq_binder::{BinderState, SymbolId};
use tsq_solver::{TypeDatabase, TypeId};

/// Read-only view over one file's checked program state.
///
/// The host frontend builds the arena, binder and type tables and feeds
/// the per-node results (computed types, contextual types, default-library
/// marks) in before the transformation pass starts; queries then only
/// take `&self` and may be issued in any order or repeated.
pub struct CheckerState<'a> {
    pub arena: &'a NodeArena,
    pub binder: &'a BinderState,
    pub types: &'a dyn TypeDatabase,
    /// The file currently being transformed.
    pub source_file: NodeIndex,
    node_types: FxHashMap<NodeIndex, TypeId>,
    contextual_types: FxHashMap<NodeIndex, TypeId>,
    default_libraries: FxHashSet<NodeIndex>,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        binder: &'a BinderState,
        types: &'a dyn TypeDatabase,
        source_file: NodeIndex,
    ) -> CheckerState<'a> {
        CheckerState {
            arena,
            binder,
            types,
            source_file,
            node_types: FxHashMap::default(),
            contextual_types: FxHashMap::default(),
            default_libraries: FxHashSet::default(),
        }
    }

    // Host-side table population (done once, before queries run).

    pub fn set_type_at_location(&mut self, node: NodeIndex, ty: TypeId) {
        self.node_types.insert(node, ty);
    }

    pub fn set_contextual_type(&mut self, expr: NodeIndex, ty: TypeId) {
        self.contextual_types.insert(expr, ty);
    }

    /// Mark a source file root as part of the default/standard library.
    pub fn mark_default_library(&mut self, file: NodeIndex) {
        self.default_libraries.insert(file);
    }

    // Capability surface consumed by the query modules.

    pub fn get_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.binder.symbol_at_location(node)
    }

    /// Computed type of `node`; the `any` sentinel when the frontend
    /// recorded nothing for it.
    pub fn get_type_at_location(&self, node: NodeIndex) -> TypeId {
        self.node_types
            .get(&node)
            .copied()
            .unwrap_or_else(|| self.types.any_type())
    }

    /// Type expected at the expression's position, when one exists.
    pub fn get_contextual_type(&self, expr: NodeIndex) -> Option<TypeId> {
        self.contextual_types.get(&expr).copied()
    }

    pub fn is_source_file_default_library(&self, file: NodeIndex) -> bool {
        self.default_libraries.contains(&file)
    }
}
