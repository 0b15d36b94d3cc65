//! Binder state: symbol declaration/merge bookkeeping and the
//! node-to-symbol lookup table the query layer reads.

use crate::symbols::{symbol_flags, Symbol, SymbolArena, SymbolId};
use rustc_hash::FxHashMap;
use tracing::debug;
use tsq_ast::NodeIndex;

#[derive(Debug, Default)]
pub struct BinderState {
    pub symbols: SymbolArena,
    /// Symbols keyed by name for merge lookups. Scoping beyond a flat
    /// namespace is the host frontend's concern, not this layer's.
    locals: FxHashMap<String, SymbolId>,
    /// node -> symbol, for both name nodes and declaration nodes.
    node_symbols: FxHashMap<NodeIndex, SymbolId>,
}

impl BinderState {
    pub fn new() -> BinderState {
        BinderState::default()
    }

    /// Declare `name` at `declaration`, merging into an existing symbol of
    /// the same name when one exists. The declaration is appended to the
    /// symbol's ordered list; `value_declaration` is set only for the
    /// first value-flagged occurrence.
    pub fn declare_symbol(
        &mut self,
        name: &str,
        flags: u32,
        name_node: NodeIndex,
        declaration: NodeIndex,
    ) -> SymbolId {
        let id = match self.locals.get(name) {
            Some(&existing) => {
                if let Some(sym) = self.symbols.get_mut(existing) {
                    sym.flags |= flags;
                }
                existing
            }
            None => {
                let id = self.symbols.alloc(name.to_string(), flags);
                self.locals.insert(name.to_string(), id);
                id
            }
        };

        if let Some(sym) = self.symbols.get_mut(id) {
            sym.declarations.push(declaration);
            if sym.value_declaration.is_none() && (flags & symbol_flags::VALUE) != 0 {
                sym.value_declaration = declaration;
            }
        }

        if name_node.is_some() {
            self.node_symbols.insert(name_node, id);
        }
        if declaration.is_some() {
            self.node_symbols.insert(declaration, id);
        }

        debug!(name, ?declaration, symbol = id.0, "declared symbol");
        id
    }

    /// Symbol bound at `node`, if the frontend resolved one there.
    pub fn symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node).copied()
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }
}
