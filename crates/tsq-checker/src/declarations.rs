//! Canonical declaration resolution.
//!
//! A symbol may be declared several times, possibly across files through
//! ambient merging, and the frontend does not pre-sort the list. The
//! canonical declaration for a file is the textually first one inside it.

use crate::state::CheckerState;
use tracing::trace;
use tsq_ast::{enclosing_source_file, NodeArena, NodeIndex};
use tsq_binder::{SymbolArena, SymbolId};

/// The declaration of `symbol` with the smallest position among those
/// whose enclosing source file is exactly `file`. `None` when the symbol
/// has no declaration in that file. Positions are unique within a file,
/// so ties cannot occur.
pub fn first_declaration_in_file(
    arena: &NodeArena,
    symbols: &SymbolArena,
    symbol: SymbolId,
    file: NodeIndex,
) -> Option<NodeIndex> {
    let sym = symbols.get(symbol)?;
    sym.declarations
        .iter()
        .copied()
        .filter(|&declaration| enclosing_source_file(arena, declaration) == Some(file))
        .min_by_key(|&declaration| arena.get(declaration).map_or(u32::MAX, |n| n.pos()))
}

impl CheckerState<'_> {
    /// Whether `declaration` is its symbol's canonical (first) declaration
    /// in the current file. Fails closed to `false` when no symbol is
    /// resolvable at the declaration's name, e.g. for destructuring
    /// patterns the frontend cannot bind.
    pub fn is_first_declaration(&self, declaration: NodeIndex) -> bool {
        let name = self.arena.name_of_declaration(declaration);
        let Some(symbol) = self.get_symbol_at_location(name) else {
            trace!(?declaration, "no symbol at declaration name");
            return false;
        };

        let first =
            first_declaration_in_file(self.arena, &self.binder.symbols, symbol, self.source_file);
        first == Some(declaration)
    }
}
