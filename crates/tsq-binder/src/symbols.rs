//! Symbol storage.

use tsq_ast::NodeIndex;

/// Index of a symbol inside a `SymbolArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

/// Symbol classification flags set by the host frontend.
pub mod symbol_flags {
    /// The symbol has a runtime value (variable, function, class, enum).
    pub const VALUE: u32 = 1 << 0;
    /// The symbol names a type (interface, type alias, class).
    pub const TYPE: u32 = 1 << 1;
}

/// Reserved symbol names the host frontend synthesizes.
pub mod internal_names {
    /// Name given to anonymous object/function types.
    pub const ANONYMOUS_TYPE: &str = "__type";
}

/// The logical identity of a named binding.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    /// All syntactic occurrences of this binding, in declaration order.
    /// Never empty for a resolved identifier.
    pub declarations: Vec<NodeIndex>,
    /// First value-flagged declaration, NONE for pure type-level symbols.
    pub value_declaration: NodeIndex,
}

impl Symbol {
    pub fn new(name: String, flags: u32) -> Symbol {
        Symbol {
            name,
            flags,
            declarations: Vec::new(),
            value_declaration: NodeIndex::NONE,
        }
    }
}

/// Arena-based storage for symbols.
#[derive(Debug, Default)]
pub struct SymbolArena {
    pub symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena {
            symbols: Vec::new(),
        }
    }

    pub fn alloc(&mut self, name: String, flags: u32) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(name, flags));
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
