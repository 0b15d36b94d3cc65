//! Symbol side of the host-frontend contract.
//!
//! A `Symbol` is the logical identity of a named binding, distinct from
//! any single syntactic occurrence. Symbols own an ordered list of their
//! declaration nodes (possibly spread over several files through ambient
//! merging); nodes reference symbols only through the binder's lookup
//! table, never the other way around.

pub mod state;
pub mod symbols;

pub use state::BinderState;
pub use symbols::{internal_names, symbol_flags, Symbol, SymbolArena, SymbolId};
