//! Modifier and node flags cached on `NodeBase`.
//!
//! The host frontend computes *combined* modifier flags for every
//! declaration (its own modifiers merged with every syntactic occurrence
//! that re-declares into it) and caches the result on the node. This layer
//! only reads the cached value; see `NodeArena::combined_modifier_flags`.

use bitflags::bitflags;

bitflags! {
    /// Combined modifier flags of a declaration, as computed by the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ModifierFlags: u32 {
        const NONE = 0;
        const EXPORT = 1 << 0;
        const AMBIENT = 1 << 1;
        const DEFAULT = 1 << 2;
        const CONST = 1 << 3;
        const ASYNC = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
    }
}

bitflags! {
    /// Structural flags on a node (declaration-list flavor and the like).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeFlags: u32 {
        const NONE = 0;
        const LET = 1 << 0;
        const CONST = 1 << 1;
    }
}
