//! Syntactic side of the host-frontend contract.
//!
//! The transform query layer never parses source text; the host frontend
//! hands it a fully built, immutable AST. This crate defines that AST
//! contract: arena storage with index handles, per-node kind tags, cached
//! combined modifier flags, and parent back-references for upward walks.
//!
//! It also carries the two purely syntactic queries of the layer:
//! - `walk::find_first_node_above` - generic ancestor search
//! - `effects::has_evaluation_effect` - conservative purity classification

pub mod arena;
pub mod builder;
pub mod classify;
pub mod effects;
pub mod flags;
pub mod syntax_kind;
pub mod walk;

pub use arena::{Node, NodeArena, NodeBase, NodeData, NodeIndex, NodeList};
pub use builder::AstBuilder;
pub use effects::has_evaluation_effect;
pub use flags::{ModifierFlags, NodeFlags};
pub use syntax_kind::SyntaxKind;
pub use walk::{enclosing_source_file, find_first_node_above};
