//! Semantic query layer between a type-checked program and a
//! node-by-node source transformer.
//!
//! A transformer visiting a node asks questions syntax alone cannot
//! answer: is this file a module, is this declaration the symbol's first
//! one in the file, is this type the library's or the user's, what type
//! was this expression assigned, which call signatures does this union
//! expose, can evaluating this expression have a side effect. Every
//! answer here is a pure read over the frontend's immutable AST, symbol
//! and type tables; missing information degrades to a conservative
//! default instead of an error.
//!
//! Module map:
//! - `state` - `CheckerState`, the facade over arena + binder + types
//! - `exports` - module/export-significance analysis
//! - `declarations` - canonical ("first in file") declaration resolution
//! - `type_queries` - standard-library classification, assigned-type inference
//!
//! The purely syntactic queries (`has_evaluation_effect`,
//! `find_first_node_above`) and the signature flattener live in their
//! contract crates and are re-exported here as part of the public surface.

pub mod declarations;
pub mod exports;
pub mod state;
pub mod type_queries;

pub use declarations::first_declaration_in_file;
pub use exports::{has_export_equals, is_file_module, is_statement_exported};
pub use state::CheckerState;

pub use tsq_ast::{enclosing_source_file, find_first_node_above, has_evaluation_effect};
pub use tsq_solver::all_call_signatures;
