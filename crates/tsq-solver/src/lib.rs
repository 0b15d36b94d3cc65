//! Type side of the host-frontend contract.
//!
//! Types are interned values referenced by `TypeId`. A union is an ordered
//! list of constituent `TypeId`s; callable types carry their signatures in
//! the order the frontend reported them. The query layer consumes all of
//! this through the object-safe `TypeDatabase` capability trait and never
//! assumes a lookup succeeds.

pub mod intern;
pub mod signatures;
pub mod types;

pub use intern::TypeInterner;
pub use signatures::all_call_signatures;
pub use types::{
    CallableShape, CallableShapeId, IntrinsicKind, Signature, SignatureId, TypeDatabase, TypeId,
    TypeKey,
};
