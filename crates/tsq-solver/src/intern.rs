//! Type interner implementing `TypeDatabase`.

use crate::types::{
    CallableShape, CallableShapeId, IntrinsicKind, Signature, SignatureId, TypeDatabase, TypeId,
    TypeKey,
};
use rustc_hash::FxHashMap;
use tsq_binder::SymbolId;

/// Deduplicating type storage. Intrinsics are pre-interned at
/// construction; `union` and `callable` intern their children first, which
/// keeps the type graph acyclic.
#[derive(Debug)]
pub struct TypeInterner {
    types: Vec<TypeKey>,
    dedup: FxHashMap<TypeKey, TypeId>,
    signatures: Vec<Signature>,
    callable_shapes: Vec<CallableShape>,
    type_symbols: FxHashMap<TypeId, SymbolId>,
    next_object: u32,
    any: TypeId,
}

impl TypeInterner {
    pub fn new() -> TypeInterner {
        let mut interner = TypeInterner {
            types: Vec::new(),
            dedup: FxHashMap::default(),
            signatures: Vec::new(),
            callable_shapes: Vec::new(),
            type_symbols: FxHashMap::default(),
            next_object: 0,
            any: TypeId(0),
        };
        interner.any = interner.intern(TypeKey::Intrinsic(IntrinsicKind::Any));
        for kind in [
            IntrinsicKind::Unknown,
            IntrinsicKind::String,
            IntrinsicKind::Number,
            IntrinsicKind::Boolean,
            IntrinsicKind::Void,
            IntrinsicKind::Undefined,
        ] {
            interner.intern(TypeKey::Intrinsic(kind));
        }
        interner
    }

    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        if let Some(&existing) = self.dedup.get(&key) {
            return existing;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(key.clone());
        self.dedup.insert(key, id);
        id
    }

    pub fn intrinsic(&mut self, kind: IntrinsicKind) -> TypeId {
        self.intern(TypeKey::Intrinsic(kind))
    }

    /// Fresh nominal object type, distinct from every previous one.
    pub fn fresh_object(&mut self) -> TypeId {
        let discriminant = self.next_object;
        self.next_object += 1;
        self.intern(TypeKey::Object(discriminant))
    }

    /// Callable type exposing `signatures` in the given order.
    pub fn callable(&mut self, signatures: Vec<Signature>) -> TypeId {
        let sig_ids = signatures
            .into_iter()
            .map(|sig| {
                let id = SignatureId(self.signatures.len() as u32);
                self.signatures.push(sig);
                id
            })
            .collect();
        let shape_id = CallableShapeId(self.callable_shapes.len() as u32);
        self.callable_shapes.push(CallableShape {
            call_signatures: sig_ids,
        });
        self.intern(TypeKey::Callable(shape_id))
    }

    /// Union of `members` preserving the given constituent order. No
    /// sorting or deduplication: the transformer relies on the frontend's
    /// ordering for signature flattening.
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        self.intern(TypeKey::Union(members))
    }

    /// Record the symbol that defines `id`.
    pub fn set_type_symbol(&mut self, id: TypeId, symbol: SymbolId) {
        self.type_symbols.insert(id, symbol);
    }
}

impl TypeDatabase for TypeInterner {
    fn lookup(&self, id: TypeId) -> Option<&TypeKey> {
        self.types.get(id.0 as usize)
    }

    fn signature(&self, id: SignatureId) -> Option<&Signature> {
        self.signatures.get(id.0 as usize)
    }

    fn callable_shape(&self, id: CallableShapeId) -> Option<&CallableShape> {
        self.callable_shapes.get(id.0 as usize)
    }

    fn type_symbol(&self, id: TypeId) -> Option<SymbolId> {
        self.type_symbols.get(&id).copied()
    }

    fn any_type(&self) -> TypeId {
        self.any
    }
}
