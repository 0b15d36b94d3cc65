//! Type representation and the `TypeDatabase` capability trait.

use smallvec::SmallVec;
use tsq_binder::SymbolId;

/// Index of an interned type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// Index of a stored call signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureId(pub u32);

/// Index of a callable shape (the signature list of one callable type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallableShapeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    String,
    Number,
    Boolean,
    Void,
    Undefined,
}

/// One call signature: parameter types in order plus the return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub parameters: SmallVec<[TypeId; 4]>,
    pub return_type: TypeId,
}

impl Signature {
    pub fn new(parameters: impl IntoIterator<Item = TypeId>, return_type: TypeId) -> Signature {
        Signature {
            parameters: parameters.into_iter().collect(),
            return_type,
        }
    }
}

/// Call signatures of one callable type, in the frontend's reported order.
#[derive(Debug, Clone)]
pub struct CallableShape {
    pub call_signatures: Vec<SignatureId>,
}

/// Interned structure of a type.
///
/// `Object` carries a nominal discriminant so two structurally unrelated
/// object types (say a user-authored `Promise` and the library one) intern
/// to distinct `TypeId`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(IntrinsicKind),
    Object(u32),
    Callable(CallableShapeId),
    /// Ordered constituents; constituents are interned before the union
    /// that contains them, so membership is acyclic by construction.
    Union(Vec<TypeId>),
}

/// Read-only capability interface over the frontend's type tables.
///
/// Every method may fail to resolve; callers degrade to conservative
/// defaults instead of propagating errors.
pub trait TypeDatabase {
    fn lookup(&self, id: TypeId) -> Option<&TypeKey>;
    fn signature(&self, id: SignatureId) -> Option<&Signature>;
    fn callable_shape(&self, id: CallableShapeId) -> Option<&CallableShape>;
    /// Symbol that defines `id`, when the type has one.
    fn type_symbol(&self, id: TypeId) -> Option<SymbolId>;
    /// The `any` sentinel every inference fallback bottoms out at.
    fn any_type(&self) -> TypeId;
}
