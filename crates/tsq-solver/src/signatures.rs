//! Call signature queries.

use crate::types::{SignatureId, TypeDatabase, TypeId, TypeKey};

/// All call signatures a (possibly union) type exposes.
///
/// Unions flatten recursively, depth-first and left-to-right, so the
/// result order is constituent order first, then signature order within
/// each constituent. Duplicate-looking signatures from overlapping
/// constituents are preserved: they may bind to different constituents
/// during overload resolution. Non-callable types contribute nothing.
pub fn all_call_signatures(db: &dyn TypeDatabase, type_id: TypeId) -> Vec<SignatureId> {
    match db.lookup(type_id) {
        Some(TypeKey::Union(members)) => members
            .iter()
            .flat_map(|&member| all_call_signatures(db, member))
            .collect(),
        Some(TypeKey::Callable(shape_id)) => db
            .callable_shape(*shape_id)
            .map(|shape| shape.call_signatures.clone())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::TypeInterner;
    use crate::types::{IntrinsicKind, Signature};

    fn callable_with(interner: &mut TypeInterner, count: usize) -> TypeId {
        let ret = interner.intrinsic(IntrinsicKind::Void);
        let sigs = (0..count).map(|_| Signature::new([], ret)).collect();
        interner.callable(sigs)
    }

    #[test]
    fn non_union_reports_its_own_signatures() {
        let mut interner = TypeInterner::new();
        let callable = callable_with(&mut interner, 2);

        let sigs = all_call_signatures(&interner, callable);
        assert_eq!(sigs.len(), 2);
        assert!(sigs.iter().all(|&id| interner.signature(id).is_some()));
    }

    #[test]
    fn non_callable_reports_none() {
        let mut interner = TypeInterner::new();
        let s = interner.intrinsic(IntrinsicKind::String);
        assert!(all_call_signatures(&interner, s).is_empty());
    }

    #[test]
    fn union_concatenates_in_constituent_order() {
        let mut interner = TypeInterner::new();
        let a = callable_with(&mut interner, 1);
        let b = callable_with(&mut interner, 2);
        let u = interner.union(vec![a, b]);

        let sigs_a = all_call_signatures(&interner, a);
        let sigs_b = all_call_signatures(&interner, b);
        let sigs_u = all_call_signatures(&interner, u);

        let mut expected = sigs_a;
        expected.extend(sigs_b);
        assert_eq!(sigs_u, expected);
    }

    #[test]
    fn nested_unions_flatten_depth_first() {
        let mut interner = TypeInterner::new();
        let a = callable_with(&mut interner, 1);
        let b = callable_with(&mut interner, 1);
        let c = callable_with(&mut interner, 1);
        let inner = interner.union(vec![b, c]);
        let outer = interner.union(vec![a, inner]);

        let mut expected = all_call_signatures(&interner, a);
        expected.extend(all_call_signatures(&interner, b));
        expected.extend(all_call_signatures(&interner, c));
        assert_eq!(all_call_signatures(&interner, outer), expected);
    }

    #[test]
    fn duplicate_constituents_keep_duplicate_signatures() {
        let mut interner = TypeInterner::new();
        let a = callable_with(&mut interner, 1);
        let u = interner.union(vec![a, a]);

        let sigs = all_call_signatures(&interner, u);
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0], sigs[1]);
    }

    #[test]
    fn non_callable_union_member_contributes_nothing() {
        let mut interner = TypeInterner::new();
        let a = callable_with(&mut interner, 1);
        let s = interner.intrinsic(IntrinsicKind::String);
        let u = interner.union(vec![s, a]);

        assert_eq!(all_call_signatures(&interner, u).len(), 1);
    }
}
