//! Host-compatible hash codes.
//!
//! Descriptors already implement [`Hash`](core::hash::Hash) structurally. The
//! value computed here is a separate `i32` that agrees with the host runtime's
//! own hash of an equal generic type, so descriptors can stand in for native
//! reflection objects in host-side hash tables.

use crate::descriptor::{TyList, TypeDescriptor};
use crate::host::NominalHandle;

/// `fold(1, |h, e| 31 * h + hash(e))`, wrapping.
fn list_hash<H: NominalHandle>(items: &TyList<H>) -> i32 {
    items.iter().fold(1i32, |hash, item| {
        hash.wrapping_mul(31).wrapping_add(item.host_hash_code())
    })
}

impl<H: NominalHandle> TypeDescriptor<H> {
    /// Hash code matching the host's hash of the equivalent native type.
    ///
    /// | Shape | Hash |
    /// |-------|------|
    /// | Nominal | the handle's own hash code |
    /// | Parameterized | `list(args) ^ owner (0 if absent) ^ raw` |
    /// | Wildcard | `list(lower) ^ list(upper)` |
    /// | ArrayOf | the component's hash |
    /// | Intersection | `list(members)` |
    pub fn host_hash_code(&self) -> i32 {
        match self {
            TypeDescriptor::Nominal(handle) => handle.hash_code(),
            TypeDescriptor::Parameterized(p) => {
                let owner = p.owner().map_or(0, TypeDescriptor::host_hash_code);
                list_hash(p.arguments()) ^ owner ^ p.raw().hash_code()
            }
            TypeDescriptor::Wildcard(w) => list_hash(w.lower_bounds()) ^ list_hash(w.upper_bounds()),
            TypeDescriptor::ArrayOf(array) => array.component().host_hash_code(),
            TypeDescriptor::Intersection(members) => list_hash(members),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::host::{ClassTable, NominalHandle};
    use crate::{TypeDescriptor, TypeFactory};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nominal_uses_handle_hash() {
        let table = ClassTable::new();
        let object = table.object();
        assert_eq!(
            TypeDescriptor::Nominal(object.clone()).host_hash_code(),
            object.hash_code()
        );
    }

    #[test]
    fn test_unbounded_wildcard() {
        let table = ClassTable::new();
        let factory = TypeFactory::new(&table);
        // 1 ^ 1
        assert_eq!(factory.unbounded_wildcard().host_hash_code(), 0);
    }

    #[test]
    fn test_parameterized_without_owner() {
        let mut table = ClassTable::new();
        let list = table.interface("List").type_params(1).declare().unwrap();
        let object = table.object();
        let factory = TypeFactory::new(&table);

        let ty = factory
            .parameterized_type(list.clone(), [TypeDescriptor::Nominal(object.clone())])
            .unwrap();
        let args = 31i32.wrapping_add(object.hash_code());
        assert_eq!(ty.host_hash_code(), args ^ list.hash_code());
    }

    #[test]
    fn test_generic_array_hashes_like_component() {
        let mut table = ClassTable::new();
        let list = table.interface("List").type_params(1).declare().unwrap();
        let factory = TypeFactory::new(&table);

        let list_q = factory
            .parameterized_type(list, [factory.unbounded_wildcard()])
            .unwrap();
        let arr = factory.array_type(list_q.clone());
        assert_eq!(arr.host_hash_code(), list_q.host_hash_code());
    }

    #[test]
    fn test_intersection_is_order_sensitive() {
        let mut table = ClassTable::new();
        let a = TypeDescriptor::Nominal(table.class("A").declare().unwrap());
        let b = TypeDescriptor::Nominal(table.interface("B").declare().unwrap());
        let factory = TypeFactory::new(&table);

        let ab = factory.intersection_type([a.clone(), b.clone()]);
        let ba = factory.intersection_type([b, a]);
        assert_ne!(ab, ba);
        assert_ne!(ab.host_hash_code(), ba.host_hash_code());
    }
}
