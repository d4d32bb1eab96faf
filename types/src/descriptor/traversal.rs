//! Pre-order traversal of descriptor trees.
//!
//! Children are reported in definition order:
//! - `Nominal`: `[]`
//! - `Parameterized`: `[owner?, arg0, arg1, ...]`
//! - `Wildcard`: `[upper0, ..., lower0, ...]`
//! - `ArrayOf`: `[component]`
//! - `Intersection`: `[member0, member1, ...]`

use alloc::vec::Vec;
use core::hash::Hash;
use core::iter::Chain;
use core::slice;

use hashbrown::HashSet;
use smallvec::{SmallVec, smallvec};

use super::ty::TypeDescriptor;
use crate::flow::VisitFlow;

/// Direct sub-descriptors of a descriptor.
pub type Children<'a, H> = Chain<
    Chain<core::option::IntoIter<&'a TypeDescriptor<H>>, slice::Iter<'a, TypeDescriptor<H>>>,
    slice::Iter<'a, TypeDescriptor<H>>,
>;

impl<H> TypeDescriptor<H> {
    pub fn children(&self) -> Children<'_, H> {
        let empty: &[TypeDescriptor<H>] = &[];
        let (head, first, second) = match self {
            TypeDescriptor::Nominal(_) => (None, empty, empty),
            TypeDescriptor::Parameterized(p) => (p.owner(), &p.arguments()[..], empty),
            TypeDescriptor::Wildcard(w) => (None, &w.upper_bounds()[..], &w.lower_bounds()[..]),
            TypeDescriptor::ArrayOf(array) => (Some(array.component()), empty, empty),
            TypeDescriptor::Intersection(members) => (None, &members[..], empty),
        };
        head.into_iter().chain(first.iter()).chain(second.iter())
    }

    /// Visit every descriptor of the tree rooted here, parents before children.
    ///
    /// Uses an explicit stack, so deeply nested descriptors cannot overflow.
    /// Returns [`VisitFlow::Stop`] if the visitor stopped the walk.
    pub fn walk<F>(&self, mut visit: F) -> VisitFlow
    where
        F: FnMut(&TypeDescriptor<H>) -> VisitFlow,
    {
        let mut stack: SmallVec<[&TypeDescriptor<H>; 8]> = smallvec![self];
        while let Some(ty) = stack.pop() {
            if visit(ty).is_stop() {
                return VisitFlow::Stop;
            }
            stack.extend(ty.children().rev());
        }
        VisitFlow::Continue
    }

    /// Every host handle the tree mentions (nominal leaves and raw types),
    /// in pre-order, first occurrence only.
    pub fn nominals(&self) -> Vec<H>
    where
        H: Clone + Eq + Hash,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.walk(|ty| {
            let handle = match ty {
                TypeDescriptor::Nominal(handle) => Some(handle),
                TypeDescriptor::Parameterized(p) => Some(p.raw()),
                _ => None,
            };
            if let Some(handle) = handle {
                if seen.insert(handle.clone()) {
                    out.push(handle.clone());
                }
            }
            VisitFlow::Continue
        });
        out
    }

    /// Number of descriptors in the tree, this one included.
    pub fn size(&self) -> usize {
        let mut count = 0;
        self.walk(|_| {
            count += 1;
            VisitFlow::Continue
        });
        count
    }
}
