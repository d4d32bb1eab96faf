use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Deref;

use super::ty::TypeDescriptor;

/// Immutable sequence of descriptors.
///
/// The backing storage is handed over at construction and shared afterwards;
/// nothing can mutate it once the list exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TyList<H>(Arc<[TypeDescriptor<H>]>);

impl<H> TyList<H> {
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, TypeDescriptor<H>> {
        self.0.iter()
    }
}

impl<H> Default for TyList<H> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<H> Deref for TyList<H> {
    type Target = [TypeDescriptor<H>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<H> FromIterator<TypeDescriptor<H>> for TyList<H> {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor<H>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<H> From<Vec<TypeDescriptor<H>>> for TyList<H> {
    fn from(items: Vec<TypeDescriptor<H>>) -> Self {
        Self(Arc::from(items))
    }
}

impl<'a, H> IntoIterator for &'a TyList<H> {
    type Item = &'a TypeDescriptor<H>;
    type IntoIter = core::slice::Iter<'a, TypeDescriptor<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
