use alloc::sync::Arc;

use super::kind::DescriptorKind;
use super::list::TyList;

/// Structural description of a type over host handles `H`.
///
/// Equality and hashing are structural and variant-tagged. All sequences are
/// compared element-wise and order-sensitively, wildcard bounds included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor<H> {
    /// A plain named type, passed through to the host handle.
    Nominal(H),

    /// A generic instantiation such as `Outer<A>.Inner<B>`.
    ///
    /// Only [`TypeFactory`](crate::TypeFactory) and host adapters can build
    /// one, so the argument count always matches the raw type's declaration.
    Parameterized(Parameterized<H>),

    /// A bounded unknown type. Empty bounds on both sides is `?`.
    Wildcard(Wildcard<H>),

    /// A generic array whose component is itself structural.
    ///
    /// Arrays of plain nominal types are host handles and never appear here.
    ArrayOf(GenericArray<H>),

    /// A type required to satisfy every member at once.
    Intersection(TyList<H>),
}

impl<H> TypeDescriptor<H> {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            TypeDescriptor::Nominal(_) => DescriptorKind::Nominal,
            TypeDescriptor::Parameterized(_) => DescriptorKind::Parameterized,
            TypeDescriptor::Wildcard(_) => DescriptorKind::Wildcard,
            TypeDescriptor::ArrayOf(_) => DescriptorKind::ArrayOf,
            TypeDescriptor::Intersection(_) => DescriptorKind::Intersection,
        }
    }

    pub fn as_nominal(&self) -> Option<&H> {
        match self {
            TypeDescriptor::Nominal(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn as_parameterized(&self) -> Option<&Parameterized<H>> {
        match self {
            TypeDescriptor::Parameterized(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_wildcard(&self) -> Option<&Wildcard<H>> {
        match self {
            TypeDescriptor::Wildcard(w) => Some(w),
            _ => None,
        }
    }

    /// Component of a generic array.
    pub fn component(&self) -> Option<&TypeDescriptor<H>> {
        match self {
            TypeDescriptor::ArrayOf(array) => Some(array.component()),
            _ => None,
        }
    }

    /// Members of an intersection.
    pub fn members(&self) -> Option<&TyList<H>> {
        match self {
            TypeDescriptor::Intersection(members) => Some(members),
            _ => None,
        }
    }
}

/// Payload of [`TypeDescriptor::Parameterized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameterized<H> {
    owner: Option<Arc<TypeDescriptor<H>>>,
    raw: H,
    arguments: TyList<H>,
}

impl<H> Parameterized<H> {
    /// Unchecked; callers have already validated arity and owner.
    pub(crate) fn new(owner: Option<TypeDescriptor<H>>, raw: H, arguments: TyList<H>) -> Self {
        Self {
            owner: owner.map(Arc::new),
            raw,
            arguments,
        }
    }

    pub fn owner(&self) -> Option<&TypeDescriptor<H>> {
        self.owner.as_deref()
    }

    pub fn raw(&self) -> &H {
        &self.raw
    }

    pub fn arguments(&self) -> &TyList<H> {
        &self.arguments
    }
}

/// Payload of [`TypeDescriptor::Wildcard`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wildcard<H> {
    upper_bounds: TyList<H>,
    lower_bounds: TyList<H>,
}

impl<H> Wildcard<H> {
    pub(crate) fn new(upper_bounds: TyList<H>, lower_bounds: TyList<H>) -> Self {
        Self {
            upper_bounds,
            lower_bounds,
        }
    }

    pub fn upper_bounds(&self) -> &TyList<H> {
        &self.upper_bounds
    }

    pub fn lower_bounds(&self) -> &TyList<H> {
        &self.lower_bounds
    }

    pub fn is_unbounded(&self) -> bool {
        self.upper_bounds.is_empty() && self.lower_bounds.is_empty()
    }
}

/// Payload of [`TypeDescriptor::ArrayOf`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericArray<H>(Arc<TypeDescriptor<H>>);

impl<H> GenericArray<H> {
    pub(crate) fn new(component: TypeDescriptor<H>) -> Self {
        Self(Arc::new(component))
    }

    pub fn component(&self) -> &TypeDescriptor<H> {
        &self.0
    }
}
