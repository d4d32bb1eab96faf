//! The host type system seen through a narrow capability interface.
//!
//! - [`NominalHandle`]: Identity, naming and hash contract of a host type
//! - [`TypeHost`]: Per-handle queries the factory and the hierarchy walker need
//! - [`ClassTable`]: In-memory host with JVM-like class metadata

mod table;

use core::fmt::{Debug, Display};
use core::hash::Hash;

pub use table::{ClassDecl, ClassKind, ClassRef, ClassTable, DeclareError};

/// Opaque identifier of a named type/interface/enum owned by the host.
///
/// `Display` must produce the fully qualified name used in canonical renderings.
pub trait NominalHandle: Clone + Debug + Display + Eq + Hash {
    /// Name without the enclosing type's prefix.
    fn simple_name(&self) -> &str;

    /// The host runtime's own hash code for this type.
    fn hash_code(&self) -> i32;
}

/// Read-only metadata queries over host types.
///
/// Answers must be stable and free of side effects. Handles are assumed to be
/// valid for the host they are asked about.
pub trait TypeHost {
    type Handle: NominalHandle;

    fn is_interface(&self, ty: &Self::Handle) -> bool;

    /// Immediate superclass. `None` for interfaces and for the root type.
    fn superclass(&self, ty: &Self::Handle) -> Option<Self::Handle>;

    /// Directly implemented or extended interfaces, in declaration order.
    fn interfaces(&self, ty: &Self::Handle) -> &[Self::Handle];

    /// Lexically enclosing type of a nested type.
    fn enclosing_type(&self, ty: &Self::Handle) -> Option<Self::Handle>;

    fn type_parameter_count(&self, ty: &Self::Handle) -> usize;

    /// The host's native array type with the given component.
    fn array_type(&self, component: &Self::Handle) -> Self::Handle;

    /// Whether `ty` is the apex of the class hierarchy.
    fn is_root(&self, ty: &Self::Handle) -> bool {
        !self.is_interface(ty) && self.superclass(ty).is_none()
    }
}
