//! Structural type descriptors over a host's nominal type system.
//!
//! This crate provides a closed representation of generic type shapes
//! (parameterized, wildcard, generic array and intersection types) that refer
//! to nominal types owned by a pluggable host (see [`TypeHost`]).
//!
//! # Example
//!
//! ```
//! use typegraph_types::{ClassTable, TypeDescriptor, TypeFactory};
//!
//! let mut table = ClassTable::new();
//! let string = table.class("java.lang.String").declare().unwrap();
//! let list = table.interface("java.util.List").type_params(1).declare().unwrap();
//!
//! let factory = TypeFactory::new(&table);
//! let list_of_string = factory
//!     .parameterized_type(list, [TypeDescriptor::Nominal(string)])
//!     .unwrap();
//! assert_eq!(list_of_string.to_string(), "java.util.List<java.lang.String>");
//! ```

#![no_std]
extern crate alloc;

pub mod descriptor;
pub mod host;

mod error;
mod factory;
mod flow;
mod hash;

pub use descriptor::{DescriptorKind, GenericArray, Parameterized, TyList, TypeDescriptor, Wildcard};
pub use error::FactoryError;
pub use factory::TypeFactory;
pub use flow::VisitFlow;
pub use host::{ClassDecl, ClassKind, ClassRef, ClassTable, DeclareError, NominalHandle, TypeHost};

static_assertions::assert_impl_all!(TypeDescriptor<ClassRef>: Send, Sync);
static_assertions::assert_impl_all!(ClassTable: Send, Sync);
