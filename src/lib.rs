//! Typegraph - structural generic type descriptors and nominal hierarchy walks
//!
//! # Overview
//!
//! Typegraph models the generic types of a host type system (parameterized,
//! wildcard, generic array and intersection types) independently of that
//! host, and walks the host's nominal hierarchy with early-stopping visitors.
//!
//! - [`types`]: descriptors, the [`TypeFactory`], and the [`TypeHost`]
//!   capability trait with an in-memory [`ClassTable`] host
//! - [`hierarchy`]: the [`HierarchyWalker`] and its collectors
//! - [`error_renderer`]: miette reports for construction failures
//!
//! # Quick Start
//!
//! ```
//! use typegraph::{ClassTable, HierarchyWalker, TypeDescriptor, TypeFactory};
//!
//! let mut table = ClassTable::new();
//! let string = table.class("java.lang.String").declare().unwrap();
//! let iterable = table.interface("java.lang.Iterable").type_params(1).declare().unwrap();
//! let list = table
//!     .interface("java.util.List")
//!     .type_params(1)
//!     .extends(&iterable)
//!     .declare()
//!     .unwrap();
//!
//! // Build List<? extends String>
//! let factory = TypeFactory::new(&table);
//! let bound = factory.upper_bounded_wildcard([TypeDescriptor::Nominal(string)]);
//! let ty = factory.parameterized_type(list.clone(), [bound]).unwrap();
//! assert_eq!(ty.to_string(), "java.util.List<? extends java.lang.String>");
//!
//! // Walk List's super-interfaces
//! let walker = HierarchyWalker::new(&table);
//! assert_eq!(walker.interfaces(&list, false), vec![iterable]);
//! ```

pub use typegraph_hierarchy as hierarchy;
pub use typegraph_types as types;

pub use typegraph_hierarchy::{
    ElementVisitor, HierarchyWalker, SharedSink, VisitFlow, WalkOutcome, collect,
};
pub use typegraph_types::{
    ClassRef, ClassTable, FactoryError, NominalHandle, TypeDescriptor, TypeFactory, TypeHost,
};

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, TypeConstructionReport, render_error, render_error_to};
