//! Traversal of a host's nominal type hierarchy.
//!
//! [`HierarchyWalker`] enumerates the superclass chain and the interface
//! lattice of a type, pushing each handle into an [`ElementVisitor`] that can
//! stop the walk at any point. The [`collect`] module turns those push-style
//! walks into vectors, shared sinks and arbitrary accumulators.
//!
//! # Example
//!
//! ```
//! use typegraph_hierarchy::{HierarchyWalker, VisitFlow, WalkOutcome};
//! use typegraph_types::{ClassRef, ClassTable};
//!
//! let mut table = ClassTable::new();
//! let a = table.class("A").declare().unwrap();
//! let d = table.class("D").extends(&a).declare().unwrap();
//!
//! let walker = HierarchyWalker::new(&table);
//! let mut names = Vec::new();
//! let outcome = walker.walk_superclass_chain(&d, true, &mut |ty: ClassRef| {
//!     names.push(ty.to_string());
//!     VisitFlow::Continue
//! });
//!
//! assert_eq!(outcome, WalkOutcome::Completed);
//! assert_eq!(names, ["D", "A"]);
//! ```

pub mod collect;

mod context;
mod visitor;
mod walker;

pub use collect::SharedSink;
pub use context::TraversalContext;
pub use visitor::{ElementVisitor, VisitFlow, WalkOutcome};
pub use walker::HierarchyWalker;
