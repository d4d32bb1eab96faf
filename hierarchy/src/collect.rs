//! Adapters from push-style traversals to collections.
//!
//! Every collector takes a *driver*: a closure that receives the collector's
//! visitor and runs one traversal with it, for example
//! `|v| walker.walk_interface_lattice(&ty, true, v)`. Only [`feed_sink`] hands
//! back what the driver returns.
//!
//! ```
//! use typegraph_hierarchy::{HierarchyWalker, collect};
//! use typegraph_types::ClassTable;
//!
//! let mut table = ClassTable::new();
//! let a = table.class("A").declare().unwrap();
//! let d = table.class("D").extends(&a).declare().unwrap();
//! let walker = HierarchyWalker::new(&table);
//!
//! let chain = collect::to_vec(|v| walker.walk_superclass_chain(&d, true, v));
//! assert_eq!(chain, vec![d, a]);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::visitor::{ElementVisitor, VisitFlow};

/// Every element, in visit order.
pub fn to_vec<E, R>(driver: impl FnOnce(&mut dyn ElementVisitor<E>) -> R) -> Vec<E> {
    collect_into(Vec::new(), driver)
}

/// Every element in any [`Extend`] container, in visit order.
pub fn collect_into<E, C, R>(mut container: C, driver: impl FnOnce(&mut dyn ElementVisitor<E>) -> R) -> C
where
    C: Extend<E>,
{
    driver(&mut |element: E| -> VisitFlow {
        container.extend(Some(element));
        VisitFlow::Continue
    });
    container
}

/// Fold elements into `init`.
///
/// `accumulate` decides after each element whether the traversal continues;
/// it may return a [`VisitFlow`] or a plain `bool` (`true` continues).
///
/// ```
/// use typegraph_hierarchy::{VisitFlow, collect};
///
/// let first_two = collect::collect_with(
///     Vec::new(),
///     |acc: &mut Vec<u32>, n| {
///         acc.push(n);
///         acc.len() < 2
///     },
///     |v| {
///         for n in 1..=5 {
///             if v.visit(n) == VisitFlow::Stop {
///                 break;
///             }
///         }
///     },
/// );
/// assert_eq!(first_two, vec![1, 2]);
/// ```
pub fn collect_with<E, C, A, F, R>(
    init: C,
    mut accumulate: A,
    driver: impl FnOnce(&mut dyn ElementVisitor<E>) -> R,
) -> C
where
    A: FnMut(&mut C, E) -> F,
    F: Into<VisitFlow>,
{
    let mut acc = init;
    driver(&mut |element: E| -> VisitFlow { accumulate(&mut acc, element).into() });
    acc
}

/// Sink that several traversals, possibly on different threads, push into
/// at the same time.
///
/// Elements from one traversal keep their relative order; elements from
/// different traversals interleave arbitrarily.
#[derive(Debug)]
pub struct SharedSink<E> {
    items: Mutex<Vec<E>>,
}

impl<E> SharedSink<E> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, element: E) {
        self.lock().push(element);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.lock().clone()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.items.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Pushes are atomic under the lock, so a poisoned vector is still whole.
    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E> Default for SharedSink<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every element in a fresh [`SharedSink`].
pub fn to_sink<E, R>(driver: impl FnOnce(&mut dyn ElementVisitor<E>) -> R) -> SharedSink<E> {
    let sink = SharedSink::new();
    feed_sink(&sink, driver);
    sink
}

/// Push every element into an existing sink and return the driver's result.
pub fn feed_sink<E, R>(sink: &SharedSink<E>, driver: impl FnOnce(&mut dyn ElementVisitor<E>) -> R) -> R {
    driver(&mut |element: E| -> VisitFlow {
        sink.push(element);
        VisitFlow::Continue
    })
}
