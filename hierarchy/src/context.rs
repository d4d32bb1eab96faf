use core::hash::Hash;

use allocator_api2::alloc::Allocator;
use hashbrown::{DefaultHashBuilder, HashSet};

/// Per-call state of an interface lattice traversal.
///
/// Owns the set of interfaces already offered to the visitor. One context is
/// created for each top-level call and passed by `&mut` through the whole
/// recursive descent, so sibling branches share it. The set lives in the
/// caller's allocator, typically a [`bumpalo::Bump`] dropped with the call.
pub struct TraversalContext<H, A: Allocator> {
    visited: HashSet<H, DefaultHashBuilder, A>,
}

impl<H: Eq + Hash, A: Allocator> TraversalContext<H, A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            visited: HashSet::with_hasher_in(DefaultHashBuilder::default(), alloc),
        }
    }

    /// Records `handle`; false if it was already recorded.
    pub fn first_visit(&mut self, handle: &H) -> bool
    where
        H: Clone,
    {
        if self.visited.contains(handle) {
            return false;
        }
        self.visited.insert(handle.clone())
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
