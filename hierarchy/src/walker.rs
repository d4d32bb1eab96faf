use allocator_api2::alloc::Allocator;
use bumpalo::Bump;
use typegraph_types::TypeHost;

use crate::collect;
use crate::context::TraversalContext;
use crate::visitor::{ElementVisitor, VisitFlow, WalkOutcome};

/// Depth-first traversals of a host's nominal hierarchy.
///
/// The walker borrows its host read-only and holds no other state, so one
/// walker (or many) can serve concurrent calls. The host's root type is never
/// visited.
///
/// # Example
///
/// ```
/// use typegraph_hierarchy::HierarchyWalker;
/// use typegraph_types::ClassTable;
///
/// let mut table = ClassTable::new();
/// let e = table.interface("E").declare().unwrap();
/// let f = table.interface("F").extends(&e).declare().unwrap();
/// let h = table.class("H").implements(&f).implements(&e).declare().unwrap();
///
/// let walker = HierarchyWalker::new(&table);
/// assert_eq!(walker.all_ancestors(&h, false), vec![f, e]);
/// ```
#[derive(Debug)]
pub struct HierarchyWalker<'h, T: TypeHost> {
    host: &'h T,
}

impl<T: TypeHost> Clone for HierarchyWalker<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TypeHost> Copy for HierarchyWalker<'_, T> {}

impl<'h, T: TypeHost> HierarchyWalker<'h, T> {
    pub fn new(host: &'h T) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &'h T {
        self.host
    }

    /// Visit `start` (if `include_self`) and then each superclass, most
    /// derived first, stopping before the root.
    ///
    /// Interfaces and the root itself have no chain: nothing is visited.
    pub fn walk_superclass_chain<V>(
        &self,
        start: &T::Handle,
        include_self: bool,
        visitor: &mut V,
    ) -> WalkOutcome
    where
        V: ElementVisitor<T::Handle> + ?Sized,
    {
        tracing::trace!(start = %start, include_self, "walking superclass chain");

        let mut current = if include_self {
            Some(start.clone())
        } else if self.has_chain(start) {
            self.host.superclass(start)
        } else {
            None
        };
        while let Some(ty) = current {
            if !self.has_chain(&ty) {
                break;
            }
            current = self.host.superclass(&ty);
            if visitor.visit(ty).is_stop() {
                return WalkOutcome::Stopped;
            }
        }
        WalkOutcome::Completed
    }

    /// Visit `start` (if `include_self` and it is an interface) and then every
    /// interface reachable from its declared interfaces, depth-first in
    /// declaration order.
    ///
    /// Each interface is visited at most once per call, at its first
    /// occurrence.
    pub fn walk_interface_lattice<V>(
        &self,
        start: &T::Handle,
        include_self: bool,
        visitor: &mut V,
    ) -> WalkOutcome
    where
        V: ElementVisitor<T::Handle> + ?Sized,
    {
        tracing::trace!(start = %start, include_self, "walking interface lattice");

        let arena = Bump::new();
        let mut context = TraversalContext::new_in(&arena);
        self.lattice_in(start, include_self, &mut context, visitor).into()
    }

    /// The superclass chain of a class followed by its interface lattice, or
    /// just the lattice of an interface.
    ///
    /// The lattice part covers the interfaces `start` declares itself, not
    /// the ones its superclasses declare.
    pub fn walk_all_ancestors<V>(
        &self,
        start: &T::Handle,
        include_self: bool,
        visitor: &mut V,
    ) -> WalkOutcome
    where
        V: ElementVisitor<T::Handle> + ?Sized,
    {
        if self.host.is_interface(start) {
            return self.walk_interface_lattice(start, include_self, visitor);
        }
        match self.walk_superclass_chain(start, include_self, visitor) {
            WalkOutcome::Completed => self.walk_interface_lattice(start, false, visitor),
            WalkOutcome::Stopped => WalkOutcome::Stopped,
        }
    }

    pub fn superclasses(&self, start: &T::Handle, include_self: bool) -> Vec<T::Handle> {
        collect::to_vec(|v| self.walk_superclass_chain(start, include_self, v))
    }

    pub fn interfaces(&self, start: &T::Handle, include_self: bool) -> Vec<T::Handle> {
        collect::to_vec(|v| self.walk_interface_lattice(start, include_self, v))
    }

    pub fn all_ancestors(&self, start: &T::Handle, include_self: bool) -> Vec<T::Handle> {
        collect::to_vec(|v| self.walk_all_ancestors(start, include_self, v))
    }

    /// Whether values of `sub` are assignable to `sup`.
    ///
    /// Checks the superclass chain of `sub` and the interface lattice of every
    /// class on it, sharing one visited set, and stops at the first match.
    pub fn is_subtype_of(&self, sub: &T::Handle, sup: &T::Handle) -> bool {
        if sub == sup || self.host.is_root(sup) {
            return true;
        }

        let arena = Bump::new();
        let mut context = TraversalContext::new_in(&arena);
        let mut matches = |ty: T::Handle| VisitFlow::from(ty != *sup);

        if self.host.is_interface(sub) {
            return self
                .lattice_in(sub, false, &mut context, &mut matches)
                .is_stop();
        }

        let mut current = Some(sub.clone());
        while let Some(ty) = current {
            if !self.has_chain(&ty) {
                break;
            }
            if ty == *sup || self.lattice_in(&ty, false, &mut context, &mut matches).is_stop() {
                return true;
            }
            current = self.host.superclass(&ty);
        }
        false
    }

    /// A class other than the root.
    fn has_chain(&self, ty: &T::Handle) -> bool {
        !self.host.is_interface(ty) && !self.host.is_root(ty)
    }

    fn lattice_in<V, A>(
        &self,
        start: &T::Handle,
        include_self: bool,
        context: &mut TraversalContext<T::Handle, A>,
        visitor: &mut V,
    ) -> VisitFlow
    where
        V: ElementVisitor<T::Handle> + ?Sized,
        A: Allocator,
    {
        if self.host.is_root(start) {
            return VisitFlow::Continue;
        }
        if include_self && self.host.is_interface(start) {
            context.first_visit(start);
            if visitor.visit(start.clone()).is_stop() {
                return VisitFlow::Stop;
            }
        }
        self.descend(start, context, visitor)
    }

    fn descend<V, A>(
        &self,
        ty: &T::Handle,
        context: &mut TraversalContext<T::Handle, A>,
        visitor: &mut V,
    ) -> VisitFlow
    where
        V: ElementVisitor<T::Handle> + ?Sized,
        A: Allocator,
    {
        for interface in self.host.interfaces(ty) {
            if !context.first_visit(interface) {
                continue;
            }
            if visitor.visit(interface.clone()).is_stop() {
                return VisitFlow::Stop;
            }
            if self.descend(interface, context, visitor).is_stop() {
                return VisitFlow::Stop;
            }
        }
        VisitFlow::Continue
    }
}
