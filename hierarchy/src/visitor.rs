//! The push-style visitor protocol shared by every traversal.

pub use typegraph_types::VisitFlow;

/// Receives elements pushed by a traversal.
///
/// Returning [`VisitFlow::Stop`] ends the traversal immediately, including
/// every enclosing recursive step. Any `FnMut(E) -> VisitFlow` closure is a
/// visitor.
pub trait ElementVisitor<E> {
    fn visit(&mut self, element: E) -> VisitFlow;
}

impl<E, F> ElementVisitor<E> for F
where
    F: FnMut(E) -> VisitFlow,
{
    fn visit(&mut self, element: E) -> VisitFlow {
        self(element)
    }
}

/// How a top-level traversal ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WalkOutcome {
    /// Every reachable element was offered to the visitor.
    Completed,
    /// The visitor asked to stop.
    Stopped,
}

impl WalkOutcome {
    pub fn is_completed(self) -> bool {
        matches!(self, WalkOutcome::Completed)
    }

    pub fn is_stopped(self) -> bool {
        matches!(self, WalkOutcome::Stopped)
    }
}

impl From<VisitFlow> for WalkOutcome {
    fn from(flow: VisitFlow) -> Self {
        match flow {
            VisitFlow::Continue => WalkOutcome::Completed,
            VisitFlow::Stop => WalkOutcome::Stopped,
        }
    }
}
