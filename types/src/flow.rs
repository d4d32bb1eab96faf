/// Control flow signal returned by every visitor in the workspace.
///
/// `Continue` keeps the traversal going; `Stop` aborts it immediately and is
/// propagated unchanged through all enclosing recursive calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitFlow {
    Continue,
    Stop,
}

impl VisitFlow {
    pub fn is_continue(self) -> bool {
        matches!(self, VisitFlow::Continue)
    }

    pub fn is_stop(self) -> bool {
        matches!(self, VisitFlow::Stop)
    }
}

/// `true` continues, `false` stops.
impl From<bool> for VisitFlow {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            VisitFlow::Continue
        } else {
            VisitFlow::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(VisitFlow::from(true), VisitFlow::Continue);
        assert_eq!(VisitFlow::from(false), VisitFlow::Stop);
        assert!(VisitFlow::Stop.is_stop());
        assert!(VisitFlow::Continue.is_continue());
    }
}
