use thiserror::Error;

use crate::descriptor::TypeDescriptor;
use crate::host::NominalHandle;

/// Invalid combination of inputs to a [`TypeFactory`](crate::TypeFactory)
/// constructor.
///
/// These are programmer errors, reported synchronously before any descriptor
/// exists. Retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError<H: NominalHandle> {
    /// Argument count differs from the raw type's declared parameter count.
    #[error("type parameter count mismatch of {raw}: {actual} vs {expected}")]
    ArgumentCountMismatch { raw: H, expected: usize, actual: usize },

    /// The owner's raw type is not the raw type's enclosing type.
    #[error("owner {owner} doesn't match the enclosing type of {raw}")]
    OwnerMismatch {
        raw: H,
        enclosing: Option<H>,
        owner: TypeDescriptor<H>,
    },

    /// The owner is present but is not a parameterized type.
    #[error("unknown owner type {owner} of {raw}")]
    UnsupportedOwner { raw: H, owner: TypeDescriptor<H> },
}

impl<H: NominalHandle> FactoryError<H> {
    /// Raw type the failed construction was about.
    pub fn raw(&self) -> &H {
        match self {
            FactoryError::ArgumentCountMismatch { raw, .. }
            | FactoryError::OwnerMismatch { raw, .. }
            | FactoryError::UnsupportedOwner { raw, .. } => raw,
        }
    }
}
