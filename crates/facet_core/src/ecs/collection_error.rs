use std::fmt::Debug;
use thiserror::Error;

/// Precondition failures on collection membership.
///
/// No partial update happens when one of these is returned; the input
/// collection is untouched and no new collection is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError<I: Debug> {
    #[error("component {id:?} is already present")]
    DuplicateComponent { id: I },

    #[error("component {id:?} is not present")]
    MissingComponent { id: I },

    #[error("component {id:?} is not part of the collection's universe")]
    UnknownComponent { id: I },
}

impl<I: Debug + Copy> CollectionError<I> {
    /// The component id the failed operation targeted.
    pub fn id(&self) -> I {
        match self {
            Self::DuplicateComponent { id }
            | Self::MissingComponent { id }
            | Self::UnknownComponent { id } => *id,
        }
    }
}
