use crate::types::TypeId;

/// Why a type parameter has no core type.
///
/// Every variant means the same thing to the checker: operations that need
/// a core type are not statically safe. The variants only feed diagnostics.
/// Term indices count from zero in enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoCoreType {
    #[error("type set is empty")]
    EmptyTypeSet,

    #[error("type set is unrestricted")]
    Unrestricted,

    #[error("term {index} has no valid underlying type")]
    InvalidTerm { index: usize },

    /// `acc` is the representative of the terms before `index`; string-aware
    /// folds report `string` in place of the byte-slice stand-in.
    #[error("term {index} has a different shape than the preceding terms")]
    Mismatch {
        index: usize,
        acc: TypeId,
        term: TypeId,
    },

    #[error("term {index} restricts channel direction opposite to the preceding terms")]
    DirectionConflict {
        index: usize,
        acc: TypeId,
        term: TypeId,
    },
}

impl NoCoreType {
    /// Index of the term that caused the failure, if a specific one did.
    pub fn term_index(&self) -> Option<usize> {
        match self {
            NoCoreType::EmptyTypeSet | NoCoreType::Unrestricted => None,
            NoCoreType::InvalidTerm { index }
            | NoCoreType::Mismatch { index, .. }
            | NoCoreType::DirectionConflict { index, .. } => Some(*index),
        }
    }
}
