//! Runtime failures of variant access and assignment.

use std::error::Error;

/// Error raised by a [`Variant`](crate::Variant) operation.
#[derive(Debug, thiserror::Error)]
pub enum VariantError {
    /// A specific alternative was requested while another one is live.
    #[error("expected alternative `{expected}`, but the variant holds `{found}`")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The variant is empty. `expected` is `None` for visits, which do not
    /// ask for one alternative in particular.
    #[error("accessed an empty variant")]
    EmptyVariantAccess { expected: Option<&'static str> },

    /// Building the new alternative failed after the old one was torn down.
    /// The variant is empty.
    #[error("constructing alternative `{alternative}` failed; the variant was left empty")]
    ConstructionFailure {
        alternative: &'static str,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl VariantError {
    /// True for any access to the wrong alternative, empty included.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            VariantError::TypeMismatch { .. } | VariantError::EmptyVariantAccess { .. }
        )
    }

    pub fn is_empty_access(&self) -> bool {
        matches!(self, VariantError::EmptyVariantAccess { .. })
    }

    pub fn is_construction_failure(&self) -> bool {
        matches!(self, VariantError::ConstructionFailure { .. })
    }
}
