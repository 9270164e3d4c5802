use crate::data_structures::Route;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JunctionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JunctionError {
    #[error("Invalid way {approach}: junction has {n_ways} ways")]
    InvalidApproach { approach: usize, n_ways: usize },

    #[error("Way {approach} has invalid light {offset} (expected 1..{n_ways})")]
    InvalidOffset {
        approach: usize,
        offset: usize,
        n_ways: usize,
    },

    #[error("A junction needs at least 2 ways, got {n_ways}")]
    JunctionTooSmall { n_ways: usize },

    #[error("Cannot infer junction size from an empty set of green lights")]
    EmptyPermissions,

    #[error("Way {approach} has no green light {offset}")]
    NotFound { approach: usize, offset: usize },

    #[error("Route {0} is already permitted")]
    AlreadyPermitted(Route),

    #[error("Route {0} starts and ends at the same way")]
    InvalidRoute(Route),
}

impl JunctionError {
    /// True for the errors raised while validating a permission set or junction size.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            JunctionError::InvalidApproach { .. }
                | JunctionError::InvalidOffset { .. }
                | JunctionError::JunctionTooSmall { .. }
                | JunctionError::EmptyPermissions
        )
    }
}
