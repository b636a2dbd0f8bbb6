//! Topology validation errors.

use thiserror::Error;

use crate::domain::DomainId;

/// Errors reported when a topology snapshot fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("duplicate domain id: {0}")]
    DuplicateId(DomainId),

    #[error(
        "domain {child}: level {child_level} does not follow parent {parent} at level {parent_level}"
    )]
    LevelMismatch {
        parent: DomainId,
        parent_level: u32,
        child: DomainId,
        child_level: u32,
    },

    #[error("domain {id}: with-leader capacity {with_leader} exceeds plain capacity {slices}")]
    WithLeaderAboveCapacity {
        id: DomainId,
        with_leader: u32,
        slices: u32,
    },

    #[error("domain {id}: leader slots must be 0 or 1, got {slots}")]
    LeaderSlotsOutOfRange { id: DomainId, slots: u32 },
}

pub type TopologyResult<T> = Result<T, TopologyError>;
