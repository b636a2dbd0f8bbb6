//! Placement request.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, PlacementResult};

/// One balanced-placement request: `slice_count` slices of `slice_size`
/// units each, `leader_count` of which carry the workload leader.
///
/// `balance_on_children` selects the balancing level: the starting
/// domain's children when true, its grandchildren when false.
///
/// `prioritize_by_entropy` is a tie-breaker only: when several
/// equally-small domain sets fit, prefer domains whose child capacity is
/// spread more evenly. It never changes whether a request fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub slice_count: u32,
    pub leader_count: u32,
    pub slice_size: u32,
    pub balance_on_children: bool,
    pub prioritize_by_entropy: bool,
}

impl PlacementRequest {
    /// A request balanced on the starting domain's children, without the
    /// entropy tie-breaker.
    pub fn new(slice_count: u32, leader_count: u32, slice_size: u32) -> Self {
        Self {
            slice_count,
            leader_count,
            slice_size,
            balance_on_children: true,
            prioritize_by_entropy: false,
        }
    }

    /// Reject requests the engine is not defined over.
    pub fn validate(&self) -> PlacementResult<()> {
        if self.slice_size == 0 {
            return Err(PlacementError::ZeroSliceSize);
        }
        Ok(())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slice_count == 0 && self.leader_count == 0
    }
}
