//! Even distribution of slices over the selected domains.

use tracing::debug;

use crate::candidate::{sort_by_slices_with_leader, Candidate};
use crate::engine::DomainPlacement;
use crate::error::{InfeasibleReason, PlacementError};

/// Give every selected domain the threshold, hand leaders to the domains
/// with the largest with-leader capacity, and spill the extra slices in
/// the same order, each domain clamped to its capacity.
pub(crate) fn distribute(
    candidates: &[Candidate],
    mut selection: Vec<usize>,
    slice_count: u32,
    leader_count: u32,
    slice_size: u32,
    threshold: u32,
) -> Result<Vec<DomainPlacement>, PlacementError> {
    let floor_total = i64::from(threshold) * selection.len() as i64;
    if i64::from(slice_count) < floor_total {
        return Err(InfeasibleReason::BelowThreshold.into());
    }

    sort_by_slices_with_leader(&mut selection, candidates, true);

    let mut extra_left = i64::from(slice_count) - floor_total;
    let mut leaders_left = leader_count;
    let mut placements = Vec::with_capacity(selection.len());

    for &index in &selection {
        let candidate = &candidates[index];
        let leader;
        let taken;
        if leaders_left > 0 {
            taken = (i64::from(candidate.slices_with_leader) - i64::from(threshold)).min(extra_left);
            leader = true;
            leaders_left -= 1;
        } else if extra_left > 0 {
            taken = (i64::from(candidate.slices) - i64::from(threshold)).min(extra_left);
            leader = false;
        } else {
            taken = 0;
            leader = false;
        }

        let slices = (i64::from(threshold) + taken) as u32;
        let units = i64::from(slices) * i64::from(slice_size);
        debug!(domain = %candidate.id, slices, leader, "assigned slices");
        placements.push(DomainPlacement {
            id: candidate.id.clone(),
            slices,
            leader,
            slices_with_leader: i64::from(slices) - i64::from(u32::from(leader)),
            units,
            units_with_leader: units - i64::from(u32::from(leader)),
        });
        extra_left -= taken;
    }

    if extra_left > 0 || leaders_left > 0 {
        return Err(PlacementError::ResidualUnplaced {
            residual_slices: extra_left.max(0),
            residual_leaders: leaders_left,
        });
    }
    Ok(placements)
}
