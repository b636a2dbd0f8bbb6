//! Balance threshold — the guaranteed per-domain minimum.

use tessera_topology::Domain;

use crate::candidate::Candidate;
use crate::engine::snapshot_level;
use crate::error::InfeasibleReason;
use crate::greedy::greedy_fit;

/// Compute the threshold over an already-snapshotted balancing level.
///
/// The threshold is the floor of the mean over the greedy selection,
/// clamped to the capacity of the smallest domain that selection had to
/// take. The distributor later guarantees every selected domain at least
/// this many slices.
pub(crate) fn threshold_for(
    starting_domain: &Domain,
    candidates: &[Candidate],
    slice_count: u32,
    leader_count: u32,
) -> Result<u32, InfeasibleReason> {
    if slice_count == 0 && leader_count == 0 {
        return Ok(0);
    }
    if starting_domain.slices_with_leader < slice_count
        || starting_domain.leader_slots < leader_count
    {
        return Err(InfeasibleReason::StartingDomainTooSmall);
    }

    let fit =
        greedy_fit(candidates, slice_count, leader_count).ok_or(InfeasibleReason::NoOptimalDomainSet)?;

    let mut threshold = slice_count / fit.selected_count;
    if let Some(index) = fit.last_with_leader {
        threshold = threshold.min(candidates[index].slices_with_leader);
    }
    if let Some(index) = fit.last {
        threshold = threshold.min(candidates[index].slices);
    }
    Ok(threshold)
}

/// The balance threshold for a request at `starting_domain`: the largest
/// guaranteed minimum number of slices every selected domain receives in
/// a feasible balanced placement. `None` when the request cannot fit.
pub fn balance_threshold(
    starting_domain: &Domain,
    slice_count: u32,
    leader_count: u32,
    balance_on_children: bool,
) -> Option<u32> {
    let candidates = snapshot_level(starting_domain, balance_on_children, 1);
    threshold_for(starting_domain, &candidates, slice_count, leader_count).ok()
}
