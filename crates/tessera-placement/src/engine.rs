//! Orchestrator — threshold, selection, distribution.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tessera_topology::{Domain, DomainId};

use crate::balance::distribute;
use crate::candidate::Candidate;
use crate::error::{InfeasibleReason, PlacementResult};
use crate::request::PlacementRequest;
use crate::select::select_minimal_domain_set;
use crate::threshold::threshold_for;

/// Final assignment for one selected domain.
///
/// Mirrors the capacity counters of the input tree: `slices` is what this
/// domain received, the with-leader counters are net of the leader slot
/// (`slices_with_leader` is −1 for a domain that hosts only the leader),
/// and the unit counters are scaled by the request's slice size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPlacement {
    pub id: DomainId,
    /// Slices assigned to this domain.
    pub slices: u32,
    /// Whether this domain hosts a leader.
    pub leader: bool,
    /// Assigned slices net of the leader slot.
    pub slices_with_leader: i64,
    /// Assigned capacity in request units (slices × slice size).
    pub units: i64,
    /// Units net of the leader slot.
    pub units_with_leader: i64,
}

/// A complete balanced placement: one record per selected domain, largest
/// assignment first, plus the threshold every domain was guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub assignments: Vec<DomainPlacement>,
    pub threshold: u32,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Total slices assigned across all selected domains.
    pub fn total_slices(&self) -> u64 {
        self.assignments.iter().map(|a| u64::from(a.slices)).sum()
    }

    /// Number of domains hosting a leader.
    pub fn leader_domains(&self) -> usize {
        self.assignments.iter().filter(|a| a.leader).count()
    }

    /// Look up the assignment for a domain.
    pub fn get(&self, id: &DomainId) -> Option<&DomainPlacement> {
        self.assignments.iter().find(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainPlacement> {
        self.assignments.iter()
    }
}

/// Snapshot the balancing level of `starting_domain` as solver candidates.
pub(crate) fn snapshot_level(
    starting_domain: &Domain,
    balance_on_children: bool,
    slice_size: u32,
) -> Vec<Candidate> {
    if balance_on_children {
        starting_domain
            .children()
            .iter()
            .map(|d| Candidate::from_domain(d, slice_size))
            .collect()
    } else {
        starting_domain
            .grandchildren()
            .map(|d| Candidate::from_domain(d, slice_size))
            .collect()
    }
}

/// Compute a balanced placement for `request` under `starting_domain`.
///
/// Selects the smallest set of balancing-level domains that hosts the
/// request, guarantees each of them at least the balance threshold, and
/// places leaders on the domains with the largest with-leader capacity.
/// The caller's tree is never mutated; the result is a standalone set of
/// per-domain assignments.
pub fn place(starting_domain: &Domain, request: &PlacementRequest) -> PlacementResult<Placement> {
    request.validate()?;

    if request.is_empty() {
        debug!(domain = %starting_domain.id, "empty request, nothing to place");
        return Ok(Placement::default());
    }

    let mut candidates =
        snapshot_level(starting_domain, request.balance_on_children, request.slice_size);

    let threshold = match threshold_for(
        starting_domain,
        &candidates,
        request.slice_count,
        request.leader_count,
    ) {
        Ok(threshold) => threshold,
        Err(reason) => {
            warn!(domain = %starting_domain.id, %reason, "request does not fit");
            return Err(reason.into());
        }
    };
    debug!(domain = %starting_domain.id, threshold, "balance threshold computed");

    let selection = select_minimal_domain_set(
        &mut candidates,
        request.slice_count,
        request.leader_count,
        request.slice_size,
        request.prioritize_by_entropy,
    )
    .ok_or(InfeasibleReason::NoOptimalDomainSet)?;
    debug!(
        domain = %starting_domain.id,
        domains = selection.len(),
        "minimal domain set selected"
    );

    let assignments = distribute(
        &candidates,
        selection,
        request.slice_count,
        request.leader_count,
        request.slice_size,
        threshold,
    )?;
    Ok(Placement {
        assignments,
        threshold,
    })
}
