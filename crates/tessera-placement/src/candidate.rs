//! Solver working set — per-domain snapshots and their orderings.

use std::cmp::Ordering;

use tessera_topology::{child_slice_capacities, entropy, Domain, DomainId};

/// Snapshot of one balancing-level domain, taken at the start of a call.
///
/// Unit counters are the slice counters scaled by the request's slice
/// size, so the selection DP never sees slice sizing. Child entropy is
/// precomputed so sorting does not recalculate it.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub id: DomainId,
    pub slices: u32,
    pub slices_with_leader: u32,
    pub leader_slots: u32,
    pub units: i64,
    pub units_with_leader: i64,
    pub child_entropy: f64,
}

impl Candidate {
    pub fn from_domain(domain: &Domain, slice_size: u32) -> Self {
        Self {
            id: domain.id.clone(),
            slices: domain.slices,
            slices_with_leader: domain.slices_with_leader,
            leader_slots: domain.leader_slots,
            units: i64::from(domain.slices) * i64::from(slice_size),
            units_with_leader: i64::from(domain.slices_with_leader) * i64::from(slice_size),
            child_entropy: entropy(&child_slice_capacities(domain)),
        }
    }
}

/// Sort `order` (indices into `candidates`) by plain slice capacity.
/// Ids break ties so the order is total and reproducible.
pub(crate) fn sort_by_slices(order: &mut [usize], candidates: &[Candidate], descending: bool) {
    order.sort_by(|&a, &b| {
        let (a, b) = (&candidates[a], &candidates[b]);
        let by_capacity = if descending {
            b.slices.cmp(&a.slices)
        } else {
            a.slices.cmp(&b.slices)
        };
        by_capacity.then_with(|| a.id.cmp(&b.id))
    });
}

/// Sort `order` by with-leader capacity, ties by plain capacity, then id.
pub(crate) fn sort_by_slices_with_leader(
    order: &mut [usize],
    candidates: &[Candidate],
    descending: bool,
) {
    order.sort_by(|&a, &b| {
        let (a, b) = (&candidates[a], &candidates[b]);
        let by_capacity = if descending {
            b.slices_with_leader
                .cmp(&a.slices_with_leader)
                .then_with(|| b.slices.cmp(&a.slices))
        } else {
            a.slices_with_leader
                .cmp(&b.slices_with_leader)
                .then_with(|| a.slices.cmp(&b.slices))
        };
        by_capacity.then_with(|| a.id.cmp(&b.id))
    });
}

/// Reorder candidates in place: descending capacity, ties by descending
/// child-capacity entropy, then id.
pub(crate) fn sort_by_capacity_and_entropy(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.slices
            .cmp(&a.slices)
            .then_with(|| {
                b.child_entropy
                    .partial_cmp(&a.child_entropy)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.id.cmp(&b.id))
    });
}
