//! Greedy largest-first feasibility check.

use tessera_topology::Domain;

use crate::candidate::{sort_by_slices, sort_by_slices_with_leader, Candidate};
use crate::engine::snapshot_level;

/// Outcome of a successful greedy fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GreedyFit {
    /// Minimum number of domains the greedy order needs.
    pub selected_count: u32,
    /// Index of the last domain consumed while placing leaders.
    pub last_with_leader: Option<usize>,
    /// Index of the last domain consumed while placing plain slices.
    pub last: Option<usize>,
}

/// Decide whether `candidates` can host the request by consuming domains
/// largest-first: leader-eligible domains in descending with-leader order
/// until every leader is placed, then the remaining domains in descending
/// plain order. Returns `None` when the request does not fit.
///
/// The count this produces is a lower bound no other feasible selection
/// can beat, and the last-consumed domains cap the balance threshold.
pub(crate) fn greedy_fit(
    candidates: &[Candidate],
    slice_count: u32,
    leader_count: u32,
) -> Option<GreedyFit> {
    let mut remaining_slices = i64::from(slice_count);
    let mut remaining_leaders = i64::from(leader_count);
    let mut selected_count = 0u32;
    let mut last_with_leader = None;
    let mut last = None;

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    let remainder = if leader_count > 0 {
        sort_by_slices_with_leader(&mut order, candidates, true);
        let mut taken = 0;
        while taken < order.len() && remaining_leaders > 0 {
            let candidate = &candidates[order[taken]];
            if candidate.leader_slots == 0 {
                break;
            }
            selected_count += 1;
            last_with_leader = Some(order[taken]);
            remaining_leaders -= i64::from(candidate.leader_slots);
            remaining_slices -= i64::from(candidate.slices_with_leader);
            taken += 1;
        }
        let mut rest = order.split_off(taken);
        sort_by_slices(&mut rest, candidates, true);
        rest
    } else {
        sort_by_slices(&mut order, candidates, true);
        order
    };

    if remaining_leaders > 0 {
        return None;
    }

    for &index in &remainder {
        if remaining_slices <= 0 || candidates[index].slices == 0 {
            break;
        }
        selected_count += 1;
        last = Some(index);
        remaining_slices -= i64::from(candidates[index].slices);
    }
    if remaining_slices > 0 {
        return None;
    }
    Some(GreedyFit {
        selected_count,
        last_with_leader,
        last,
    })
}

/// Minimum number of balancing-level domains the request needs under the
/// greedy largest-first rule, or `None` when it cannot fit at all.
pub fn minimal_domain_count(
    starting_domain: &Domain,
    slice_count: u32,
    leader_count: u32,
    balance_on_children: bool,
) -> Option<u32> {
    let candidates = snapshot_level(starting_domain, balance_on_children, 1);
    greedy_fit(&candidates, slice_count, leader_count).map(|fit| fit.selected_count)
}
