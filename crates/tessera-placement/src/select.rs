//! Minimal domain-set selection.

use std::collections::BTreeMap;

use crate::candidate::{sort_by_capacity_and_entropy, Candidate};
use crate::greedy::greedy_fit;

/// Pick the smallest domain set that hosts the request, preferring the
/// selection that consumes leaders and slice units most exactly.
///
/// Runs a dynamic program over (domains used, leaders remaining, units
/// remaining). The greedy pass bounds the number of domains, which keeps
/// the state space small; each reached state keeps the first selection
/// that produced it, so the pre-sorted candidate order decides ties.
/// Remaining values are signed: units may overshoot below zero, and the
/// winner is the cell with the largest non-positive leader deficit, then
/// the largest non-positive unit deficit within it.
///
/// Candidates may be reordered (entropy tie-breaking); returned indices
/// refer to the final order. `None` when no fitting set exists.
pub(crate) fn select_minimal_domain_set(
    candidates: &mut [Candidate],
    slice_count: u32,
    leader_count: u32,
    slice_size: u32,
    prioritize_by_entropy: bool,
) -> Option<Vec<usize>> {
    let fit = greedy_fit(candidates, slice_count, leader_count)?;
    let optimal = fit.selected_count as usize;

    if prioritize_by_entropy {
        sort_by_capacity_and_entropy(candidates);
    }

    // layers[i] maps (leaders remaining, units remaining) after taking
    // `i` domains to the first selection that reached that state.
    let mut layers: Vec<BTreeMap<(i64, i64), Vec<usize>>> = vec![BTreeMap::new(); optimal + 1];
    layers[0].insert(
        (
            i64::from(leader_count),
            i64::from(slice_count) * i64::from(slice_size),
        ),
        Vec::new(),
    );

    for (index, candidate) in candidates.iter().enumerate() {
        for i in (1..=optimal).rev() {
            let (before, after) = layers.split_at_mut(i);
            let previous = &before[i - 1];
            let current = &mut after[0];
            for (&(leaders, units), selection) in previous {
                if leaders <= 0 && units <= 0 {
                    continue;
                }
                // Take this domain with a leader.
                if leaders > 0 && candidate.leader_slots > 0 {
                    let key = (
                        leaders - i64::from(candidate.leader_slots),
                        units - candidate.units_with_leader,
                    );
                    if !current.contains_key(&key) {
                        let mut next = selection.clone();
                        next.push(index);
                        current.insert(key, next);
                    }
                }
                // Take this domain without a leader.
                if candidate.slices > 0 {
                    let key = (leaders, units - candidate.units);
                    if !current.contains_key(&key) {
                        let mut next = selection.clone();
                        next.push(index);
                        current.insert(key, next);
                    }
                }
            }
        }
    }

    let final_layer = &layers[optimal];
    let best_leaders = final_layer
        .keys()
        .map(|&(leaders, _)| leaders)
        .filter(|&leaders| leaders <= 0)
        .max()?;
    final_layer
        .iter()
        .filter(|&(&(leaders, units), _)| leaders == best_leaders && units <= 0)
        .max_by_key(|&(&(_, units), _)| units)
        .map(|(_, selection)| selection.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_topology::Domain;

    fn host(id: &str, slices: u32, with_leader: u32, leader_slots: u32) -> Candidate {
        Candidate::from_domain(&Domain::leaf(id, 2, slices, with_leader, leader_slots), 1)
    }

    fn ids(candidates: &[Candidate], selection: &[usize]) -> Vec<String> {
        selection
            .iter()
            .map(|&i| candidates[i].id.as_str().to_owned())
            .collect()
    }

    #[test]
    fn selects_exact_fit_pair() {
        let mut candidates = vec![host("a", 5, 5, 0), host("b", 5, 5, 0)];

        let selection = select_minimal_domain_set(&mut candidates, 10, 0, 1, false).unwrap();
        assert_eq!(ids(&candidates, &selection), vec!["a", "b"]);
    }

    #[test]
    fn uses_the_greedy_optimal_count() {
        let mut candidates = vec![
            host("a", 4, 4, 0),
            host("b", 4, 4, 0),
            host("c", 4, 4, 0),
            host("d", 4, 4, 0),
        ];

        let selection = select_minimal_domain_set(&mut candidates, 10, 0, 1, false).unwrap();
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn prefers_least_overshoot() {
        // One domain suffices; the DP picks the one that lands exactly.
        let mut candidates = vec![host("a", 9, 9, 0), host("b", 6, 6, 0)];

        let selection = select_minimal_domain_set(&mut candidates, 6, 0, 1, false).unwrap();
        assert_eq!(ids(&candidates, &selection), vec!["b"]);
    }

    #[test]
    fn earlier_candidate_wins_ties() {
        let mut candidates = vec![host("b", 5, 5, 0), host("a", 5, 5, 0)];

        let selection = select_minimal_domain_set(&mut candidates, 5, 0, 1, false).unwrap();
        assert_eq!(ids(&candidates, &selection), vec!["b"]);
    }

    #[test]
    fn leader_transition_spends_with_leader_units() {
        let mut candidates = vec![host("a", 5, 4, 1), host("b", 5, 4, 0)];

        let selection = select_minimal_domain_set(&mut candidates, 7, 1, 1, false).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(ids(&candidates, &selection), vec!["a", "b"]);
    }

    #[test]
    fn infeasible_request_selects_nothing() {
        let mut candidates = vec![host("a", 2, 2, 0), host("b", 2, 2, 0)];
        assert_eq!(select_minimal_domain_set(&mut candidates, 5, 0, 1, false), None);
    }

    #[test]
    fn entropy_reorder_changes_the_tie_winner() {
        let even = Domain::leaf("even", 1, 8, 8, 0).with_children(vec![
            Domain::leaf("even/h0", 2, 4, 4, 1),
            Domain::leaf("even/h1", 2, 4, 4, 1),
        ]);
        let skewed = Domain::leaf("skewed", 1, 8, 8, 0).with_children(vec![
            Domain::leaf("skewed/h0", 2, 8, 8, 1),
            Domain::leaf("skewed/h1", 2, 0, 0, 1),
        ]);

        let mut in_order = vec![
            Candidate::from_domain(&skewed, 1),
            Candidate::from_domain(&even, 1),
        ];
        let selection = select_minimal_domain_set(&mut in_order, 8, 0, 1, false).unwrap();
        assert_eq!(ids(&in_order, &selection), vec!["skewed"]);

        let mut reordered = vec![
            Candidate::from_domain(&skewed, 1),
            Candidate::from_domain(&even, 1),
        ];
        let selection = select_minimal_domain_set(&mut reordered, 8, 0, 1, true).unwrap();
        assert_eq!(ids(&reordered, &selection), vec!["even"]);
    }

    #[test]
    fn slice_size_scales_the_unit_ledger() {
        let mut candidates = vec![host("a", 3, 3, 0), host("b", 3, 3, 0)];

        let selection = select_minimal_domain_set(&mut candidates, 6, 0, 4, false).unwrap();
        assert_eq!(selection.len(), 2);
    }
}
