//! The domain tree — capacity aggregations the engine balances over.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TopologyError, TopologyResult};

/// Stable identifier of a topology domain, opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainId(String);

impl DomainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DomainId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for DomainId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node in the topology tree — an aggregation of capacity such as a
/// zone, a rack, or a host.
///
/// Capacity is slice-denominated: `slices` is how many whole slices fit
/// here if no leader lands on this domain, `slices_with_leader` how many
/// fit if one does. Children are owned, so the structure is acyclic by
/// construction; a snapshot is built by the caller per placement cycle and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    /// Depth from the root (root = 0); selects the balancing level.
    pub level: u32,
    /// Capacity in whole slices when no leader is placed here.
    pub slices: u32,
    /// Capacity in whole slices when a leader is placed here.
    pub slices_with_leader: u32,
    /// Leader eligibility: 0 or 1.
    pub leader_slots: u32,
    /// Ordered child domains; empty means leaf.
    pub children: Vec<Domain>,
}

impl Domain {
    /// A childless domain with the given capacity counters.
    pub fn leaf(
        id: impl Into<DomainId>,
        level: u32,
        slices: u32,
        slices_with_leader: u32,
        leader_slots: u32,
    ) -> Self {
        Self {
            id: id.into(),
            level,
            slices,
            slices_with_leader,
            leader_slots,
            children: Vec::new(),
        }
    }

    /// Attach children, returning the modified domain.
    pub fn with_children(mut self, children: Vec<Domain>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children, in insertion order.
    pub fn children(&self) -> &[Domain] {
        &self.children
    }

    /// Children of children, flattened in order.
    pub fn grandchildren(&self) -> impl Iterator<Item = &Domain> {
        self.children.iter().flat_map(|c| c.children.iter())
    }

    /// Total slice capacity over the subtree's leaves.
    pub fn subtree_slices(&self) -> u64 {
        if self.children.is_empty() {
            u64::from(self.slices)
        } else {
            self.children.iter().map(Domain::subtree_slices).sum()
        }
    }

    /// Validate the snapshot: unique ids, child levels one below their
    /// parent, with-leader capacity within plain capacity, leader slots
    /// zero or one.
    pub fn validate(&self) -> TopologyResult<()> {
        let mut seen = HashSet::new();
        self.validate_node(&mut seen)
    }

    fn validate_node<'a>(&'a self, seen: &mut HashSet<&'a DomainId>) -> TopologyResult<()> {
        if !seen.insert(&self.id) {
            return Err(TopologyError::DuplicateId(self.id.clone()));
        }
        if self.slices_with_leader > self.slices {
            return Err(TopologyError::WithLeaderAboveCapacity {
                id: self.id.clone(),
                with_leader: self.slices_with_leader,
                slices: self.slices,
            });
        }
        if self.leader_slots > 1 {
            return Err(TopologyError::LeaderSlotsOutOfRange {
                id: self.id.clone(),
                slots: self.leader_slots,
            });
        }
        for child in &self.children {
            if child.level != self.level + 1 {
                return Err(TopologyError::LevelMismatch {
                    parent: self.id.clone(),
                    parent_level: self.level,
                    child: child.id.clone(),
                    child_level: child.level,
                });
            }
            child.validate_node(seen)?;
        }
        Ok(())
    }
}
