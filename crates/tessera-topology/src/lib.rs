//! tessera-topology — capacity topology snapshots for balanced placement.
//!
//! Models the domain tree a placement request is balanced over: each
//! [`Domain`] aggregates capacity at one level of the physical hierarchy
//! (zone → rack → host), counted in whole slices. Snapshots are built by
//! the caller before each placement cycle, validated once, and read-only
//! afterwards — the engine in `tessera-placement` never writes back into
//! the tree.
//!
//! # Components
//!
//! - **`domain`** — the tree itself: ids, levels, capacity counters,
//!   accessors, validation
//! - **`capacity`** — derived quantities: subtree sums, child-capacity
//!   entropy

pub mod capacity;
pub mod domain;
pub mod error;

pub use capacity::{child_slice_capacities, entropy};
pub use domain::{Domain, DomainId};
pub use error::{TopologyError, TopologyResult};
