//! tessera-placement — topology-aware balanced placement.
//!
//! The algorithmic core of the batch scheduler: given a capacity topology
//! snapshot and a request for `slice_count` equally-sized slices (plus
//! optionally `leader_count` leaders), pick the smallest set of domains
//! at one balancing level and spread the slices across them as evenly as
//! a provable threshold allows.
//!
//! A call runs threshold → selection → distribution:
//!
//! - **`greedy`** — largest-first feasibility witness; bounds the number
//!   of domains any solution needs
//! - **`threshold`** — the guaranteed per-domain minimum slice count
//! - **selection** — a dynamic program that picks exactly that many
//!   domains, consuming leaders and slice units as exactly as reachable
//! - **distribution** — threshold for everyone, leaders on the largest
//!   with-leader domains, extras spilled in stable order
//! - **`engine`** — the [`place`] entry point tying the stages together
//!
//! The engine reads the caller's tree and returns standalone per-domain
//! assignments; it performs no I/O and keeps no state between calls, so
//! one snapshot can back several speculative placements.

mod balance;
mod candidate;
mod select;

pub mod engine;
pub mod error;
pub mod greedy;
pub mod request;
pub mod threshold;

pub use engine::{place, DomainPlacement, Placement};
pub use error::{InfeasibleReason, PlacementError, PlacementResult};
pub use greedy::minimal_domain_count;
pub use request::PlacementRequest;
pub use threshold::balance_threshold;
