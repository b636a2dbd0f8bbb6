//! Placement engine error types.

use thiserror::Error;

/// The request cannot be satisfied on the given topology.
///
/// This is the engine's normal negative result — the caller retries at a
/// higher topology level or rejects the workload. Diagnostics keep stable
/// prefixes so callers can surface them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InfeasibleReason {
    /// The starting domain's own counters cannot cover the request.
    #[error("TAS Balanced Placement Error: Cannot fit on starting domain")]
    StartingDomainTooSmall,

    /// No subset of the balancing level hosts the request.
    #[error("TAS Balanced Placement Error: Cannot find optimal domain set to fit")]
    NoOptimalDomainSet,

    /// The selection cannot give every domain the balance threshold.
    #[error("TAS Balanced Placement Error: Not enough slices to meet the threshold")]
    BelowThreshold,
}

/// Errors returned by [`place`](crate::engine::place).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Caller bug: the request failed validation.
    #[error("slice size must be at least 1")]
    ZeroSliceSize,

    /// Normal negative result: the request does not fit.
    #[error(transparent)]
    Infeasible(#[from] InfeasibleReason),

    /// The distributor was left with residue after the solver claimed a
    /// fitting selection. Indicates a bug in the engine itself.
    #[error(
        "TAS Balanced Placement Error: Not all slices or leaders could be placed \
         ({residual_slices} slices, {residual_leaders} leaders left over)"
    )]
    ResidualUnplaced {
        residual_slices: i64,
        residual_leaders: u32,
    },
}

pub type PlacementResult<T> = Result<T, PlacementError>;
