// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for descriptor construction and catalog assembly.

use thiserror::Error;

/// A descriptor parameter violated an invariant.
///
/// Raised synchronously at construction; there is no partial state and no
/// retry. Out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("action name must not be empty")]
    EmptyName,
    #[error("cost must be a finite non-negative number, got {0}")]
    InvalidCost(f64),
    #[error("duration must be a finite non-negative number, got {0}")]
    InvalidDuration(f64),
    #[error("success probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("unknown access tier {0}")]
    UnknownAccessTier(u8),
}

/// A set of otherwise-valid descriptors could not form a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("duplicate action name {0:?} in catalog")]
    DuplicateName(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
