// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ordered access tiers an attacker can hold on a host.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// How much control an attacker has on a host.
///
/// Tiers are totally ordered; a higher tier is a superset of capability.
/// Numeric tier 0 is [`AccessLevel::None`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// No foothold on the host.
    #[default]
    None,
    /// Unprivileged user-level access.
    User,
    /// Full administrative control.
    Root,
}

impl AccessLevel {
    /// All tiers in ascending order.
    pub fn all() -> Vec<Self> {
        vec![AccessLevel::None, AccessLevel::User, AccessLevel::Root]
    }

    /// The numeric tier, 0 being the lowest.
    pub fn tier(self) -> u8 {
        match self {
            AccessLevel::None => 0,
            AccessLevel::User => 1,
            AccessLevel::Root => 2,
        }
    }

    /// Resolve a numeric tier from an action library document.
    pub fn from_tier(tier: u8) -> Result<Self, ValidationError> {
        match tier {
            0 => Ok(AccessLevel::None),
            1 => Ok(AccessLevel::User),
            2 => Ok(AccessLevel::Root),
            other => Err(ValidationError::UnknownAccessTier(other)),
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::None => write!(f, "none"),
            AccessLevel::User => write!(f, "user"),
            AccessLevel::Root => write!(f, "root"),
        }
    }
}
