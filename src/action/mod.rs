// SPDX-License-Identifier: PMPL-1.0-or-later

//! The attacker action taxonomy.
//!
//! A closed, tagged set of action kinds sharing one read-only contract
//! (the [`Descriptor`] trait). Precondition-bearing kinds (exploit,
//! privilege escalation, denial-of-service) add optional exact-match
//! filters and an access grant; scans are fixed-name reconnaissance
//! actions with no narrowing beyond the base contract.
//!
//! Every kind is built from an explicit parameter struct (`ExploitSpec`,
//! `EscalationSpec`, `DosSpec`, `ScanSpec`) whose `build()` validates the
//! base-contract invariants. Deserialization routes through the same
//! parameter structs, so no path yields an unvalidated descriptor.

pub mod dos;
pub mod escalation;
pub mod exploit;
pub mod scan;

pub use dos::{DenialOfService, DosSpec};
pub use escalation::{EscalationSpec, PrivilegeEscalation};
pub use exploit::{Exploit, ExploitSpec};
pub use scan::{Scan, ScanKind, ScanSpec};

use crate::access::AccessLevel;
use crate::error::ValidationError;
use crate::target::TargetProfile;
use serde::{Deserialize, Serialize};

/// The read-only contract every action kind satisfies.
///
/// An engine holding "an action" needs only these accessors; it pattern
/// matches on [`Action`] when it needs variant-specific precondition
/// fields. All methods are pure reads on immutable values.
pub trait Descriptor {
    /// Identifier of the action kind. Fixed per scan kind, caller-supplied
    /// for exploits, escalations, and denial-of-service actions.
    fn name(&self) -> &str;

    /// Non-negative resource cost of attempting the action.
    fn cost(&self) -> f64;

    /// Non-negative time the action occupies once started.
    fn duration(&self) -> f64;

    /// Probability in [0, 1] that the action succeeds given its
    /// preconditions already hold.
    fn prob(&self) -> f64;

    /// Minimum access the attacker must already hold on the target.
    fn req_access(&self) -> AccessLevel;
}

/// One attacker action of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Exploit(Exploit),
    PrivilegeEscalation(PrivilegeEscalation),
    DenialOfService(DenialOfService),
    Scan(Scan),
}

impl Action {
    pub fn is_exploit(&self) -> bool {
        matches!(self, Action::Exploit(_))
    }

    pub fn is_privilege_escalation(&self) -> bool {
        matches!(self, Action::PrivilegeEscalation(_))
    }

    pub fn is_denial_of_service(&self) -> bool {
        matches!(self, Action::DenialOfService(_))
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, Action::Scan(_))
    }

    /// Access tier granted on success, `None` for scans.
    pub fn granted_access(&self) -> Option<AccessLevel> {
        match self {
            Action::Exploit(e) => Some(e.access()),
            Action::PrivilegeEscalation(p) => Some(p.access()),
            Action::DenialOfService(d) => Some(d.access()),
            Action::Scan(_) => None,
        }
    }

    /// Whether every precondition filter matches the target's fingerprint.
    ///
    /// Scans carry no precondition filters and apply to any target.
    pub fn applies_to(&self, target: &TargetProfile) -> bool {
        match self {
            Action::Exploit(e) => e.applies_to(target),
            Action::PrivilegeEscalation(p) => p.applies_to(target),
            Action::DenialOfService(d) => d.applies_to(target),
            Action::Scan(_) => true,
        }
    }

    /// Whether an attacker holding `held` clears the required-access bar.
    pub fn attemptable_with(&self, held: AccessLevel) -> bool {
        held >= self.req_access()
    }
}

impl Descriptor for Action {
    fn name(&self) -> &str {
        match self {
            Action::Exploit(e) => e.name(),
            Action::PrivilegeEscalation(p) => p.name(),
            Action::DenialOfService(d) => d.name(),
            Action::Scan(s) => s.name(),
        }
    }

    fn cost(&self) -> f64 {
        match self {
            Action::Exploit(e) => e.cost(),
            Action::PrivilegeEscalation(p) => p.cost(),
            Action::DenialOfService(d) => d.cost(),
            Action::Scan(s) => s.cost(),
        }
    }

    fn duration(&self) -> f64 {
        match self {
            Action::Exploit(e) => e.duration(),
            Action::PrivilegeEscalation(p) => p.duration(),
            Action::DenialOfService(d) => d.duration(),
            Action::Scan(s) => s.duration(),
        }
    }

    fn prob(&self) -> f64 {
        match self {
            Action::Exploit(e) => e.prob(),
            Action::PrivilegeEscalation(p) => p.prob(),
            Action::DenialOfService(d) => d.prob(),
            Action::Scan(s) => s.prob(),
        }
    }

    fn req_access(&self) -> AccessLevel {
        match self {
            Action::Exploit(e) => e.req_access(),
            Action::PrivilegeEscalation(p) => p.req_access(),
            Action::DenialOfService(d) => d.req_access(),
            Action::Scan(s) => s.req_access(),
        }
    }
}

impl From<Exploit> for Action {
    fn from(value: Exploit) -> Self {
        Action::Exploit(value)
    }
}

impl From<PrivilegeEscalation> for Action {
    fn from(value: PrivilegeEscalation) -> Self {
        Action::PrivilegeEscalation(value)
    }
}

impl From<DenialOfService> for Action {
    fn from(value: DenialOfService) -> Self {
        Action::DenialOfService(value)
    }
}

impl From<Scan> for Action {
    fn from(value: Scan) -> Self {
        Action::Scan(value)
    }
}

/// Serde defaults shared by the parameter structs.
pub(crate) mod defaults {
    use crate::access::AccessLevel;

    pub(crate) fn prob() -> f64 {
        1.0
    }

    /// Exploits, escalations, and DoS presume an existing foothold.
    pub(crate) fn elevated_req_access() -> AccessLevel {
        AccessLevel::User
    }
}

pub(crate) fn checked_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

pub(crate) fn checked_cost(cost: f64) -> Result<f64, ValidationError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(ValidationError::InvalidCost(cost));
    }
    Ok(cost)
}

pub(crate) fn checked_duration(duration: f64) -> Result<f64, ValidationError> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(ValidationError::InvalidDuration(duration));
    }
    Ok(duration)
}

pub(crate) fn checked_prob(prob: f64) -> Result<f64, ValidationError> {
    if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
        return Err(ValidationError::InvalidProbability(prob));
    }
    Ok(prob)
}

/// Exact-match precondition test: an unset filter is a wildcard.
pub(crate) fn filter_matches(filter: Option<&str>, observed: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => observed == Some(wanted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_semantics() {
        assert!(filter_matches(None, Some("linux")));
        assert!(filter_matches(None, None));
        assert!(filter_matches(Some("linux"), Some("linux")));
        assert!(!filter_matches(Some("linux"), Some("windows")));
        // A concrete filter never matches an unfingerprinted attribute.
        assert!(!filter_matches(Some("linux"), None));
    }

    #[test]
    fn checked_ranges_reject_nan() {
        assert!(checked_cost(f64::NAN).is_err());
        assert!(checked_duration(f64::NEG_INFINITY).is_err());
        assert!(checked_prob(f64::NAN).is_err());
    }
}
