// SPDX-License-Identifier: PMPL-1.0-or-later

//! Privilege escalation actions: climb tiers on an already-owned host.

use super::{checked_cost, checked_duration, checked_name, checked_prob, defaults, filter_matches};
use crate::access::AccessLevel;
use crate::action::Descriptor;
use crate::error::ValidationError;
use crate::target::TargetProfile;
use serde::{Deserialize, Serialize};

/// Parameters for building a [`PrivilegeEscalation`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EscalationSpec {
    pub name: String,
    pub cost: f64,
    pub duration: f64,
    #[serde(default = "defaults::prob")]
    pub prob: f64,
    #[serde(default = "defaults::elevated_req_access")]
    pub req_access: AccessLevel,
    /// Required target operating system, `None` = any.
    #[serde(default)]
    pub os: Option<String>,
    /// Required running process, `None` = works independent of a process.
    #[serde(default)]
    pub process: Option<String>,
    /// Access tier granted on success.
    #[serde(default)]
    pub access: AccessLevel,
}

impl EscalationSpec {
    /// A spec with the given mandatory fields and every default in place.
    pub fn new(name: impl Into<String>, cost: f64, duration: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            duration,
            prob: defaults::prob(),
            req_access: defaults::elevated_req_access(),
            os: None,
            process: None,
            access: AccessLevel::None,
        }
    }

    /// Validate into an immutable descriptor.
    pub fn build(self) -> Result<PrivilegeEscalation, ValidationError> {
        PrivilegeEscalation::try_from(self)
    }
}

/// A privilege escalation, optionally tied to an OS and a running process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EscalationSpec")]
pub struct PrivilegeEscalation {
    name: String,
    cost: f64,
    duration: f64,
    prob: f64,
    req_access: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    process: Option<String>,
    access: AccessLevel,
}

impl TryFrom<EscalationSpec> for PrivilegeEscalation {
    type Error = ValidationError;

    fn try_from(spec: EscalationSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            name: checked_name(spec.name)?,
            cost: checked_cost(spec.cost)?,
            duration: checked_duration(spec.duration)?,
            prob: checked_prob(spec.prob)?,
            req_access: spec.req_access,
            os: spec.os,
            process: spec.process,
            access: spec.access,
        })
    }
}

impl PrivilegeEscalation {
    /// Required operating system, `None` = unrestricted.
    pub fn os(&self) -> Option<&str> {
        self.os.as_deref()
    }

    /// Required running process, `None` = independent of process.
    pub fn process(&self) -> Option<&str> {
        self.process.as_deref()
    }

    /// Access tier granted on success.
    pub fn access(&self) -> AccessLevel {
        self.access
    }

    /// Whether the OS and process filters both match the target.
    pub fn applies_to(&self, target: &TargetProfile) -> bool {
        filter_matches(self.os(), target.os())
            && self
                .process()
                .map(|process| target.runs_process(process))
                .unwrap_or(true)
    }
}

impl Descriptor for PrivilegeEscalation {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn prob(&self) -> f64 {
        self.prob
    }

    fn req_access(&self) -> AccessLevel {
        self.req_access
    }
}
