// SPDX-License-Identifier: PMPL-1.0-or-later

//! Exploit actions: gain a foothold through a vulnerable service.

use super::{checked_cost, checked_duration, checked_name, checked_prob, defaults, filter_matches};
use crate::access::AccessLevel;
use crate::action::Descriptor;
use crate::error::ValidationError;
use crate::target::TargetProfile;
use serde::{Deserialize, Serialize};

/// Parameters for building an [`Exploit`].
///
/// Optional fields carry the document defaults: `prob` 1.0, `req_access`
/// user tier, unrestricted preconditions, and a tier-0 access grant.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExploitSpec {
    pub name: String,
    pub cost: f64,
    pub duration: f64,
    #[serde(default = "defaults::prob")]
    pub prob: f64,
    #[serde(default = "defaults::elevated_req_access")]
    pub req_access: AccessLevel,
    /// Required target hardware platform, `None` = any.
    #[serde(default)]
    pub hardware: Option<String>,
    /// Required target operating system, `None` = any.
    #[serde(default)]
    pub os: Option<String>,
    /// Required running network service, `None` = any.
    #[serde(default)]
    pub service: Option<String>,
    /// Access tier granted on success.
    #[serde(default)]
    pub access: AccessLevel,
}

impl ExploitSpec {
    /// A spec with the given mandatory fields and every default in place.
    pub fn new(name: impl Into<String>, cost: f64, duration: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            duration,
            prob: defaults::prob(),
            req_access: defaults::elevated_req_access(),
            hardware: None,
            os: None,
            service: None,
            access: AccessLevel::None,
        }
    }

    /// Validate into an immutable descriptor.
    pub fn build(self) -> Result<Exploit, ValidationError> {
        Exploit::try_from(self)
    }
}

/// An exploit against a (possibly narrowed) class of target hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExploitSpec")]
pub struct Exploit {
    name: String,
    cost: f64,
    duration: f64,
    prob: f64,
    req_access: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
    access: AccessLevel,
}

impl TryFrom<ExploitSpec> for Exploit {
    type Error = ValidationError;

    fn try_from(spec: ExploitSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            name: checked_name(spec.name)?,
            cost: checked_cost(spec.cost)?,
            duration: checked_duration(spec.duration)?,
            prob: checked_prob(spec.prob)?,
            req_access: spec.req_access,
            hardware: spec.hardware,
            os: spec.os,
            service: spec.service,
            access: spec.access,
        })
    }
}

impl Exploit {
    /// Required hardware platform, `None` = unrestricted.
    pub fn hardware(&self) -> Option<&str> {
        self.hardware.as_deref()
    }

    /// Required operating system, `None` = unrestricted.
    pub fn os(&self) -> Option<&str> {
        self.os.as_deref()
    }

    /// Required running service, `None` = unrestricted.
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Access tier granted on success.
    pub fn access(&self) -> AccessLevel {
        self.access
    }

    /// Whether the hardware, OS, and service filters all match the target.
    pub fn applies_to(&self, target: &TargetProfile) -> bool {
        filter_matches(self.hardware(), target.hardware())
            && filter_matches(self.os(), target.os())
            && self
                .service()
                .map(|service| target.runs_service(service))
                .unwrap_or(true)
    }
}

impl Descriptor for Exploit {
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
