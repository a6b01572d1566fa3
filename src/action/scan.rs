// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reconnaissance scans: fixed-name actions with no precondition narrowing.

use super::{checked_cost, checked_duration, checked_prob, defaults};
use crate::access::AccessLevel;
use crate::action::Descriptor;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// The closed set of reconnaissance scan kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    Subnet,
    Os,
    Hardware,
    Service,
    Process,
}

impl ScanKind {
    /// All scan kinds.
    pub fn all() -> Vec<Self> {
        vec![
            ScanKind::Subnet,
            ScanKind::Os,
            ScanKind::Hardware,
            ScanKind::Service,
            ScanKind::Process,
        ]
    }

    /// The canonical action name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ScanKind::Subnet => "subnet_scan",
            ScanKind::Os => "os_scan",
            ScanKind::Hardware => "hardware_scan",
            ScanKind::Service => "service_scan",
            ScanKind::Process => "process_scan",
        }
    }
}

impl std::fmt::Display for ScanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters for building a [`Scan`].
///
/// The parameter set is enumerated and closed: kind, cost, duration, and
/// optionally `prob` and `req_access`. Unknown document keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSpec {
    pub kind: ScanKind,
    pub cost: f64,
    pub duration: f64,
    #[serde(default = "defaults::prob")]
    pub prob: f64,
    /// Scans require no prior foothold unless the library says otherwise.
    #[serde(default)]
    pub req_access: AccessLevel,
}

impl ScanSpec {
    /// A spec with the given mandatory fields and every default in place.
    pub fn new(kind: ScanKind, cost: f64, duration: f64) -> Self {
        Self {
            kind,
            cost,
            duration,
            prob: defaults::prob(),
            req_access: AccessLevel::None,
        }
    }

    /// Validate into an immutable descriptor.
    pub fn build(self) -> Result<Scan, ValidationError> {
        Scan::try_from(self)
    }
}

/// A reconnaissance scan. Its name is fixed by the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScanSpec")]
pub struct Scan {
    kind: ScanKind,
    cost: f64,
    duration: f64,
    prob: f64,
    req_access: AccessLevel,
}

impl TryFrom<ScanSpec> for Scan {
    type Error = ValidationError;

    fn try_from(spec: ScanSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: spec.kind,
            cost: checked_cost(spec.cost)?,
            duration: checked_duration(spec.duration)?,
            prob: checked_prob(spec.prob)?,
            req_access: spec.req_access,
        })
    }
}

impl Scan {
    pub fn kind(&self) -> ScanKind {
        self.kind
    }
}

impl Descriptor for Scan {
    fn name(&self) -> &str {
        self.kind.name()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_fixed() {
        let expected = [
            (ScanKind::Subnet, "subnet_scan"),
            (ScanKind::Os, "os_scan"),
            (ScanKind::Hardware, "hardware_scan"),
            (ScanKind::Service, "service_scan"),
            (ScanKind::Process, "process_scan"),
        ];
        for (kind, name) in expected {
            let scan = ScanSpec::new(kind, 3.0, 2.0).build().unwrap();
            assert_eq!(scan.name(), name);
        }
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&ScanKind::Subnet).unwrap(), "\"subnet\"");
        let parsed: ScanKind = serde_json::from_str("\"process\"").unwrap();
        assert_eq!(parsed, ScanKind::Process);
    }
}
