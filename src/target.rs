// SPDX-License-Identifier: PMPL-1.0-or-later

//! Observable fingerprint of a candidate target host.

use serde::{Deserialize, Serialize};

/// What the attacker currently knows about a host.
///
/// Attributes left `None` (or lists left empty) are unfingerprinted. A
/// concrete action filter only matches an equal observed value, so an
/// unfingerprinted attribute never satisfies a concrete filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hardware: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    os: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    services: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    processes: Vec<String>,
}

impl TargetProfile {
    /// An entirely unfingerprinted host.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hardware(mut self, hardware: impl Into<String>) -> Self {
        self.hardware = Some(hardware.into());
        self
    }

    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.services.push(service.into());
        self
    }

    pub fn with_process(mut self, process: impl Into<String>) -> Self {
        self.processes.push(process.into());
        self
    }

    pub fn hardware(&self) -> Option<&str> {
        self.hardware.as_deref()
    }

    pub fn os(&self) -> Option<&str> {
        self.os.as_deref()
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn processes(&self) -> &[String] {
        &self.processes
    }

    /// Whether the named network service was observed on the host.
    pub fn runs_service(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Whether the named process was observed on the host.
    pub fn runs_process(&self, process: &str) -> bool {
        self.processes.iter().any(|p| p == process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observations_accumulate() {
        let target = TargetProfile::new()
            .with_os("linux")
            .with_service("ssh")
            .with_service("http")
            .with_process("cron");
        assert_eq!(target.os(), Some("linux"));
        assert!(target.hardware().is_none());
        assert!(target.runs_service("ssh"));
        assert!(target.runs_service("http"));
        assert!(!target.runs_service("smtp"));
        assert!(target.runs_process("cron"));
    }

    #[test]
    fn unset_fields_are_skipped_in_json() {
        let json = serde_json::to_string(&TargetProfile::new().with_os("windows")).unwrap();
        assert!(!json.contains("hardware"));
        assert!(!json.contains("services"));

        // A sparse document deserializes cleanly.
        let parsed: TargetProfile = serde_json::from_str(r#"{"os":"windows"}"#).unwrap();
        assert_eq!(parsed.os(), Some("windows"));
        assert!(parsed.services().is_empty());
    }
}
