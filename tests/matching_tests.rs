// SPDX-License-Identifier: PMPL-1.0-or-later

//! Precondition matching: optional exact-match filters against target
//! fingerprints.

use attack_arsenal::{
    Action, DosSpec, EscalationSpec, ExploitSpec, ScanKind, ScanSpec, TargetProfile,
};

fn ssh_exploit() -> ExploitSpec {
    let mut spec = ExploitSpec::new("ssh_exploit", 1.0, 1.0);
    spec.os = Some("linux".to_string());
    spec.service = Some("ssh".to_string());
    spec
}

#[test]
fn exploit_matches_target_with_equal_os_and_service() {
    let exploit = ssh_exploit().build().unwrap();

    let linux_ssh = TargetProfile::new().with_os("linux").with_service("ssh");
    assert!(exploit.applies_to(&linux_ssh));

    // Hardware filter is unset, so any hardware matches.
    let on_arm = TargetProfile::new()
        .with_hardware("arm64")
        .with_os("linux")
        .with_service("ssh");
    assert!(exploit.applies_to(&on_arm));
}

#[test]
fn exploit_does_not_match_differing_os() {
    let exploit = ssh_exploit().build().unwrap();
    let windows = TargetProfile::new().with_os("windows").with_service("ssh");
    assert!(!exploit.applies_to(&windows));
}

#[test]
fn exploit_requires_the_service_to_be_observed() {
    let exploit = ssh_exploit().build().unwrap();
    let no_ssh = TargetProfile::new().with_os("linux").with_service("http");
    assert!(!exploit.applies_to(&no_ssh));
}

#[test]
fn concrete_filter_never_matches_unfingerprinted_attribute() {
    let mut spec = ExploitSpec::new("hw_specific", 1.0, 1.0);
    spec.hardware = Some("x86_64".to_string());
    let exploit = spec.build().unwrap();

    let unknown_hw = TargetProfile::new().with_os("linux");
    assert!(
        !exploit.applies_to(&unknown_hw),
        "an unfingerprinted attribute must not satisfy a concrete filter"
    );
}

#[test]
fn unrestricted_exploit_matches_anything() {
    let exploit = ExploitSpec::new("universal", 1.0, 1.0).build().unwrap();
    assert!(exploit.applies_to(&TargetProfile::new()));
    assert!(exploit.applies_to(&TargetProfile::new().with_os("plan9")));
}

#[test]
fn escalation_without_process_is_process_independent() {
    let esc = EscalationSpec::new("setuid_abuse", 1.0, 1.0).build().unwrap();
    assert!(esc.process().is_none(), "unset process is the wildcard");

    let no_processes = TargetProfile::new().with_os("linux");
    let some_processes = TargetProfile::new().with_process("nginx").with_process("cron");
    assert!(esc.applies_to(&no_processes));
    assert!(esc.applies_to(&some_processes));
}

#[test]
fn escalation_with_process_requires_it_running() {
    let mut spec = EscalationSpec::new("cron_abuse", 1.0, 1.0);
    spec.os = Some("linux".to_string());
    spec.process = Some("cron".to_string());
    let esc = spec.build().unwrap();

    let with_cron = TargetProfile::new().with_os("linux").with_process("cron");
    let without_cron = TargetProfile::new().with_os("linux").with_process("nginx");
    assert!(esc.applies_to(&with_cron));
    assert!(!esc.applies_to(&without_cron));
}

#[test]
fn dos_matches_on_hardware_and_os() {
    let mut spec = DosSpec::new("router_crash", 1.0, 1.0);
    spec.hardware = Some("mips".to_string());
    spec.os = Some("linux".to_string());
    let dos = spec.build().unwrap();

    let router = TargetProfile::new().with_hardware("mips").with_os("linux");
    let server = TargetProfile::new().with_hardware("x86_64").with_os("linux");
    assert!(dos.applies_to(&router));
    assert!(!dos.applies_to(&server));
}

#[test]
fn scans_apply_to_every_target() {
    let scan: Action = ScanSpec::new(ScanKind::Os, 1.0, 1.0).build().unwrap().into();
    assert!(scan.applies_to(&TargetProfile::new()));
    assert!(scan.applies_to(&TargetProfile::new().with_os("windows")));
}

#[test]
fn matching_is_uniform_through_the_action_enum() {
    let exploit: Action = ssh_exploit().build().unwrap().into();
    let linux_ssh = TargetProfile::new().with_os("linux").with_service("ssh");
    let windows = TargetProfile::new().with_os("windows");
    assert!(exploit.applies_to(&linux_ssh));
    assert!(!exploit.applies_to(&windows));
}
