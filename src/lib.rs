// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack-Arsenal — Attacker Action Taxonomy for Network-Attack Simulation.
//!
//! This crate defines the catalog of discrete, parameterized actions a
//! simulated attacker may attempt against hosts in a modeled network:
//! exploits, privilege escalations, denial-of-service, and reconnaissance
//! scans. Every action is an immutable descriptor carrying the static
//! attributes a simulation engine needs: cost, duration, success
//! probability, required access, precondition filters, and the access
//! level granted on success.
//!
//! TAXONOMY PILLARS:
//! 1. **Descriptor**: the read-only contract every action kind satisfies
//!    (name, cost, duration, probability, required access).
//! 2. **Preconditions**: optional exact-match filters (hardware, OS,
//!    service, process) narrowing which targets an action applies to.
//!    An unset filter is a wildcard.
//! 3. **Catalog**: the name-unique, validated collection of actions an
//!    engine filters and accounts against.
//!
//! The crate performs no simulation itself: outcome sampling, scheduling,
//! and host-state bookkeeping belong to the consuming engine.

pub mod access;
pub mod action;
pub mod catalog;
pub mod error;
pub mod target;

pub use access::AccessLevel;
pub use action::{
    Action, DenialOfService, Descriptor, DosSpec, EscalationSpec, Exploit, ExploitSpec,
    PrivilegeEscalation, Scan, ScanKind, ScanSpec,
};
pub use catalog::Catalog;
pub use error::{ConfigurationError, ValidationError};
pub use target::TargetProfile;
