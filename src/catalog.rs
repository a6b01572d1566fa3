// SPDX-License-Identifier: PMPL-1.0-or-later

//! The immutable, name-unique collection of actions an engine consumes.

use crate::access::AccessLevel;
use crate::action::{Action, Descriptor};
use crate::error::ConfigurationError;
use crate::target::TargetProfile;
use tracing::debug;

/// A validated action library.
///
/// Actions keep their document order. Names are unique across the whole
/// catalog, scans included; assembling a catalog with a duplicate name
/// fails with [`ConfigurationError::DuplicateName`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    actions: Vec<Action>,
}

impl Catalog {
    pub fn new(actions: Vec<Action>) -> Result<Self, ConfigurationError> {
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].iter().any(|a| a.name() == action.name()) {
                return Err(ConfigurationError::DuplicateName(action.name().to_string()));
            }
        }
        debug!(actions = actions.len(), "catalog assembled");
        Ok(Self { actions })
    }

    /// Look an action up by name.
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Actions whose preconditions match `target` and whose required
    /// access is covered by `held`.
    pub fn applicable<'a>(
        &'a self,
        target: &'a TargetProfile,
        held: AccessLevel,
    ) -> impl Iterator<Item = &'a Action> {
        self.actions
            .iter()
            .filter(move |action| action.attemptable_with(held) && action.applies_to(target))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ExploitSpec, ScanKind, ScanSpec};

    #[test]
    fn duplicate_names_are_rejected() {
        let a = ExploitSpec::new("ssh_exploit", 1.0, 1.0).build().unwrap();
        let b = ExploitSpec::new("ssh_exploit", 2.0, 2.0).build().unwrap();
        let err = Catalog::new(vec![a.into(), b.into()]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateName("ssh_exploit".to_string())
        );
    }

    #[test]
    fn lookup_by_name() {
        let exploit = ExploitSpec::new("ftp_overflow", 2.0, 1.0).build().unwrap();
        let scan = ScanSpec::new(ScanKind::Subnet, 1.0, 3.0).build().unwrap();
        let catalog = Catalog::new(vec![exploit.into(), scan.into()]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("subnet_scan").is_some());
        assert!(catalog.get("ftp_overflow").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }
}
