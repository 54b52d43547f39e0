// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch tiers for monitored references.

use crate::severity::Severity;
use crate::status::PipelineStatus;
use std::collections::BTreeSet;

/// Reporting tier of a watched reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Warning,
    Critical,
}

/// The references to monitor, split by reporting tier.
///
/// Overlap between the sets is permitted; a reference present in both is
/// scored as critical. A reference in neither set is ignored entirely.
#[derive(Debug, Clone, Default)]
pub struct WatchSet {
    warning: BTreeSet<String>,
    critical: BTreeSet<String>,
}

impl WatchSet {
    /// Build from the operator-supplied ref lists. With both lists empty
    /// the default watch is `master` at critical tier.
    pub fn new(
        warning: impl IntoIterator<Item = String>,
        critical: impl IntoIterator<Item = String>,
    ) -> Self {
        let warning: BTreeSet<String> = warning.into_iter().collect();
        let mut critical: BTreeSet<String> = critical.into_iter().collect();

        if warning.is_empty() && critical.is_empty() {
            critical.insert("master".to_string());
        }

        Self { warning, critical }
    }

    pub fn is_watched(&self, ref_name: &str) -> bool {
        self.critical.contains(ref_name) || self.warning.contains(ref_name)
    }

    /// Tier of a watched reference; critical wins on overlap.
    pub fn tier(&self, ref_name: &str) -> Option<Tier> {
        if self.critical.contains(ref_name) {
            Some(Tier::Critical)
        } else if self.warning.contains(ref_name) {
            Some(Tier::Warning)
        } else {
            None
        }
    }

    /// Severity of one representative record: only a failed terminal
    /// status on a watched reference scores above OK.
    pub fn severity_for(&self, ref_name: &str, status: &PipelineStatus) -> Severity {
        if !status.is_failed() {
            return Severity::Ok;
        }
        match self.tier(ref_name) {
            Some(Tier::Critical) => Severity::Critical,
            Some(Tier::Warning) => Severity::Warning,
            None => Severity::Ok,
        }
    }
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
