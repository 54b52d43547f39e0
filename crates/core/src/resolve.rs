// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reference severity resolution.
//!
//! The core of the probe: reduce one project's pipeline history to at most
//! one reportable status. Two explicit passes over the input sequence keep
//! every tie-break deterministic:
//!
//! 1. Per reference, pick the representative record: watched, terminal,
//!    latest `updated_at`. An exact timestamp tie keeps the record that
//!    appears earlier in the server's returned order.
//! 2. Across references, keep the representative with the strictly highest
//!    severity. Equal severity keeps the first one found in input order;
//!    severity is never re-broken by recency or name.
//!
//! Pure function of its inputs; no side effects, no retries.

use crate::gitlab::{PipelineRecord, Project};
use crate::severity::Severity;
use crate::status::PipelineStatus;
use crate::watch::WatchSet;
use std::collections::HashMap;

/// The winning record for one project. Recomputed each run; this is the
/// only output entity of the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatus {
    /// Fully-qualified project path, used as the metric name.
    pub path: String,
    pub ref_name: String,
    pub status: PipelineStatus,
    pub severity: Severity,
    pub web_url: String,
}

/// Reduce a project's pipeline history to its most severe watched outcome.
///
/// Returns `None` when no watched, terminal record exists. The caller must
/// treat that as "no metric for this project", which is not the same as an
/// explicit OK metric.
pub fn resolve(
    project: &Project,
    records: &[PipelineRecord],
    watch: &WatchSet,
) -> Option<ResolvedStatus> {
    // Pass 1: representative per reference.
    let mut representative: HashMap<&str, usize> = HashMap::new();
    for (ix, record) in records.iter().enumerate() {
        if !watch.is_watched(&record.ref_name) || !record.status.is_terminal() {
            continue;
        }
        match representative.get(record.ref_name.as_str()) {
            Some(&kept) if records[kept].updated_at >= record.updated_at => {}
            _ => {
                representative.insert(record.ref_name.as_str(), ix);
            }
        }
    }

    // Pass 2: highest severity across references, first-found wins ties.
    let mut winner: Option<(Severity, usize)> = None;
    for (ix, record) in records.iter().enumerate() {
        if representative.get(record.ref_name.as_str()) != Some(&ix) {
            continue;
        }
        let severity = watch.severity_for(&record.ref_name, &record.status);
        match winner {
            Some((best, _)) if severity <= best => {}
            _ => winner = Some((severity, ix)),
        }
    }

    winner.map(|(severity, ix)| {
        let record = &records[ix];
        ResolvedStatus {
            path: project.path_with_namespace.clone(),
            ref_name: record.ref_name.clone(),
            status: record.status.clone(),
            severity,
            web_url: record.web_url.clone(),
        }
    })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
