// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Probe orchestration and report aggregation.
//!
//! One round trip to list projects, then one per surviving project to
//! fetch its pipelines, strictly sequentially. Fail-fast: the first
//! `CheckError` aborts the run before any metric is emitted.

use crate::error::CheckError;
use crate::filter::ProjectFilter;
use crate::gitlab::CiApi;
use crate::resolve::{resolve, ResolvedStatus};
use crate::severity::Severity;
use crate::watch::WatchSet;

/// Sequential evaluation of every visible project.
pub struct Probe<A> {
    api: A,
    filter: ProjectFilter,
    watch: WatchSet,
}

impl<A: CiApi> Probe<A> {
    pub fn new(api: A, filter: ProjectFilter, watch: WatchSet) -> Self {
        Self { api, filter, watch }
    }

    /// Emit one resolved status per project that has a watched terminal
    /// pipeline. Projects with nothing to report emit no metric at all.
    pub fn run(&self) -> Result<Vec<ResolvedStatus>, CheckError> {
        let projects = self.api.projects()?;
        tracing::info!(count = projects.len(), "projects listed");

        let mut metrics = Vec::new();
        for project in &projects {
            if !self.filter.matches(&project.path_with_namespace) {
                tracing::debug!(path = %project.path_with_namespace, "filtered out");
                continue;
            }

            let records = self.api.pipelines(project.id)?;
            match resolve(project, &records, &self.watch) {
                Some(status) => {
                    tracing::debug!(
                        path = %status.path,
                        ref_name = %status.ref_name,
                        severity = %status.severity,
                        "resolved"
                    );
                    metrics.push(status);
                }
                None => {
                    tracing::debug!(
                        path = %project.path_with_namespace,
                        "no watched terminal pipeline"
                    );
                }
            }
        }

        Ok(metrics)
    }
}

/// Aggregated outcome of one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    metrics: Vec<ResolvedStatus>,
}

impl Report {
    pub fn new(metrics: Vec<ResolvedStatus>) -> Self {
        Self { metrics }
    }

    /// Maximum severity across all metrics; OK when there are none.
    pub fn severity(&self) -> Severity {
        self.metrics
            .iter()
            .map(|metric| metric.severity)
            .max()
            .unwrap_or(Severity::Ok)
    }

    /// The process exit code for the monitoring host.
    pub fn exit_code(&self) -> u8 {
        self.severity().code()
    }

    /// Space-joined `"<path> failed"` for every metric above OK; empty
    /// when everything is healthy.
    pub fn summary(&self) -> String {
        self.metrics
            .iter()
            .filter(|metric| metric.severity > Severity::Ok)
            .map(|metric| format!("{} failed", metric.path))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn metrics(&self) -> &[ResolvedStatus] {
        &self.metrics
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
