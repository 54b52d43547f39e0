// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin-protocol output rendering.

use pipewatch_core::Report;

/// The single status line consumed by the monitoring host.
pub fn status_line(report: &Report) -> String {
    let summary = report.summary();
    if summary.is_empty() {
        format!("PIPEWATCH {}", report.severity())
    } else {
        format!("PIPEWATCH {} - {}", report.severity(), summary)
    }
}

/// One line per emitted metric, shown at -v and above.
pub fn detail_lines(report: &Report) -> Vec<String> {
    report
        .metrics()
        .iter()
        .map(|metric| {
            format!(
                "{} = {} ({} {} {})",
                metric.path,
                metric.severity.code(),
                metric.ref_name,
                metric.status,
                metric.web_url
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
