// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity scale for the monitoring exit contract.
//!
//! Severity is an explicit ordered enumeration (OK < WARNING < CRITICAL)
//! rather than a raw integer; the 0/1/2 ordinal only appears at the
//! monitoring boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of one watched reference, or of a whole probe run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// The 0/1/2 code consumed by the monitoring host.
    pub fn code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.code()
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Severity::Ok),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Critical),
            other => Err(format!("invalid severity code: {}", other)),
        }
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
