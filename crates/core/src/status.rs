// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline status vocabulary.
//!
//! The server reports a status string per pipeline run. Four values mean
//! the run has not reached a finished outcome and are never reported;
//! everything else is terminal. Strings outside the known vocabulary land
//! in `Other` and count as terminal-but-not-failed, so a future server
//! status fails safe (severity 0) instead of being misclassified.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of one pipeline run as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PipelineStatus {
    Running,
    Pending,
    Canceled,
    Skipped,
    Success,
    Failed,
    /// Any server-defined status outside the known vocabulary.
    Other(String),
}

impl PipelineStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "running" => PipelineStatus::Running,
            "pending" => PipelineStatus::Pending,
            "canceled" => PipelineStatus::Canceled,
            "skipped" => PipelineStatus::Skipped,
            "success" => PipelineStatus::Success,
            "failed" => PipelineStatus::Failed,
            other => PipelineStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Running => "running",
            PipelineStatus::Pending => "pending",
            PipelineStatus::Canceled => "canceled",
            PipelineStatus::Skipped => "skipped",
            PipelineStatus::Success => "success",
            PipelineStatus::Failed => "failed",
            PipelineStatus::Other(raw) => raw,
        }
    }

    /// Whether the run reached a finished outcome. False exactly for
    /// running, pending, canceled and skipped.
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            PipelineStatus::Running
                | PipelineStatus::Pending
                | PipelineStatus::Canceled
                | PipelineStatus::Skipped
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PipelineStatus::Failed)
    }
}

impl From<&str> for PipelineStatus {
    fn from(raw: &str) -> Self {
        PipelineStatus::parse(raw)
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PipelineStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PipelineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PipelineStatus::parse(&raw))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
