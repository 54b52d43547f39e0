// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal check errors.
//!
//! Every variant aborts the probe before any metric is emitted; the CLI
//! maps all of them to the UNKNOWN exit code. There is no retry or
//! partial-degradation path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Server unreachable or the response body could not be read.
    #[error("connection to {url} failed")]
    Connection { url: String },

    /// HTTP 401. Shows the leading token characters so the operator can
    /// tell which credential was presented.
    #[error("pat {token_prefix}... rejected")]
    TokenRejected { token_prefix: String },

    /// HTTP 404.
    #[error("gitlab instance not found")]
    InstanceNotFound,

    /// Any other non-success HTTP status.
    #[error("unknown failure (http status {status})")]
    Http { status: u16 },

    /// Malformed response body.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid project selector supplied on the command line.
    #[error("invalid project pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
