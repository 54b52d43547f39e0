// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error-path specs: every probe failure maps to the UNKNOWN exit code.

use crate::prelude::pipewatch;
use predicates::str::contains;

#[test]
fn unreachable_server_exits_unknown() {
    pipewatch()
        .args(["-u", "http://127.0.0.1:1"])
        .assert()
        .code(3)
        .stdout(contains("PIPEWATCH UNKNOWN:"))
        .stdout(contains("connection to http://127.0.0.1:1/api/v4 failed"));
}

#[test]
fn invalid_project_pattern_exits_unknown() {
    pipewatch()
        .args(["-u", "http://127.0.0.1:1", "-p", "["])
        .assert()
        .code(3)
        .stdout(contains("PIPEWATCH UNKNOWN:"))
        .stdout(contains("invalid project pattern"));
}
