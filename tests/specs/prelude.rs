// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers and fixtures for CLI specs.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two projects: groupapp (id 5) with a failed master pipeline, groupapi
/// (id 1) with a successful one.
pub const PROJECTS_JSON: &str = r#"[
  {"id": 5, "name": "groupapp", "path_with_namespace": "group/groupapp"},
  {"id": 1, "name": "groupapi", "path_with_namespace": "group/groupapi"}
]"#;

/// groupapp history: a running pipeline on top, then the failed run that
/// should win, then an older success, plus an unwatched develop failure.
pub const PIPELINES_APP_JSON: &str = r#"[
  {
    "id": 247,
    "ref": "master",
    "status": "running",
    "updated_at": "2020-01-03T09:00:00.000Z",
    "web_url": "https://gitlab.localhost.localdomain/group/groupapp/pipelines/247"
  },
  {
    "id": 246,
    "ref": "master",
    "status": "failed",
    "updated_at": "2020-01-02T12:00:00.000Z",
    "web_url": "https://gitlab.localhost.localdomain/group/groupapp/pipelines/246"
  },
  {
    "id": 245,
    "ref": "master",
    "status": "success",
    "updated_at": "2020-01-01T12:00:00.000Z",
    "web_url": "https://gitlab.localhost.localdomain/group/groupapp/pipelines/245"
  },
  {
    "id": 244,
    "ref": "develop",
    "status": "failed",
    "updated_at": "2020-01-03T08:00:00.000Z",
    "web_url": "https://gitlab.localhost.localdomain/group/groupapp/pipelines/244"
  }
]"#;

pub const PIPELINES_API_JSON: &str = r#"[
  {
    "id": 303,
    "ref": "master",
    "status": "success",
    "updated_at": "2020-01-02T10:00:00.000Z",
    "web_url": "https://gitlab.localhost.localdomain/group/groupapi/pipelines/303"
  }
]"#;

pub fn pipewatch() -> Command {
    Command::cargo_bin("pipewatch").unwrap()
}

/// Start a mock GitLab server with the standard two-project fixture.
pub async fn mock_gitlab() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PROJECTS_JSON, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/projects/5/pipelines"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PIPELINES_APP_JSON, "application/json"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v4/projects/1/pipelines"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PIPELINES_API_JSON, "application/json"),
        )
        .mount(&server)
        .await;

    server
}

/// Run the binary against `uri` with extra args, off the async runtime.
pub async fn probe(uri: String, args: Vec<String>) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || {
        let mut cmd = pipewatch();
        cmd.arg("-u").arg(&uri);
        cmd.args(&args);
        cmd.assert()
    })
    .await
    .unwrap()
}
