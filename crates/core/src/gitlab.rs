// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GitLab v4 API types and the blocking HTTP client.
//!
//! The probe is single-threaded and strictly sequential, so the client is
//! a plain blocking GET against `<server>/api/v4`. One request per
//! endpoint, no retry, no pagination: the server's default first page and
//! its returned record order are consumed as-is.

use crate::error::CheckError;
use crate::status::PipelineStatus;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A project visible to the configured credential.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub path_with_namespace: String,
}

/// One pipeline run snapshot for a project. Read-only; fetched fresh each
/// invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineRecord {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub status: PipelineStatus,
    pub updated_at: DateTime<Utc>,
    pub web_url: String,
}

/// Read access to the CI server. The seam between the probe and the
/// transport; tests substitute an in-memory fake.
pub trait CiApi {
    fn projects(&self) -> Result<Vec<Project>, CheckError>;
    fn pipelines(&self, project_id: u64) -> Result<Vec<PipelineRecord>, CheckError>;
}

/// Blocking client for a GitLab server's v4 API.
pub struct GitlabClient {
    base_url: String,
    token: String,
}

impl GitlabClient {
    /// `server_url` is the server root (e.g. `http://localhost`); the
    /// `/api/v4` suffix is appended here.
    pub fn new(server_url: &str, token: &str) -> Self {
        Self {
            base_url: format!("{}/api/v4", server_url.trim_end_matches('/')),
            token: token.to_string(),
        }
    }

    fn get(&self, path: &str) -> Result<String, CheckError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let mut request = ureq::get(url.as_str());
        if !self.token.is_empty() {
            request = request.header("Private-Token", self.token.as_str());
        }

        let mut response = request.call().map_err(|err| self.map_error(err))?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|_| CheckError::Connection {
                url: self.base_url.clone(),
            })
    }

    fn map_error(&self, err: ureq::Error) -> CheckError {
        match err {
            ureq::Error::StatusCode(401) => CheckError::TokenRejected {
                token_prefix: self.token.chars().take(3).collect(),
            },
            ureq::Error::StatusCode(404) => CheckError::InstanceNotFound,
            ureq::Error::StatusCode(status) => CheckError::Http { status },
            _ => CheckError::Connection {
                url: self.base_url.clone(),
            },
        }
    }
}

impl CiApi for GitlabClient {
    fn projects(&self) -> Result<Vec<Project>, CheckError> {
        let body = self.get("/projects")?;
        Ok(serde_json::from_str(&body)?)
    }

    fn pipelines(&self, project_id: u64) -> Result<Vec<PipelineRecord>, CheckError> {
        let body = self.get(&format!("/projects/{}/pipelines", project_id))?;
        Ok(serde_json::from_str(&body)?)
    }
}
