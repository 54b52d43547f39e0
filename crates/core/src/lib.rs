//! pipewatch-core: Core library for the pipewatch monitoring probe
//!
//! This crate provides:
//! - The pure severity-resolution algorithm over pipeline histories
//! - Watch-set, status and project-filter predicates
//! - A blocking GitLab v4 client behind the `CiApi` seam
//! - Probe orchestration and report aggregation

pub mod error;
pub mod filter;
pub mod gitlab;
pub mod probe;
pub mod resolve;
pub mod severity;
pub mod status;
pub mod watch;

// Re-exports
pub use error::CheckError;
pub use filter::ProjectFilter;
pub use gitlab::{CiApi, GitlabClient, PipelineRecord, Project};
pub use probe::{Probe, Report};
pub use resolve::{resolve, ResolvedStatus};
pub use severity::Severity;
pub use status::PipelineStatus;
pub use watch::{Tier, WatchSet};
