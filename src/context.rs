//! Build context boundary - the only place that reads the process environment.
//!
//! The rest of the crate works on an immutable [BuildContext] value so the
//! decision logic stays deterministic and testable without environment
//! simulation.

use std::env;

use chrono::Local;

use crate::error::{ImageTagsError, Result};

/// What kind of CI event triggered this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A published release (the ref is a tag name)
    Release,
    /// Anything else - branch push, manual dispatch, schedule
    Other,
}

/// Immutable snapshot of everything the tag derivation needs from one CI run
#[derive(Debug, Clone, PartialEq)]
pub struct BuildContext {
    pub event: TriggerEvent,

    /// For a release event, the tag name with `refs/tags/` stripped.
    /// Otherwise the raw ref, unused by the builder.
    pub git_ref: String,

    /// Commit hash, empty when the environment does not provide one
    pub commit_sha: String,

    /// Branch name with `refs/heads/` stripped; `"arbitrary"` when absent
    pub branch: String,

    /// Version recorded in tracked package metadata, when supplied
    pub package_version: Option<String>,

    /// Whether that metadata changed in this run
    pub package_version_changed: bool,

    /// Qualifier appended to the image name and every tag reference
    pub tag_suffix: Option<String>,

    /// Run timestamp, stamped once at context construction
    pub timestamp: String,
}

impl BuildContext {
    /// Construct a context from the CI environment and command-line state.
    ///
    /// A release event without `GITHUB_REF` is fatal: there is no safe
    /// default version to synthesize for a release. Everything else is
    /// defaulted (branch to `"arbitrary"`, sha to empty).
    pub fn from_env(
        package_version: Option<String>,
        package_version_changed: bool,
        tag_suffix: Option<String>,
    ) -> Result<Self> {
        let event = match env::var("GITHUB_EVENT_NAME").as_deref() {
            Ok("release") => TriggerEvent::Release,
            _ => TriggerEvent::Other,
        };

        let raw_ref = match env::var("GITHUB_REF") {
            Ok(r) => r,
            Err(_) if event == TriggerEvent::Release => {
                return Err(ImageTagsError::environment(
                    "GITHUB_REF is not set for a release event",
                ));
            }
            Err(_) => "arbitrary".to_string(),
        };

        let (git_ref, branch) = match event {
            TriggerEvent::Release => {
                let tag = strip_ref_prefix(&raw_ref, "refs/tags/");
                // the branch is never consulted for a release
                (tag, "arbitrary".to_string())
            }
            TriggerEvent::Other => {
                let branch = strip_ref_prefix(&raw_ref, "refs/heads/");
                (raw_ref, branch)
            }
        };

        let commit_sha = env::var("GITHUB_SHA").unwrap_or_default();

        Ok(BuildContext {
            event,
            git_ref,
            commit_sha,
            branch,
            package_version,
            package_version_changed,
            tag_suffix,
            timestamp: run_timestamp(),
        })
    }
}

/// ISO-8601 local timestamp with microsecond precision
fn run_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn strip_ref_prefix(git_ref: &str, prefix: &str) -> String {
    git_ref.strip_prefix(prefix).unwrap_or(git_ref).to_string()
}
