//! Tag derivation - pure decision logic over an immutable build context.

use crate::channel::{classify, Channel, Classification};
use crate::context::{BuildContext, TriggerEvent};

/// Where the derived tags will be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    /// Registry host, e.g. "ghcr.io"
    pub registry: String,
    /// Base image name, e.g. "acme/widget"
    pub image: String,
    /// Branch that receives the `edge` tag and the package-version path
    pub release_branch: String,
}

/// The complete result of one derivation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    /// Resolved version or pseudo-version for this run
    pub version: String,
    pub channel: Channel,
    /// Image name with the suffix applied, without registry
    pub image: String,
    /// Fully-qualified tag references in derivation order, no dedup
    pub tags: Vec<String>,
}

/// Derive the tag set for one CI run.
///
/// Release events tag with the release tag name itself. Pushes to the
/// release branch with a changed package version tag with that version.
/// Any other push gets a synthesized `branch-sha-timestamp` pseudo-version
/// that labels the build but is never pushed as a tag.
pub fn build(ctx: &BuildContext, target: &PublishTarget) -> TagSet {
    let mut classification = Classification::dev();
    let mut tags: Vec<String> = Vec::new();

    let version = match ctx.event {
        TriggerEvent::Release => {
            let version = ctx.git_ref.clone();
            classification = classify(&version);
            tags.push(version.clone());
            version
        }
        TriggerEvent::Other => {
            let version = match tracked_version(ctx, target) {
                Some(version) => {
                    classification = classify(&version);
                    tags.push(version.clone());
                    version
                }
                None => pseudo_version(ctx),
            };

            if ctx.branch == target.release_branch {
                tags.push("edge".to_string());
            }
            tags.push(format!("branch-{}", ctx.branch));

            version
        }
    };

    match &classification.channel {
        Channel::Beta => {
            tags.push("beta".to_string());
        }
        Channel::Release => {
            // a release also serves the beta channel
            tags.push("beta".to_string());
            tags.push("latest".to_string());

            if let Some(major_minor) = &classification.major_minor {
                tags.push("stable".to_string());
                tags.push(major_minor.clone());
            }
        }
        Channel::Dev => {}
    }

    let image = match &ctx.tag_suffix {
        Some(suffix) => format!("{}-{}", target.image, suffix),
        None => target.image.clone(),
    };

    let tags = tags
        .into_iter()
        .map(|tag| format!("{}/{}:{}", target.registry, image, tag))
        .collect();

    TagSet {
        version,
        channel: classification.channel,
        image,
        tags,
    }
}

/// The tracked package version, when this push is allowed to use it:
/// release branch only, metadata changed, and a version actually supplied.
fn tracked_version(ctx: &BuildContext, target: &PublishTarget) -> Option<String> {
    if ctx.branch == target.release_branch && ctx.package_version_changed {
        ctx.package_version.clone()
    } else {
        None
    }
}

fn pseudo_version(ctx: &BuildContext) -> String {
    format!("{}-{}-{}", ctx.branch, ctx.commit_sha, ctx.timestamp)
}
