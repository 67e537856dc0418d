//! Resolves the most recent release tag for a changelog request.
use log::*;

use crate::{changelog::request::ChangelogRequest, git::runner::GitRunner};

/// Outcome of the tag lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    /// Most recent qualifying tag, or `None` when the repository has none.
    pub last_tag: Option<String>,
    /// Tag name the current version would be released under.
    pub expected: String,
}

impl TagInfo {
    /// The last tag is a trustworthy boundary only when it marks the very
    /// version being released.
    pub fn matches_current(&self) -> bool {
        self.last_tag.as_deref() == Some(self.expected.as_str())
    }
}

/// Find the most recent tag starting with the request's tag prefix, falling
/// back to the most recent tag of any name. Missing tags and failed lookups
/// both yield an empty [`TagInfo`].
pub async fn resolve_tag_info(
    runner: &dyn GitRunner,
    request: &ChangelogRequest,
) -> TagInfo {
    let tag_prefix = request.tag_prefix.as_str();
    let expected = request.expected_tag();

    let mut last_tag = most_recent_tag(runner, Some(tag_prefix)).await;

    if last_tag.is_none() {
        debug!("no tag found with prefix '{tag_prefix}': trying any tag");
        last_tag = most_recent_tag(runner, None).await;
    }

    match &last_tag {
        Some(tag) => info!("last tag: {tag}, expected tag: {expected}"),
        None => info!("no tags found in repository"),
    }

    TagInfo { last_tag, expected }
}

/// Most recent tag by creation date, optionally restricted to names starting
/// with `prefix_filter`. Without a filter the nearest tag reachable from
/// HEAD is used.
pub async fn most_recent_tag(
    runner: &dyn GitRunner,
    prefix_filter: Option<&str>,
) -> Option<String> {
    let args = match prefix_filter {
        Some(prefix) => {
            let pattern = if prefix.is_empty() {
                "refs/tags".to_string()
            } else {
                format!("refs/tags/{prefix}*")
            };
            vec![
                "for-each-ref".to_string(),
                "--sort=-creatordate".to_string(),
                "--count=1".to_string(),
                "--format=%(refname:strip=2)".to_string(),
                pattern,
            ]
        }
        None => vec![
            "describe".to_string(),
            "--tags".to_string(),
            "--abbrev=0".to_string(),
        ],
    };

    match runner.run(&args).await {
        Ok(output) => output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string),
        Err(err) => {
            debug!("tag lookup failed: {err}");
            None
        }
    }
}
