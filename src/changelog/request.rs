//! Per-call changelog configuration.
use derive_builder::Builder;
use std::time::Duration;

use crate::git::runner::DEFAULT_GIT_TIMEOUT;

/// Default prefix prepended to a version to form its tag name.
pub const DEFAULT_TAG_PREFIX: &str = "v";
/// Number of recent commits used when no tag boundary can be trusted.
pub const DEFAULT_WINDOW_SIZE: usize = 30;

/// Everything a single changelog generation needs to know. Built once and
/// never changed while the call runs.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ChangelogRequest {
    /// Prefix each entry with the commit date.
    #[builder(default)]
    pub show_date: bool,
    /// Append the commit author to each entry.
    #[builder(default)]
    pub show_author: bool,
    /// Render each commit's message body under its subject.
    #[builder(default)]
    pub include_body: bool,
    /// Prefix of release tags, e.g. "v" for "v1.2.0".
    #[builder(default = "DEFAULT_TAG_PREFIX.to_string()")]
    pub tag_prefix: String,
    /// Version being released.
    pub current_version: String,
    /// Size of the recent-commits window, 0 for all history.
    #[builder(default = "DEFAULT_WINDOW_SIZE")]
    pub window_size: usize,
    /// Deadline for each git invocation.
    #[builder(default = "DEFAULT_GIT_TIMEOUT")]
    pub git_timeout: Duration,
}

/// Which optional fields a commit record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    pub date: bool,
    pub author: bool,
    pub body: bool,
}

impl ChangelogRequest {
    pub fn field_flags(&self) -> FieldFlags {
        FieldFlags {
            date: self.show_date,
            author: self.show_author,
            body: self.include_body,
        }
    }

    /// Tag name the current version is released under.
    pub fn expected_tag(&self) -> String {
        format!("{}{}", self.tag_prefix, self.current_version)
    }
}
