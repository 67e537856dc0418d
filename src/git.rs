//! Access to the repository's history through the `git` executable.
//!
//! Every interaction is a single `git` subprocess with a deadline:
//!
//! - **runner**: the [`GitRunner`] seam and its live [`GitCli`] implementation
//! - **query**: builds `git log` argument vectors from a changelog request
//! - **tags**: finds the most recent release tag
pub mod query;
pub mod runner;
pub mod tags;

pub use query::{LogQuery, RangeDecision};
pub use runner::{GitCli, GitRunner};
pub use tags::TagInfo;

#[cfg(test)]
pub use runner::MockGitRunner;
