//! Changelog generation from git history.
//!
//! A generation call walks a fixed pipeline:
//!
//! 1. **Range resolution**: find the most recent release tag
//!    ([`crate::git::tags`])
//! 2. **Fetch with fallback**: query commits since that tag, then a window of
//!    recent commits ([`fallback`])
//! 3. **Parsing**: decode raw output into [`parser::CommitRecord`]s
//! 4. **Formatting**: render a markdown document ([`formatter`])
//!
//! Each step degrades instead of failing, so [`generate_changelog`] always
//! returns a document.
pub mod fallback;
pub mod formatter;
pub mod generator;
pub mod parser;
pub mod request;

pub use generator::{ChangelogGenerator, generate_changelog};
pub use request::{ChangelogRequest, ChangelogRequestBuilder};
