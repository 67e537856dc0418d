//! Release notes for the version you are about to publish, generated from
//! git history.
pub mod changelog;
pub mod config;
pub mod error;
pub mod git;
pub mod version;

pub use changelog::{
    ChangelogGenerator, ChangelogRequest, ChangelogRequestBuilder,
    generate_changelog,
};
pub use error::{Result, TagnotesError};

#[cfg(test)]
pub mod test_helpers;
