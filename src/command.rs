//! Command execution for tagnotes.
//!
//! Each command loads what it needs, runs, and reports through the binary's
//! `color_eyre` [`crate::result::Result`]:
//!
//! - **changelog**: generate release notes for the current version
//! - **schema**: print the JSON schema of `tagnotes.toml`

/// Release notes generation.
pub mod changelog;

/// Configuration schema output.
pub mod schema;
