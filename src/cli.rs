//! CLI argument parsing.
use clap::{Parser, Subcommand};

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = ".", global = true)]
    /// Path to the git repository.
    pub repo_path: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate release notes for the current version.
    Changelog(ChangelogArgs),

    /// Print the JSON schema of tagnotes.toml.
    Schema,
}

/// Options of the changelog subcommand. Anything set here overrides
/// tagnotes.toml.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ChangelogArgs {
    #[arg(long)]
    /// Version being released. Read from Cargo.toml, package.json or
    /// VERSION when omitted.
    pub current_version: Option<String>,

    #[arg(long)]
    /// Prefix of release tags, e.g. "v".
    pub tag_prefix: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Prefix each entry with the commit date.
    pub show_date: bool,

    #[arg(long, default_value_t = false)]
    /// Append the commit author to each entry.
    pub show_author: bool,

    #[arg(long, default_value_t = false)]
    /// Include commit message bodies.
    pub include_body: bool,

    #[arg(long)]
    /// Recent commits to list when no tag marks the current version. Use 0
    /// for all history.
    pub window_size: Option<usize>,

    #[arg(long)]
    /// Write the notes to this file instead of stdout.
    pub out_file: Option<String>,
}
