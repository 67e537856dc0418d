//! Result type for the `tagnotes` binary.
//!
//! Commands return `color_eyre` results so every failure, whether it comes
//! from the library's [`tagnotes::TagnotesError`] or from the CLI itself, is
//! reported with context and colored output.
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//!
//! fn load() -> Result<Config> {
//!     let content = std::fs::read_to_string("tagnotes.toml")
//!         .wrap_err("Failed to read configuration file")?;
//!     Ok(Config::parse(&content)?)
//! }
//! ```
use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the CLI commands.
pub type Result<T> = EyreResult<T>;
