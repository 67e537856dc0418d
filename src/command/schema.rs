//! Prints the JSON schema of the configuration file.
use schemars::schema_for;
use tagnotes::config::Config;

use crate::result::Result;

/// Print the `tagnotes.toml` JSON schema to stdout.
pub fn execute() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> Result<String> {
    let schema = schema_for!(Config);
    Ok(serde_json::to_string_pretty(&schema)?)
}
