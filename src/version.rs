//! Reads the version about to be released from the repository's manifest.
use log::*;
use std::path::Path;
use tokio::fs;

use crate::error::{Result, TagnotesError};

/// Files checked for a version, in order.
pub const VERSION_SOURCES: [&str; 3] =
    ["Cargo.toml", "package.json", "VERSION"];

/// Read the current version from the first manifest in `dir` that declares
/// one. Versions that aren't valid semver are accepted with a warning.
pub async fn read_version(dir: &Path) -> Result<String> {
    for source in VERSION_SOURCES {
        let path = dir.join(source);

        if !path.exists() {
            continue;
        }

        let content = fs::read_to_string(&path).await?;

        let version = match source {
            "Cargo.toml" => cargo_version(&content)?,
            "package.json" => package_json_version(&content)?,
            _ => Some(content.trim().to_string()).filter(|v| !v.is_empty()),
        };

        if let Some(version) = version {
            info!("found version {version} in {}", path.display());
            if let Err(err) = semver::Version::parse(&version) {
                warn!("version {version} is not valid semver: {err}");
            }
            return Ok(version);
        }

        debug!("no version declared in {}", path.display());
    }

    Err(TagnotesError::VersionNotFound(dir.display().to_string()))
}

fn cargo_version(content: &str) -> Result<Option<String>> {
    let doc: toml::Table = toml::from_str(content)?;

    let from_table = |table: Option<&toml::Value>| {
        table
            .and_then(|t| t.get("version"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    };

    // `version.workspace = true` is a table, not a string
    let package = from_table(doc.get("package"));
    let workspace = from_table(
        doc.get("workspace").and_then(|w| w.get("package")),
    );

    Ok(package.or(workspace))
}

fn package_json_version(content: &str) -> Result<Option<String>> {
    let json: serde_json::Value = serde_json::from_str(content)?;
    Ok(json
        .get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string))
}
