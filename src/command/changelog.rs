//! Changelog command implementation.
use log::*;
use std::path::Path;
use tagnotes::{
    ChangelogRequest, config::Config, generate_changelog,
    version::read_version,
};
use tokio::fs;

use crate::{cli::ChangelogArgs, result::Result};

/// Generate release notes for the repository at `repo_path` and print them
/// or write them to `--out-file`.
pub async fn execute(repo_path: &Path, args: ChangelogArgs) -> Result<()> {
    let config = Config::load(repo_path).await?;

    let current_version = match &args.current_version {
        Some(version) => version.clone(),
        None => read_version(repo_path).await?,
    };

    let request = apply_overrides(config.request_for(&current_version), &args);
    let notes = generate_changelog(repo_path, &request).await;

    if let Some(out_file) = args.out_file {
        let file_path = Path::new(&out_file);

        if let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }

        info!("writing release notes to: {}", file_path.display());
        fs::write(file_path, &notes).await?;
    } else {
        print!("{notes}");
    }

    Ok(())
}

/// Flags given on the command line win over the configuration file.
fn apply_overrides(
    mut request: ChangelogRequest,
    args: &ChangelogArgs,
) -> ChangelogRequest {
    if let Some(prefix) = &args.tag_prefix {
        request.tag_prefix = prefix.clone();
    }
    if let Some(window_size) = args.window_size {
        request.window_size = window_size;
    }
    request.show_date |= args.show_date;
    request.show_author |= args.show_author;
    request.include_body |= args.include_body;
    request
}
