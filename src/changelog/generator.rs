//! End-to-end changelog generation.
use chrono::{Local, NaiveDate};
use log::*;
use std::path::Path;

use crate::{
    changelog::{
        fallback::{FallbackController, HistoryOutcome},
        formatter::Formatter,
        parser::parse_commits,
        request::ChangelogRequest,
    },
    git::{
        query::RECORD_DELIMITER,
        runner::{GitCli, GitRunner},
        tags::resolve_tag_info,
    },
};

/// Generates release notes from the history a [`GitRunner`] exposes.
pub struct ChangelogGenerator {
    runner: Box<dyn GitRunner>,
}

impl ChangelogGenerator {
    pub fn new(runner: Box<dyn GitRunner>) -> Self {
        Self { runner }
    }

    /// Generate release notes dated today.
    pub async fn generate(&self, request: &ChangelogRequest) -> String {
        self.generate_on(request, Local::now().date_naive()).await
    }

    /// Generate release notes, dating any placeholder entry `today`.
    ///
    /// Never fails: empty or broken history degrades to a placeholder
    /// document, and a missing git is reported inside the document.
    pub async fn generate_on(
        &self,
        request: &ChangelogRequest,
        today: NaiveDate,
    ) -> String {
        info!(
            "generating changelog for {} (tag prefix: '{}')",
            request.current_version, request.tag_prefix
        );

        let formatter = Formatter::new(&request.current_version, today);

        let tag_info = resolve_tag_info(self.runner.as_ref(), request).await;

        let controller = FallbackController::new(self.runner.as_ref(), request);

        match controller.fetch(&tag_info).await {
            HistoryOutcome::Commits { raw, label_tag, .. } => {
                if request.include_body {
                    let records = parse_commits(
                        &raw,
                        RECORD_DELIMITER,
                        request.field_flags(),
                    );
                    debug!("parsed {} commits", records.len());
                    formatter.records(&records, label_tag.as_deref())
                } else {
                    formatter.simple(&raw, label_tag.as_deref())
                }
            }
            HistoryOutcome::Synthetic => formatter.synthetic(),
            HistoryOutcome::Unavailable(reason) => {
                error!("unable to read commit history: {reason}");
                formatter.unavailable(&reason)
            }
        }
    }
}

/// Generate release notes for the repository at `repo_path` using the `git`
/// executable.
pub async fn generate_changelog(
    repo_path: &Path,
    request: &ChangelogRequest,
) -> String {
    let runner = GitCli::new(repo_path, request.git_timeout);
    ChangelogGenerator::new(Box::new(runner))
        .generate(request)
        .await
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
