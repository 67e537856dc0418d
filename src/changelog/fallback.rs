//! Escalates through history ranges until one yields commits.
use log::*;

use crate::{
    changelog::request::ChangelogRequest,
    git::{
        query::{LogQuery, RangeDecision},
        runner::GitRunner,
        tags::TagInfo,
    },
};

/// What the controller ended up with after walking the escalation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// Non-empty raw output of the first range that produced any.
    Commits {
        raw: String,
        range: RangeDecision,
        /// Tag named in the section label, set only when the last tag
        /// marks the version being released.
        label_tag: Option<String>,
    },
    /// Every range came back empty or failed: use the placeholder entry.
    Synthetic,
    /// git itself could not be used for any attempt.
    Unavailable(String),
}

/// Tries the tag-scoped range, then the recent window, one query at a
/// time, and settles for the synthetic entry when both come back empty.
pub struct FallbackController<'a> {
    runner: &'a dyn GitRunner,
    request: &'a ChangelogRequest,
}

impl<'a> FallbackController<'a> {
    pub fn new(
        runner: &'a dyn GitRunner,
        request: &'a ChangelogRequest,
    ) -> Self {
        Self { runner, request }
    }

    /// Ranges to query, in order. The tag-scoped range is only trusted when
    /// the tag marks the version being released: a stale tag means the
    /// version was bumped without tagging and would hide recent commits.
    pub fn escalation(&self, tag_info: &TagInfo) -> Vec<RangeDecision> {
        let mut ranges = vec![];

        if tag_info.matches_current()
            && let Some(tag) = &tag_info.last_tag
        {
            ranges.push(RangeDecision::SinceTag(tag.clone()));
        } else if let Some(tag) = &tag_info.last_tag {
            info!(
                "last tag {tag} does not match {}: using recent commits",
                tag_info.expected
            );
        }

        ranges.push(RangeDecision::window(self.request.window_size));

        ranges
    }

    pub async fn fetch(&self, tag_info: &TagInfo) -> HistoryOutcome {
        let label_tag = tag_info
            .matches_current()
            .then(|| tag_info.expected.clone());

        let mut unavailable = None;
        let mut only_unavailable = true;

        for range in self.escalation(tag_info) {
            let query = LogQuery::new(range.clone(), self.request);
            debug!("fetching history: {}", query.command_line());

            match self.runner.run(&query.args()).await {
                Ok(raw) if !raw.trim().is_empty() => {
                    info!("found commits: {range}");
                    return HistoryOutcome::Commits {
                        raw,
                        range,
                        label_tag,
                    };
                }
                Ok(_) => {
                    info!("no commits found: {range}");
                    only_unavailable = false;
                }
                Err(err) => {
                    warn!("history query failed ({range}): {err}");
                    if err.is_git_unavailable() {
                        unavailable = Some(err.to_string());
                    } else {
                        only_unavailable = false;
                    }
                }
            }
        }

        if only_unavailable && let Some(reason) = unavailable {
            return HistoryOutcome::Unavailable(reason);
        }

        warn!("no commit history available: using placeholder entry");
        HistoryOutcome::Synthetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        changelog::request::ChangelogRequestBuilder, error::TagnotesError,
        git::runner::MockGitRunner,
    };

    fn request() -> ChangelogRequest {
        ChangelogRequestBuilder::default()
            .current_version("1.2.0")
            .build()
            .unwrap()
    }

    fn tag_info(last_tag: Option<&str>) -> TagInfo {
        TagInfo {
            last_tag: last_tag.map(str::to_string),
            expected: "v1.2.0".into(),
        }
    }

    fn is_since_tag(args: &[String]) -> bool {
        args.last().is_some_and(|a| a == "v1.2.0..HEAD")
    }

    fn is_window(args: &[String]) -> bool {
        args.last().is_some_and(|a| a == "--max-count=30")
    }

    #[test]
    fn escalation_skips_mismatched_tag() {
        let request = request();
        let runner = MockGitRunner::new();
        let controller = FallbackController::new(&runner, &request);

        assert_eq!(
            controller.escalation(&tag_info(Some("v1.1.0"))),
            vec![RangeDecision::RecentWindow(30)]
        );
        assert_eq!(
            controller.escalation(&tag_info(None)),
            vec![RangeDecision::RecentWindow(30)]
        );
        assert_eq!(
            controller.escalation(&tag_info(Some("v1.2.0"))),
            vec![
                RangeDecision::SinceTag("v1.2.0".into()),
                RangeDecision::RecentWindow(30)
            ]
        );
    }

    #[test]
    fn zero_window_means_all_history() {
        let mut request = request();
        request.window_size = 0;
        let runner = MockGitRunner::new();
        let controller = FallbackController::new(&runner, &request);

        assert_eq!(
            controller.escalation(&tag_info(None)),
            vec![RangeDecision::AllHistory]
        );
    }

    #[tokio::test]
    async fn stops_at_tag_scoped_range_when_it_has_commits() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner
            .expect_run()
            .withf(|args| is_since_tag(args))
            .times(1)
            .returning(|_| Ok("- feat: new\n".into()));
        runner.expect_run().withf(|args| is_window(args)).never();

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(Some("v1.2.0"))).await;

        assert_eq!(
            outcome,
            HistoryOutcome::Commits {
                raw: "- feat: new\n".into(),
                range: RangeDecision::SinceTag("v1.2.0".into()),
                label_tag: Some("v1.2.0".into()),
            }
        );
    }

    #[tokio::test]
    async fn empty_tag_range_escalates_to_window() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner
            .expect_run()
            .withf(|args| is_since_tag(args))
            .times(1)
            .returning(|_| Ok("".into()));
        runner
            .expect_run()
            .withf(|args| is_window(args))
            .times(1)
            .returning(|_| Ok("- chore: old\n".into()));

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(Some("v1.2.0"))).await;

        assert!(matches!(
            outcome,
            HistoryOutcome::Commits {
                range: RangeDecision::RecentWindow(30),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn failed_tag_range_is_treated_as_empty() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner
            .expect_run()
            .withf(|args| is_since_tag(args))
            .times(1)
            .returning(|_| {
                Err(TagnotesError::git_failed("log", "ambiguous argument"))
            });
        runner
            .expect_run()
            .withf(|args| is_window(args))
            .times(1)
            .returning(|_| Ok("- fix: thing\n".into()));

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(Some("v1.2.0"))).await;

        assert!(matches!(outcome, HistoryOutcome::Commits { .. }));
    }

    #[tokio::test]
    async fn nothing_anywhere_is_synthetic() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(TagnotesError::git_failed(
                "log",
                "your current branch 'main' does not have any commits yet",
            ))
        });

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(None)).await;

        assert_eq!(outcome, HistoryOutcome::Synthetic);
    }

    #[tokio::test]
    async fn git_unavailable_on_every_attempt_is_reported() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner.expect_run().times(2).returning(|_| {
            Err(TagnotesError::git_unavailable("git executable not found"))
        });

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(Some("v1.2.0"))).await;

        assert_eq!(
            outcome,
            HistoryOutcome::Unavailable(
                "git is unavailable: git executable not found".into()
            )
        );
    }

    #[tokio::test]
    async fn timeout_is_a_transient_failure() {
        let request = request();
        let mut runner = MockGitRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(TagnotesError::GitTimeout {
                command: "log".into(),
                timeout: std::time::Duration::from_secs(10),
            })
        });

        let controller = FallbackController::new(&runner, &request);
        let outcome = controller.fetch(&tag_info(None)).await;

        assert_eq!(outcome, HistoryOutcome::Synthetic);
    }
}
