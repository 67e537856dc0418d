//! Common test helper functions shared across test modules.
//!
//! [`TestRepo`] creates throwaway git repositories with deterministic commit
//! and tag dates so tag ordering never depends on how fast a test runs.
use std::{cell::Cell, path::Path, process::Command};
use tempfile::TempDir;

use crate::changelog::request::{ChangelogRequest, ChangelogRequestBuilder};

/// 2024-01-01T00:00:00Z
const BASE_TIMESTAMP: i64 = 1_704_067_200;

/// Temporary git repository driven through the `git` CLI.
pub struct TestRepo {
    dir: TempDir,
    tick: Cell<i64>,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().unwrap(),
            tick: Cell::new(0),
        };

        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);

        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repository, panicking when it fails.
    pub fn git(&self, args: &[&str]) -> String {
        let date = self.next_date();

        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Create an empty commit.
    pub fn commit(&self, subject: &str) {
        self.git(&["commit", "--quiet", "--allow-empty", "-m", subject]);
    }

    /// Create an empty commit with a message body.
    pub fn commit_with_body(&self, subject: &str, body: &str) {
        self.git(&[
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            subject,
            "-m",
            body,
        ]);
    }

    /// Create an empty commit attributed to `author`.
    pub fn commit_by(&self, subject: &str, author: &str) {
        let email = author.replace(' ', ".");
        let author = format!("{author} <{email}@example.com>");
        self.git(&[
            "commit",
            "--quiet",
            "--allow-empty",
            "--author",
            &author,
            "-m",
            subject,
        ]);
    }

    /// Create an annotated tag on HEAD.
    pub fn tag(&self, name: &str) {
        self.git(&["tag", "-a", name, "-m", name]);
    }

    /// Every git call gets a date one minute after the previous one.
    fn next_date(&self) -> String {
        let tick = self.tick.get();
        self.tick.set(tick + 1);
        format!("{} +0000", BASE_TIMESTAMP + tick * 60)
    }
}

/// Request for `current_version` with every other option at its default.
pub fn create_test_request(current_version: &str) -> ChangelogRequest {
    ChangelogRequestBuilder::default()
        .current_version(current_version)
        .build()
        .unwrap()
}
