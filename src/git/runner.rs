//! Runs `git` subprocesses with a deadline.
use async_trait::async_trait;
use log::*;
use std::{
    io::ErrorKind,
    path::PathBuf,
    process::Stdio,
    time::Duration,
};
use tokio::{process::Command, time::timeout};

use crate::error::{Result, TagnotesError};

/// Default deadline applied to every git invocation.
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes a git command and returns its standard output.
///
/// Implementations must treat each call as independent: a failed call leaves
/// nothing behind that could influence the next one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitRunner {
    async fn run(&self, args: &[String]) -> Result<String>;
}

/// Live runner that shells out to the `git` CLI inside a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    timeout: Duration,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            workdir: workdir.into(),
            timeout,
        }
    }
}

#[async_trait]
impl GitRunner for GitCli {
    async fn run(&self, args: &[String]) -> Result<String> {
        let command = args.first().cloned().unwrap_or_default();

        debug!(
            "running in {}: git {}",
            self.workdir.display(),
            args.join(" ")
        );

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.workdir)
            // stderr is inspected to classify failures
            .env("LC_ALL", "C")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => {
                if output.status.success() {
                    return Ok(String::from_utf8_lossy(&output.stdout)
                        .into_owned());
                }

                let stderr =
                    String::from_utf8_lossy(&output.stderr).trim().to_string();

                if stderr.contains("not a git repository") {
                    return Err(TagnotesError::git_unavailable(stderr));
                }

                Err(TagnotesError::git_failed(command, stderr))
            }
            Ok(Err(err)) if err.kind() == ErrorKind::NotFound => {
                if self.workdir.exists() {
                    Err(TagnotesError::git_unavailable(
                        "git executable not found",
                    ))
                } else {
                    Err(TagnotesError::git_unavailable(format!(
                        "{} does not exist",
                        self.workdir.display()
                    )))
                }
            }
            Ok(Err(err)) => Err(TagnotesError::git_unavailable(format!(
                "failed to execute git: {err}"
            ))),
            Err(_) => Err(TagnotesError::GitTimeout {
                command,
                timeout: self.timeout,
            }),
        }
    }
}
