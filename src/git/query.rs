//! Builds the `git log` queries used to collect commit history.
use std::fmt::Display;

use crate::changelog::request::ChangelogRequest;

/// Byte that opens every commit record in the with-bodies format. git
/// rejects commit messages containing NUL, so commit text never holds it.
pub const RECORD_DELIMITER: &str = "\0";
/// Pretty-format placeholder that git expands to [`RECORD_DELIMITER`].
const RECORD_DELIMITER_FORMAT: &str = "%x00";
/// Key prefix of the date line.
pub const DATE_KEY: &str = "date:";
/// Key prefix of the subject line.
pub const SUBJECT_KEY: &str = "subject:";
/// Key prefix of the author line.
pub const AUTHOR_KEY: &str = "author:";
/// Marker line after which every line belongs to the body.
pub const BODY_MARKER: &str = "body:";

/// Which part of history a single fetch attempt covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeDecision {
    /// Commits strictly after the tag, up to HEAD.
    SinceTag(String),
    /// The most recent `n` commits regardless of tags.
    RecentWindow(usize),
    /// Every commit reachable from HEAD.
    AllHistory,
}

impl RangeDecision {
    /// Window of the most recent `size` commits, where 0 means no limit.
    pub fn window(size: usize) -> Self {
        if size == 0 {
            Self::AllHistory
        } else {
            Self::RecentWindow(size)
        }
    }

    fn revision_args(&self) -> Vec<String> {
        match self {
            Self::SinceTag(tag) => vec![format!("{tag}..HEAD")],
            Self::RecentWindow(count) => vec![format!("--max-count={count}")],
            Self::AllHistory => vec![],
        }
    }
}

impl Display for RangeDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinceTag(tag) => write!(f, "since tag {tag}"),
            Self::RecentWindow(count) => write!(f, "last {count} commits"),
            Self::AllHistory => f.write_str("all history"),
        }
    }
}

/// A `git log` invocation: the range to walk and the pretty format that
/// shapes each commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    range: RangeDecision,
    format: String,
}

impl LogQuery {
    pub fn new(range: RangeDecision, request: &ChangelogRequest) -> Self {
        Self {
            range,
            format: format_spec(request),
        }
    }

    pub fn range(&self) -> &RangeDecision {
        &self.range
    }

    /// Argument vector passed to `git`. Arguments are handed to the process
    /// directly, so no quoting is applied here.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--no-color".to_string(),
            "--date=short".to_string(),
            format!("--pretty=format:{}", self.format),
        ];
        args.extend(self.range.revision_args());
        args
    }

    /// Printable command line with every argument that needs it wrapped in
    /// double quotes.
    pub fn command_line(&self) -> String {
        let mut line = String::from("git");
        for arg in self.args() {
            line.push(' ');
            line.push_str(&quote_arg(&arg));
        }
        line
    }
}

/// Pretty format for a request.
///
/// Without bodies git renders each commit as a finished markdown bullet on
/// a single line. With bodies every field is written on its own keyed line
/// behind [`RECORD_DELIMITER`] so the parser never has to rely on position.
pub fn format_spec(request: &ChangelogRequest) -> String {
    if !request.include_body {
        let mut format = String::from("- ");
        if request.show_date {
            format.push_str("**%ad** ");
        }
        format.push_str("%s");
        if request.show_author {
            format.push_str(" _(by %an)_");
        }
        return format;
    }

    let mut format = format!("{RECORD_DELIMITER_FORMAT}%n");
    if request.show_date {
        format.push_str(&format!("{DATE_KEY}%ad%n"));
    }
    format.push_str(&format!("{SUBJECT_KEY}%s%n"));
    if request.show_author {
        format.push_str(&format!("{AUTHOR_KEY}%an%n"));
    }
    format.push_str(&format!("{BODY_MARKER}%n%b"));
    format
}

/// Escapes double quotes (and the backslashes that would otherwise escape
/// them) so a token can sit inside a double-quoted argument.
pub fn escape_double_quotes(token: &str) -> String {
    token.replace('\\', "\\\\").replace('"', "\\\"")
}

fn quote_arg(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '\\'));

    if needs_quotes {
        format!("\"{}\"", escape_double_quotes(arg))
    } else {
        arg.to_string()
    }
}
