//! Renders commit history into a markdown release note.
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::changelog::parser::{CommitRecord, UNKNOWN_COMMIT};

/// Section label used whenever no trusted tag bounds the history.
pub const RECENT_CHANGES: &str = "Recent Changes";

/// Matches 3 or more consecutive new lines
static EXTRA_NEW_LINES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// A titled release note before it is rendered to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    pub heading: String,
    pub section_label: String,
    pub body: Vec<String>,
}

impl ChangelogDocument {
    pub fn new(
        current_version: &str,
        label_tag: Option<&str>,
        body: Vec<String>,
    ) -> Self {
        Self {
            heading: format!("Release {current_version}"),
            section_label: section_label(label_tag),
            body,
        }
    }

    /// Render with `separator` placed between consecutive body entries.
    pub fn render(&self, separator: &str) -> String {
        let content = format!(
            "# {}\n\n## {}\n\n{}",
            self.heading,
            self.section_label,
            self.body.join(separator)
        );
        format!("{}\n", strip_extra_lines(&content))
    }
}

/// "Changes since <tag>" when a tag bounds the history, "Recent Changes"
/// otherwise.
pub fn section_label(label_tag: Option<&str>) -> String {
    match label_tag {
        Some(tag) => format!("Changes since {tag}"),
        None => RECENT_CHANGES.to_string(),
    }
}

/// Render a single commit as a markdown bullet with its body indented
/// underneath.
pub fn render_entry(record: &CommitRecord) -> String {
    let mut entry = String::from("- ");

    if let Some(date) = &record.date {
        entry.push_str(&format!("**{date}** "));
    }

    entry.push_str(&record.subject);

    if let Some(author) = &record.author {
        entry.push_str(&format!(" _(by {author})_"));
    }

    for line in record.body.lines() {
        entry.push('\n');
        if !line.trim().is_empty() {
            entry.push_str("  ");
            entry.push_str(line.trim_end());
        }
    }

    entry
}

/// Normalize formatting by replacing consecutive blank lines (3+) with
/// double newlines and trimming whitespace.
pub fn strip_extra_lines(content: &str) -> String {
    EXTRA_NEW_LINES_REGEX
        .replace_all(content, "\n\n")
        .trim()
        .to_string()
}

/// Renders every kind of changelog for one version on one day.
#[derive(Debug, Clone)]
pub struct Formatter<'a> {
    current_version: &'a str,
    today: NaiveDate,
}

impl<'a> Formatter<'a> {
    pub fn new(current_version: &'a str, today: NaiveDate) -> Self {
        Self {
            current_version,
            today,
        }
    }

    /// Full-record mode: one bullet per record, a blank line between
    /// entries. Falls back to the synthetic document when no record is
    /// left.
    pub fn records(
        &self,
        records: &[CommitRecord],
        label_tag: Option<&str>,
    ) -> String {
        if records.is_empty() {
            return self.synthetic();
        }

        let body = records.iter().map(render_entry).collect();

        ChangelogDocument::new(self.current_version, label_tag, body)
            .render("\n\n")
    }

    /// Simple mode: git already rendered one bullet per line, so the lines
    /// are kept as they are. A bullet without a subject gets the same
    /// placeholder as full-record mode.
    pub fn simple(&self, raw: &str, label_tag: Option<&str>) -> String {
        let body = raw
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(|line| match line {
                // commit with an empty message
                "-" => format!("- {UNKNOWN_COMMIT}"),
                _ => line.to_string(),
            })
            .collect::<Vec<String>>();

        if body.is_empty() {
            return self.synthetic();
        }

        ChangelogDocument::new(self.current_version, label_tag, body)
            .render("\n")
    }

    /// Placeholder used when no commit could be found at all.
    pub fn synthetic(&self) -> String {
        let entry = format!(
            "- **{}** Release {}: no commit history was found for this release",
            self.today.format("%Y-%m-%d"),
            self.current_version
        );

        ChangelogDocument::new(self.current_version, None, vec![entry])
            .render("\n")
    }

    /// Document reporting that history could not be read.
    pub fn unavailable(&self, reason: &str) -> String {
        let line = format!("_Unable to read commit history: {reason}_");

        ChangelogDocument::new(self.current_version, None, vec![line])
            .render("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn record(subject: &str) -> CommitRecord {
        CommitRecord {
            date: None,
            subject: subject.to_string(),
            author: None,
            body: String::new(),
        }
    }

    #[test]
    fn renders_subject_only_entry() {
        assert_eq!(render_entry(&record("fix: typo")), "- fix: typo");
    }

    #[test]
    fn renders_date_author_and_indented_body() {
        let record = CommitRecord {
            date: Some("2024-05-01".into()),
            subject: "feat: search".into(),
            author: Some("Jane Doe".into()),
            body: "Adds fuzzy search.\n\nCloses #12".into(),
        };

        assert_eq!(
            render_entry(&record),
            "- **2024-05-01** feat: search _(by Jane Doe)_\n  Adds fuzzy search.\n\n  Closes #12"
        );
    }

    #[test]
    fn records_are_separated_by_blank_lines() {
        let formatter = Formatter::new("1.2.0", today());
        let output = formatter.records(
            &[record("feat: one"), record("fix: two")],
            Some("v1.2.0"),
        );

        assert_eq!(
            output,
            "# Release 1.2.0\n\n## Changes since v1.2.0\n\n- feat: one\n\n- fix: two\n"
        );
    }

    #[test]
    fn simple_mode_keeps_one_line_per_commit() {
        let formatter = Formatter::new("2.0.0", today());
        let output = formatter.simple("- feat: one\n- fix: two\n\n", None);

        assert_eq!(
            output,
            "# Release 2.0.0\n\n## Recent Changes\n\n- feat: one\n- fix: two\n"
        );
    }

    #[test]
    fn simple_mode_names_commits_without_subject() {
        let formatter = Formatter::new("2.0.0", today());
        let output = formatter.simple("- feat: one\n- \n", None);

        assert_eq!(
            output,
            "# Release 2.0.0\n\n## Recent Changes\n\n- feat: one\n- Unknown commit\n"
        );
    }

    #[test]
    fn empty_input_renders_synthetic_document() {
        let formatter = Formatter::new("0.1.0", today());
        let expected = "# Release 0.1.0\n\n## Recent Changes\n\n- **2024-05-17** Release 0.1.0: no commit history was found for this release\n";

        assert_eq!(formatter.records(&[], Some("v0.1.0")), expected);
        assert_eq!(formatter.simple("\n  \n", None), expected);
        assert_eq!(formatter.synthetic(), expected);
    }

    #[test]
    fn unavailable_document_embeds_reason() {
        let formatter = Formatter::new("1.0.0", today());
        let output = formatter.unavailable("git executable not found");

        assert!(output.starts_with("# Release 1.0.0\n\n## Recent Changes"));
        assert!(output.contains(
            "_Unable to read commit history: git executable not found_"
        ));
    }

    #[test]
    fn strips_extra_lines() {
        assert_eq!(strip_extra_lines("\na\n\n\n\nb\n\n"), "a\n\nb");
    }
}
