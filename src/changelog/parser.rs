//! Splits raw `git log` output into commit records.
use crate::{
    changelog::request::FieldFlags,
    git::query::{AUTHOR_KEY, BODY_MARKER, DATE_KEY, SUBJECT_KEY},
};

/// Subject used when a record carries none.
pub const UNKNOWN_COMMIT: &str = "Unknown commit";

/// One commit decoded from the history stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub date: Option<String>,
    pub subject: String,
    pub author: Option<String>,
    /// Trimmed message body, empty when not requested or absent.
    pub body: String,
}

/// Parse every non-blank segment between `delimiter`s into a record.
///
/// Segments written with keyed lines (see [`crate::git::query::format_spec`])
/// are decoded by key. Segments without any keyed line are decoded by
/// position: `[date] subject [author] body...`.
pub fn parse_commits(
    raw: &str,
    delimiter: &str,
    flags: FieldFlags,
) -> Vec<CommitRecord> {
    raw.split(delimiter)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| parse_segment(segment, flags))
        .collect()
}

fn parse_segment(segment: &str, flags: FieldFlags) -> CommitRecord {
    let lines = segment
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect::<Vec<&str>>();

    let keyed = lines.iter().any(|line| {
        line.starts_with(SUBJECT_KEY) || line.trim_end() == BODY_MARKER
    });

    let fields = if keyed {
        decode_keyed(&lines)
    } else {
        decode_positional(&lines, flags)
    };

    fields.into_record(flags)
}

#[derive(Default)]
struct RawFields<'a> {
    date: Option<&'a str>,
    subject: Option<&'a str>,
    author: Option<&'a str>,
    body: Vec<&'a str>,
}

impl RawFields<'_> {
    fn into_record(self, flags: FieldFlags) -> CommitRecord {
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let subject = non_empty(self.subject)
            .unwrap_or_else(|| UNKNOWN_COMMIT.to_string());

        let body = if flags.body {
            self.body.join("\n").trim().to_string()
        } else {
            String::new()
        };

        CommitRecord {
            date: if flags.date { non_empty(self.date) } else { None },
            subject,
            author: if flags.author {
                non_empty(self.author)
            } else {
                None
            },
            body,
        }
    }
}

fn decode_keyed<'a>(lines: &[&'a str]) -> RawFields<'a> {
    let mut fields = RawFields::default();
    let mut in_body = false;

    for &line in lines {
        if in_body {
            fields.body.push(line);
        } else if line.trim_end() == BODY_MARKER {
            in_body = true;
        } else if let Some(date) = line.strip_prefix(DATE_KEY) {
            fields.date = Some(date);
        } else if let Some(subject) = line.strip_prefix(SUBJECT_KEY) {
            fields.subject = Some(subject);
        } else if let Some(author) = line.strip_prefix(AUTHOR_KEY) {
            fields.author = Some(author);
        }
    }

    fields
}

fn decode_positional<'a>(
    lines: &[&'a str],
    flags: FieldFlags,
) -> RawFields<'a> {
    let mut iter = lines.iter().copied();
    let mut fields = RawFields::default();

    if flags.date {
        fields.date = iter.next();
    }
    fields.subject = iter.next();
    if flags.author {
        fields.author = iter.next();
    }
    fields.body = iter.collect();

    fields
}
