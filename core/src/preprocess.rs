//! Line preprocessing.
//!
//! Turns raw Dockerfile text into logical lines. Blank lines and full-line
//! comments are dropped, and physical lines ending in the escape token are
//! joined with the line that follows.

use crate::config::EscapeToken;
use crate::error::{DockerfileError, Result};

const BOM: char = '\u{feff}';

/// One or more physical lines joined by continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogicalLine {
    /// Joined text with continuation tokens removed.
    pub text: String,
    /// First physical line of the group (1-indexed).
    pub start_line: usize,
    /// Every physical line of the group, verbatim, joined with `\n`.
    pub original: String,
}

pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

/// Scan the leading `# name=value` parser directives.
///
/// Returns the escape token in effect for the file. Scanning stops at the
/// first line that is not a directive.
pub(crate) fn scan_directives(content: &str, default: EscapeToken) -> Result<EscapeToken> {
    let mut escape: Option<EscapeToken> = None;

    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let Some((name, value)) = parse_directive(line) else {
            break;
        };

        if !name.eq_ignore_ascii_case("escape") {
            tracing::debug!(line = idx + 1, directive = name, "Ignoring parser directive");
            continue;
        }
        if escape.is_some() {
            return Err(DockerfileError::parse(
                idx + 1,
                line,
                "only one escape parser directive can be used",
            ));
        }
        let token = value
            .parse::<EscapeToken>()
            .map_err(|e| DockerfileError::parse(idx + 1, line, e))?;
        tracing::debug!(line = idx + 1, escape = %token, "Applied escape parser directive");
        escape = Some(token);
    }

    Ok(escape.unwrap_or(default))
}

/// Split `# name=value` into its parts.
fn parse_directive(line: &str) -> Option<(&str, &str)> {
    let body = line.trim_start().strip_prefix('#')?;
    let (name, value) = body.split_once('=')?;
    let name = name.trim_matches(|c| c == ' ' || c == '\t');
    let value = value.trim_matches(|c| c == ' ' || c == '\t');

    let mut chars = name.chars();
    let valid_name = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if !valid_name || value.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Blank lines and full-line comments carry no instruction text.
fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Strip a trailing continuation token.
///
/// Only an odd-length trailing run of escape tokens continues the line; an
/// even run is a sequence of escaped escape tokens.
fn trim_continuation(line: &str, escape: char) -> (&str, bool) {
    let trimmed = line.trim_end_matches(|c| c == ' ' || c == '\t');
    let run = trimmed.chars().rev().take_while(|&c| c == escape).count();
    if run % 2 == 1 {
        (&trimmed[..trimmed.len() - escape.len_utf8()], true)
    } else {
        (line, false)
    }
}

/// Single-pass iterator over the logical lines of a Dockerfile.
pub(crate) struct LogicalLines<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    escape: char,
}

impl<'a> LogicalLines<'a> {
    pub fn new(content: &'a str, escape: EscapeToken) -> Self {
        Self {
            lines: content.split('\n').enumerate(),
            escape: escape.as_char(),
        }
    }

    fn next_physical(&mut self) -> Option<(usize, &'a str)> {
        self.lines
            .next()
            .map(|(idx, raw)| (idx + 1, raw.strip_suffix('\r').unwrap_or(raw)))
    }
}

impl Iterator for LogicalLines<'_> {
    type Item = Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start_line, first) = loop {
            let (number, line) = self.next_physical()?;
            if !is_skippable(line) {
                break (number, line);
            }
        };

        let mut original = first.to_string();
        let (head, mut continued) = trim_continuation(first, self.escape);
        let mut text = head.to_string();

        while continued {
            let Some((_, line)) = self.next_physical() else {
                return Some(Err(DockerfileError::parse(
                    start_line,
                    original,
                    "unterminated line continuation",
                )));
            };
            original.push('\n');
            original.push_str(line);
            if is_skippable(line) {
                continue;
            }
            let (piece, more) = trim_continuation(line, self.escape);
            text.push_str(piece);
            continued = more;
        }

        Some(Ok(LogicalLine {
            text,
            start_line,
            original,
        }))
    }
}
