//! Instruction segmentation.

use crate::error::{DockerfileError, Result};
use crate::preprocess::LogicalLine;

/// One instruction's keyword and argument text, before value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawInstruction {
    /// Keyword as written (not yet lowercased).
    pub keyword: String,
    /// Everything after the keyword, trimmed.
    pub args: String,
    pub start_line: usize,
    pub original: String,
}

/// Split a logical line into keyword and argument text.
pub(crate) fn segment(line: LogicalLine) -> Result<RawInstruction> {
    let (keyword, args) = split_first_word(&line.text);
    if keyword.is_empty() {
        return Err(DockerfileError::parse(
            line.start_line,
            line.original,
            "empty instruction",
        ));
    }

    Ok(RawInstruction {
        keyword: keyword.to_string(),
        args: args.to_string(),
        start_line: line.start_line,
        original: line.original,
    })
}

/// Split a string into the first word and the rest.
pub(crate) fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical(text: &str, start_line: usize) -> LogicalLine {
        LogicalLine {
            text: text.to_string(),
            start_line,
            original: text.to_string(),
        }
    }

    #[test]
    fn test_segment_keyword_and_args() {
        let raw = segment(logical("  FROM   ubuntu:xenial  ", 3)).unwrap();
        assert_eq!(raw.keyword, "FROM");
        assert_eq!(raw.args, "ubuntu:xenial");
        assert_eq!(raw.start_line, 3);
        assert_eq!(raw.original, "  FROM   ubuntu:xenial  ");
    }

    #[test]
    fn test_segment_keyword_only() {
        let raw = segment(logical("RUN", 1)).unwrap();
        assert_eq!(raw.keyword, "RUN");
        assert_eq!(raw.args, "");
    }

    #[test]
    fn test_segment_empty_instruction() {
        // A lone continuation token joins to nothing
        let line = LogicalLine {
            text: "   ".to_string(),
            start_line: 7,
            original: "\\\n   ".to_string(),
        };
        let err = segment(line).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(err.line(), Some(7));
        assert!(err.to_string().contains("empty instruction"));
    }

    #[test]
    fn test_split_first_word() {
        assert_eq!(split_first_word("CMD echo hi"), ("CMD", "echo hi"));
        assert_eq!(split_first_word("CMD\techo  hi "), ("CMD", "echo  hi"));
        assert_eq!(split_first_word("NONE"), ("NONE", ""));
        assert_eq!(split_first_word(""), ("", ""));
    }
}
