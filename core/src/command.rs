//! Parsed Dockerfile instruction.

use serde::Serialize;

/// A single parsed Dockerfile instruction, e.g. `FROM ubuntu:xenial`.
///
/// `ONBUILD` instructions are flattened: the nested keyword is stored in
/// [`sub_cmd`](Command::sub_cmd) and the nested flags and value in this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub(crate) cmd: String,
    pub(crate) sub_cmd: Option<String>,
    pub(crate) json: bool,
    pub(crate) flags: Vec<String>,
    pub(crate) value: Vec<String>,
    pub(crate) start_line: usize,
    pub(crate) original: String,
}

impl Command {
    /// Lowercase instruction keyword (e.g. `from`, `onbuild`).
    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// Keyword of the nested instruction; only set for `onbuild`.
    pub fn sub_cmd(&self) -> Option<&str> {
        self.sub_cmd.as_deref()
    }

    /// Whether the value was written as a JSON array (exec form).
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Raw `--flag` tokens in source order.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Parsed arguments; never empty.
    pub fn value(&self) -> &[String] {
        &self.value
    }

    /// 1-indexed physical line the instruction starts on.
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Raw source text, continuation lines joined with `\n`.
    pub fn original(&self) -> &str {
        &self.original
    }
}
