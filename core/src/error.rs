use std::path::{Path, PathBuf};

use thiserror::Error;

/// Dockerfile parser error types
#[derive(Error, Debug)]
pub enum DockerfileError {
    /// The Dockerfile could not be opened or read
    #[error("Failed to read Dockerfile at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text violates instruction syntax
    #[error("Parse error{}: {message}", line_suffix(.line))]
    Parse {
        line: Option<usize>,
        original: Option<String>,
        message: String,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl DockerfileError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DockerfileError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error positioned at `line`, carrying the instruction text.
    pub fn parse(line: usize, original: impl Into<String>, message: impl Into<String>) -> Self {
        DockerfileError::Parse {
            line: Some(line),
            original: Some(original.into()),
            message: message.into(),
        }
    }

    /// Build a parse error positioned at `line` with no instruction text available.
    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        DockerfileError::Parse {
            line: Some(line),
            original: None,
            message: message.into(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, DockerfileError::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, DockerfileError::Parse { .. })
    }

    /// Line number of a parse error, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            DockerfileError::Parse { line, .. } => *line,
            DockerfileError::Io { .. } => None,
        }
    }

    /// Original instruction text of a parse error, when known.
    pub fn original(&self) -> Option<&str> {
        match self {
            DockerfileError::Parse { original, .. } => original.as_deref(),
            DockerfileError::Io { .. } => None,
        }
    }

    /// Path of an I/O error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DockerfileError::Io { path, .. } => Some(path),
            DockerfileError::Parse { .. } => None,
        }
    }
}

/// Result type alias for Dockerfile parsing
pub type Result<T> = std::result::Result<T, DockerfileError>;
