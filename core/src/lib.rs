//! Dockerfile Core - Dockerfile Parsing
//!
//! Turns Dockerfile text into an ordered sequence of [`Command`] records,
//! one per instruction, preserving source line numbers and raw text.
//!
//! # Example
//!
//! ```
//! let commands = dockerfile_core::parse_string("FROM alpine\nCMD [\"sh\"]\n").unwrap();
//! assert_eq!(commands[1].cmd(), "cmd");
//! assert!(commands[1].is_json());
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;

mod preprocess;
mod segment;
mod value;

use std::path::Path;

// Re-export commonly used types
pub use command::Command;
pub use config::{EscapeToken, ParserConfig};
pub use error::{DockerfileError, Result};
pub use parser::Parser;

/// Dockerfile Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse Dockerfile text with the default configuration.
pub fn parse_string(content: &str) -> Result<Vec<Command>> {
    Parser::default().parse_str(content)
}

/// Parse Dockerfile bytes with the default configuration.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Command>> {
    Parser::default().parse_bytes(bytes)
}

/// Read and parse a Dockerfile with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Command>> {
    Parser::default().parse_file(path)
}

/// Every recognized instruction keyword, sorted ascending.
pub fn all_cmds() -> Vec<&'static str> {
    registry::all_cmds().collect()
}
