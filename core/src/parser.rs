//! Dockerfile parser.
//!
//! Parses a Dockerfile into a sequence of [`Command`] records. Supports line
//! continuations, comments, the `escape` parser directive, instruction flags,
//! both shell and JSON (exec) forms, and `ONBUILD` sub-instructions.

use std::path::Path;

use crate::command::Command;
use crate::config::ParserConfig;
use crate::error::{DockerfileError, Result};
use crate::preprocess::{scan_directives, strip_bom, LogicalLines};
use crate::registry::{self, CommandSpec, ValueSyntax, UNKNOWN_COMMAND};
use crate::segment::{segment, split_first_word, RawInstruction};
use crate::value::{
    extract_flags, parse_health_check, parse_json_array, parse_name_value, parse_words, Site,
};

/// Dockerfile parser with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a Dockerfile from its text content.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Command>> {
        let content = strip_bom(content);
        let escape = if self.config.parse_directives {
            scan_directives(content, self.config.escape_token)?
        } else {
            self.config.escape_token
        };

        let mut commands = Vec::new();
        for line in LogicalLines::new(content, escape) {
            let raw = segment(line?)?;
            let command = parse_instruction(raw, escape.as_char())?;
            tracing::trace!(
                line = command.start_line,
                cmd = command.cmd.as_str(),
                "Parsed instruction"
            );
            commands.push(command);
        }

        tracing::debug!(
            instructions = commands.len(),
            escape = %escape,
            "Parsed Dockerfile"
        );
        Ok(commands)
    }

    /// Parse a Dockerfile from raw bytes, which must be valid UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Command>> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            let line = bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1;
            DockerfileError::parse_at(line, format!("invalid UTF-8: {}", e))
        })?;
        self.parse_str(content)
    }

    /// Parse a Dockerfile from a file path.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Command>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| DockerfileError::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read Dockerfile");
        self.parse_bytes(&bytes)
    }
}

/// Shell- or exec-form value of one instruction, flags included.
struct Body {
    json: bool,
    flags: Vec<String>,
    value: Vec<String>,
}

/// Parse one segmented instruction into a Command.
fn parse_instruction(raw: RawInstruction, escape: char) -> Result<Command> {
    let site = Site {
        line: raw.start_line,
        original: &raw.original,
    };
    let cmd = normalize_keyword(&raw.keyword, &site)?;
    let spec = lookup(&cmd, &site);

    let (sub_cmd, body) = if spec.syntax == ValueSyntax::SubCommand {
        let (mut flags, rest) = extract_flags(&raw.args);
        let (nested_keyword, nested_args) = split_first_word(rest);
        if nested_keyword.is_empty() {
            return Err(site.error("ONBUILD requires an instruction"));
        }
        let nested = normalize_keyword(nested_keyword, &site)?;
        let nested_spec = lookup(&nested, &site);
        let mut body = parse_body(&nested, nested_spec, nested_args, escape, &site)?;
        flags.append(&mut body.flags);
        body.flags = flags;
        (Some(nested), body)
    } else {
        let body = parse_body(&cmd, spec, &raw.args, escape, &site)?;
        (None, body)
    };

    Ok(Command {
        cmd,
        sub_cmd,
        json: body.json,
        flags: body.flags,
        value: body.value,
        start_line: raw.start_line,
        original: raw.original,
    })
}

/// Parse flags and value of a non-`ONBUILD` instruction.
fn parse_body(
    keyword: &str,
    spec: &CommandSpec,
    args: &str,
    escape: char,
    site: &Site<'_>,
) -> Result<Body> {
    if spec.syntax == ValueSyntax::SubCommand {
        return Err(chained_onbuild(site));
    }

    let (flags, rest) = extract_flags(args);
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(site.error(format!(
            "{} requires at least one argument",
            keyword.to_uppercase()
        )));
    }

    if spec.accepts_json_form && spec.syntax != ValueSyntax::HealthCheck && rest.starts_with('[')
    {
        let value = parse_json_array(rest, site)?;
        return Ok(Body {
            json: true,
            flags,
            value,
        });
    }

    let (json, value) = match spec.syntax {
        ValueSyntax::Opaque => (false, vec![rest.to_string()]),
        ValueSyntax::Words => (false, rest.split_whitespace().map(str::to_string).collect()),
        ValueSyntax::NameValue => (false, parse_name_value(rest, keyword, escape, site)?),
        ValueSyntax::NameOrNameValue => (false, parse_words(rest, escape)),
        ValueSyntax::HealthCheck => parse_health_check(rest, site)?,
        ValueSyntax::SubCommand => return Err(chained_onbuild(site)),
    };

    if value.is_empty() {
        return Err(site.error(format!(
            "{} requires at least one argument",
            keyword.to_uppercase()
        )));
    }

    Ok(Body { json, flags, value })
}

fn chained_onbuild(site: &Site<'_>) -> DockerfileError {
    site.error("chaining ONBUILD via `ONBUILD ONBUILD` isn't allowed")
}

/// Validate an instruction keyword and lowercase it.
fn normalize_keyword(keyword: &str, site: &Site<'_>) -> Result<String> {
    let mut chars = keyword.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(site.error(format!("invalid instruction keyword '{}'", keyword)));
    }
    Ok(keyword.to_ascii_lowercase())
}

/// Registry entry for `cmd`, or the generic syntax for unknown instructions.
fn lookup(cmd: &str, site: &Site<'_>) -> &'static CommandSpec {
    registry::lookup(cmd).unwrap_or_else(|| {
        tracing::warn!(
            line = site.line,
            instruction = cmd,
            "Unrecognized Dockerfile instruction, parsing generically"
        );
        &UNKNOWN_COMMAND
    })
}
