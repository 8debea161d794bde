//! Command registry.
//!
//! A fixed table of the instruction keywords the Dockerfile format defines,
//! with the syntax each one accepts. Unknown keywords are not an error here:
//! [`lookup`] returns `None` and the parser falls back to generic handling.

/// How a shell-form value is split into `Command::value` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSyntax {
    /// The whole trimmed remainder as a single element (`RUN`, `USER`, ...).
    Opaque,
    /// Whitespace-delimited tokens (`FROM`, `COPY`, ...).
    Words,
    /// `name=value ...` pairs, or legacy `name value` (`ENV`, `LABEL`).
    NameValue,
    /// Quote-aware words, one element each (`ARG`).
    NameOrNameValue,
    /// A type word followed by an optional maybe-JSON command (`HEALTHCHECK`).
    HealthCheck,
    /// A nested instruction (`ONBUILD`).
    SubCommand,
}

/// Syntax properties of a registered instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Whether the instruction defines `--flag` options. Informational, for
    /// downstream policy; the parser extracts flags from every instruction.
    pub accepts_flags: bool,
    pub accepts_json_form: bool,
    pub syntax: ValueSyntax,
}

impl CommandSpec {
    const fn new(accepts_flags: bool, accepts_json_form: bool, syntax: ValueSyntax) -> Self {
        Self {
            accepts_flags,
            accepts_json_form,
            syntax,
        }
    }
}

/// Syntax used for keywords missing from the registry.
pub const UNKNOWN_COMMAND: CommandSpec = CommandSpec::new(true, true, ValueSyntax::Words);

// Sorted by keyword; `lookup` relies on it.
static COMMANDS: [(&str, CommandSpec); 18] = [
    ("add", CommandSpec::new(true, true, ValueSyntax::Words)),
    ("arg", CommandSpec::new(false, false, ValueSyntax::NameOrNameValue)),
    ("cmd", CommandSpec::new(false, true, ValueSyntax::Opaque)),
    ("copy", CommandSpec::new(true, true, ValueSyntax::Words)),
    ("entrypoint", CommandSpec::new(false, true, ValueSyntax::Opaque)),
    ("env", CommandSpec::new(false, false, ValueSyntax::NameValue)),
    ("expose", CommandSpec::new(false, false, ValueSyntax::Words)),
    ("from", CommandSpec::new(true, false, ValueSyntax::Words)),
    ("healthcheck", CommandSpec::new(true, true, ValueSyntax::HealthCheck)),
    ("label", CommandSpec::new(false, false, ValueSyntax::NameValue)),
    ("maintainer", CommandSpec::new(false, false, ValueSyntax::Opaque)),
    ("onbuild", CommandSpec::new(false, false, ValueSyntax::SubCommand)),
    ("run", CommandSpec::new(true, true, ValueSyntax::Opaque)),
    ("shell", CommandSpec::new(false, true, ValueSyntax::Opaque)),
    ("stopsignal", CommandSpec::new(false, false, ValueSyntax::Opaque)),
    ("user", CommandSpec::new(false, false, ValueSyntax::Opaque)),
    ("volume", CommandSpec::new(false, true, ValueSyntax::Words)),
    ("workdir", CommandSpec::new(false, false, ValueSyntax::Opaque)),
];

/// Look up a lowercase keyword.
pub fn lookup(keyword: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .binary_search_by(|(name, _)| (*name).cmp(keyword))
        .ok()
        .map(|idx| &COMMANDS[idx].1)
}

/// Every registered keyword, ascending.
pub fn all_cmds() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|(name, _)| *name)
}
