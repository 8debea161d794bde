//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Character that marks a line continuation and escapes the next character in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeToken {
    /// `\` (default).
    Backslash,
    /// `` ` `` (common in Windows Dockerfiles).
    Backtick,
}

impl Default for EscapeToken {
    fn default() -> Self {
        Self::Backslash
    }
}

impl EscapeToken {
    pub fn as_char(self) -> char {
        match self {
            Self::Backslash => '\\',
            Self::Backtick => '`',
        }
    }
}

impl std::fmt::Display for EscapeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for EscapeToken {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "\\" => Ok(Self::Backslash),
            "`" => Ok(Self::Backtick),
            _ => Err(format!("invalid escape token '{}' (supported: \\, `)", s)),
        }
    }
}

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Escape token used when no `# escape=` directive overrides it
    #[serde(default)]
    pub escape_token: EscapeToken,

    /// Honor `# escape=` parser directives at the top of the file
    #[serde(default = "default_parse_directives")]
    pub parse_directives: bool,
}

fn default_parse_directives() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            escape_token: EscapeToken::default(),
            parse_directives: default_parse_directives(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.escape_token, EscapeToken::Backslash);
        assert!(config.parse_directives);
    }

    #[test]
    fn test_escape_token_from_str() {
        assert_eq!("\\".parse::<EscapeToken>().unwrap(), EscapeToken::Backslash);
        assert_eq!("`".parse::<EscapeToken>().unwrap(), EscapeToken::Backtick);
        assert!("/".parse::<EscapeToken>().is_err());
        assert!("".parse::<EscapeToken>().is_err());
    }

    #[test]
    fn test_escape_token_display() {
        assert_eq!(EscapeToken::Backslash.to_string(), "\\");
        assert_eq!(EscapeToken::Backtick.to_string(), "`");
    }

    #[test]
    fn test_parser_config_deserialize_partial() {
        let config: ParserConfig = serde_json::from_str(r#"{"escape_token":"backtick"}"#).unwrap();
        assert_eq!(config.escape_token, EscapeToken::Backtick);
        assert!(config.parse_directives);
    }

    #[test]
    fn test_parser_config_serialization_roundtrip() {
        let config = ParserConfig {
            escape_token: EscapeToken::Backtick,
            parse_directives: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
