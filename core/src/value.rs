//! Value syntax helpers: flags, exec-form arrays, and shell-form splitting.

use serde_json::Value;

use crate::error::{DockerfileError, Result};
use crate::segment::split_first_word;

/// Position of the instruction being parsed, attached to every error.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Site<'a> {
    pub line: usize,
    pub original: &'a str,
}

impl Site<'_> {
    pub fn error(&self, message: impl Into<String>) -> DockerfileError {
        DockerfileError::parse(self.line, self.original, message)
    }
}

/// Consume leading `--flag` tokens.
///
/// Returns the flags verbatim and the text after them.
pub(crate) fn extract_flags(args: &str) -> (Vec<String>, &str) {
    let mut flags = Vec::new();
    let mut rest = args.trim_start();
    while rest.starts_with("--") {
        let (flag, after) = split_first_word(rest);
        flags.push(flag.to_string());
        rest = after;
    }
    (flags, rest)
}

/// Parse exec form like `["echo", "hi"]`.
///
/// Every element must be a string and the array must not be empty.
pub(crate) fn parse_json_array(s: &str, site: &Site<'_>) -> Result<Vec<String>> {
    let items: Vec<Value> = serde_json::from_str(s)
        .map_err(|e| site.error(format!("invalid JSON array '{}': {}", s, e)))?;

    if items.is_empty() {
        return Err(site.error("empty JSON array"));
    }

    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(site.error(format!("JSON array element {} is not a string", other))),
        })
        .collect()
}

/// Split on whitespace outside quotes.
///
/// Quotes stay in the word. The escape token keeps itself and the next
/// character in the word, so escaped whitespace does not split.
pub(crate) fn parse_words(rest: &str, escape: char) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut quote: Option<char> = None;
    let mut chars = rest.chars();

    while let Some(ch) = chars.next() {
        match quote {
            None if ch.is_whitespace() => {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                continue;
            }
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            Some(q) if q == ch => quote = None,
            _ => {}
        }

        if ch == escape {
            // A lone trailing escape token is dropped
            if let Some(next) = chars.next() {
                word.push(ch);
                word.push(next);
            }
            continue;
        }
        word.push(ch);
    }

    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Parse `ENV`/`LABEL` values into alternating names and values.
///
/// `NAME rest of line` (legacy) yields `[NAME, rest of line]`; otherwise
/// every word must be `name=value`.
pub(crate) fn parse_name_value(
    rest: &str,
    keyword: &str,
    escape: char,
    site: &Site<'_>,
) -> Result<Vec<String>> {
    let words = parse_words(rest, escape);
    let Some(first) = words.first() else {
        return Err(site.error(format!("{} requires at least one argument", keyword.to_uppercase())));
    };

    if !first.contains('=') {
        let (name, value) = split_first_word(rest);
        if value.is_empty() {
            return Err(site.error(format!("{} must have two arguments", keyword.to_uppercase())));
        }
        return Ok(vec![name.to_string(), value.to_string()]);
    }

    let mut pairs = Vec::with_capacity(words.len() * 2);
    for word in &words {
        let Some((name, value)) = word.split_once('=') else {
            return Err(site.error(format!(
                "Syntax error - can't find = in '{}'. Must be of the form: name=value",
                word
            )));
        };
        if name.is_empty() {
            return Err(site.error(format!(
                "{} names can not be blank",
                keyword.to_uppercase()
            )));
        }
        pairs.push(name.to_string());
        pairs.push(value.to_string());
    }
    Ok(pairs)
}

/// Parse a `HEALTHCHECK` value: a type word followed by an optional command.
///
/// Returns `(json, value)`; the type word is always the first element.
pub(crate) fn parse_health_check(rest: &str, site: &Site<'_>) -> Result<(bool, Vec<String>)> {
    let (kind, tail) = split_first_word(rest);
    let mut value = vec![kind.to_string()];

    if tail.starts_with('[') {
        value.extend(parse_json_array(tail, site)?);
        return Ok((true, value));
    }
    if !tail.is_empty() {
        value.push(tail.to_string());
    }
    Ok((false, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: Site<'static> = Site {
        line: 1,
        original: "TEST",
    };

    // --- extract_flags ---

    #[test]
    fn test_extract_flags_none() {
        let (flags, rest) = extract_flags("echo hi");
        assert!(flags.is_empty());
        assert_eq!(rest, "echo hi");
    }

    #[test]
    fn test_extract_flags_multiple() {
        let (flags, rest) = extract_flags("--from=builder --chown=1000:1000 /app /dst");
        assert_eq!(flags, vec!["--from=builder", "--chown=1000:1000"]);
        assert_eq!(rest, "/app /dst");
    }

    #[test]
    fn test_extract_flags_stops_at_first_value_token() {
        let (flags, rest) = extract_flags("--retries=5 CMD curl --fail localhost");
        assert_eq!(flags, vec!["--retries=5"]);
        assert_eq!(rest, "CMD curl --fail localhost");
    }

    #[test]
    fn test_extract_flags_only() {
        let (flags, rest) = extract_flags("--network=none");
        assert_eq!(flags, vec!["--network=none"]);
        assert_eq!(rest, "");
    }

    // --- parse_json_array ---

    #[test]
    fn test_parse_json_array() {
        let value = parse_json_array(r#"["echo", "hi"]"#, &SITE).unwrap();
        assert_eq!(value, vec!["echo", "hi"]);
    }

    #[test]
    fn test_parse_json_array_unicode() {
        let value = parse_json_array(r#"["echo", "☃", "é"]"#, &SITE).unwrap();
        assert_eq!(value, vec!["echo", "☃", "é"]);
    }

    #[test]
    fn test_parse_json_array_non_string() {
        let err = parse_json_array(r#"["echo", 1]"#, &SITE).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("not a string"));
        assert_eq!(err.original(), Some("TEST"));
    }

    #[test]
    fn test_parse_json_array_malformed() {
        assert!(parse_json_array(r#"["echo", "hi""#, &SITE).is_err());
        assert!(parse_json_array("[echo]", &SITE).is_err());
        assert!(parse_json_array(r#"["a"] trailing"#, &SITE).is_err());
    }

    #[test]
    fn test_parse_json_array_empty() {
        let err = parse_json_array("[]", &SITE).unwrap_err();
        assert!(err.to_string().contains("empty JSON array"));
    }

    // --- parse_words ---

    #[test]
    fn test_parse_words_whitespace() {
        assert_eq!(parse_words("  a  b\tc ", '\\'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_words_quotes_kept() {
        assert_eq!(
            parse_words(r#"MSG="hello world" B='x y'"#, '\\'),
            vec![r#"MSG="hello world""#, "B='x y'"]
        );
    }

    #[test]
    fn test_parse_words_escaped_space() {
        assert_eq!(parse_words(r"a\ b c", '\\'), vec![r"a\ b", "c"]);
    }

    #[test]
    fn test_parse_words_trailing_escape_dropped() {
        assert_eq!(parse_words("a b\\", '\\'), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_words_backtick_escape() {
        assert_eq!(parse_words("a` b c", '`'), vec!["a` b", "c"]);
    }

    // --- parse_name_value ---

    #[test]
    fn test_parse_name_value_pairs() {
        let value = parse_name_value(r#"A=1 B="two words" C="#, "env", '\\', &SITE).unwrap();
        assert_eq!(value, vec!["A", "1", "B", r#""two words""#, "C", ""]);
    }

    #[test]
    fn test_parse_name_value_legacy() {
        let value = parse_name_value("MY_VAR my value here", "env", '\\', &SITE).unwrap();
        assert_eq!(value, vec!["MY_VAR", "my value here"]);
    }

    #[test]
    fn test_parse_name_value_legacy_missing_value() {
        let err = parse_name_value("MY_VAR", "env", '\\', &SITE).unwrap_err();
        assert!(err.to_string().contains("ENV must have two arguments"));
    }

    #[test]
    fn test_parse_name_value_missing_equals() {
        let err = parse_name_value("a=1 b", "label", '\\', &SITE).unwrap_err();
        assert!(err.to_string().contains("can't find = in 'b'"));
    }

    #[test]
    fn test_parse_name_value_blank_name() {
        let err = parse_name_value("=x", "env", '\\', &SITE).unwrap_err();
        assert!(err.to_string().contains("ENV names can not be blank"));

        let err = parse_name_value("a=1 =2", "label", '\\', &SITE).unwrap_err();
        assert!(err.to_string().contains("LABEL names can not be blank"));
    }

    // --- parse_health_check ---

    #[test]
    fn test_parse_health_check_shell() {
        let (json, value) = parse_health_check("CMD echo hi", &SITE).unwrap();
        assert!(!json);
        assert_eq!(value, vec!["CMD", "echo hi"]);
    }

    #[test]
    fn test_parse_health_check_exec() {
        let (json, value) =
            parse_health_check(r#"CMD ["curl", "-f", "http://localhost/"]"#, &SITE).unwrap();
        assert!(json);
        assert_eq!(value, vec!["CMD", "curl", "-f", "http://localhost/"]);
    }

    #[test]
    fn test_parse_health_check_none() {
        let (json, value) = parse_health_check("NONE", &SITE).unwrap();
        assert!(!json);
        assert_eq!(value, vec!["NONE"]);
    }

    #[test]
    fn test_parse_health_check_bad_json() {
        assert!(parse_health_check("CMD [1]", &SITE).is_err());
    }
}
