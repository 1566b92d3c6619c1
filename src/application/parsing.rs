//! # Parsing Utils
//!
//! Extracts the trigger token and argument list from raw message text.
//! Matching against the registry is exact, so nothing here folds case.

use regex::Regex;
use std::sync::LazyLock;

static ARG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // A double-quoted run is one argument, anything else splits on whitespace.
    Regex::new(r#""([^"]*)"|(\S+)"#).expect("argument pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub trigger: String,
    pub args: Vec<String>,
}

/// `None` unless `body` is `<prefix><trigger> [args...]`.
pub fn parse_command(body: &str, prefix: &str) -> Option<ParsedCommand> {
    let rest = body.trim().strip_prefix(prefix)?;

    let (trigger, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    if trigger.is_empty() {
        return None;
    }

    Some(ParsedCommand {
        trigger: trigger.to_string(),
        args: split_args(args),
    })
}

pub fn split_args(input: &str) -> Vec<String> {
    ARG_REGEX
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}
