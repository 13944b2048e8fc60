//! `.env` parsing shared by `build.rs` and the unit tests.

/// Keys read through `option_env!` in `src/config.rs`.
pub const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "API_BASE_URL",
    "ENTRY_ROUTE",
    "LOG_LEVEL",
    "TOAST_DURATION_MS",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine<'a> {
    /// Blank line or comment.
    Skip,
    Entry { key: &'a str, value: &'a str },
    /// A well-formed entry the app never reads.
    Unknown(&'a str),
    Malformed,
}

/// Classifies one line of a `.env` file.
///
/// Accepts an optional `export ` prefix and strips one pair of matching
/// single or double quotes around the value.
pub fn parse_line(line: &str) -> EnvLine<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return EnvLine::Skip;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);

    let Some((key, value)) = line.split_once('=') else {
        return EnvLine::Malformed;
    };
    let key = key.trim();
    if key.is_empty() {
        return EnvLine::Malformed;
    }
    if !CONFIG_KEYS.contains(&key) {
        return EnvLine::Unknown(key);
    }

    EnvLine::Entry { key, value: unquote(value.trim()) }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line(""), EnvLine::Skip);
        assert_eq!(parse_line("   "), EnvLine::Skip);
        assert_eq!(parse_line("# ENTRY_ROUTE=/"), EnvLine::Skip);
    }

    #[test]
    fn known_keys_are_forwarded_unquoted() {
        assert_eq!(
            parse_line("ENTRY_ROUTE=/login"),
            EnvLine::Entry { key: "ENTRY_ROUTE", value: "/login" }
        );
        assert_eq!(
            parse_line("export API_BASE_URL = \"https://api.test/api\""),
            EnvLine::Entry { key: "API_BASE_URL", value: "https://api.test/api" }
        );
        assert_eq!(
            parse_line("LOG_LEVEL='debug'"),
            EnvLine::Entry { key: "LOG_LEVEL", value: "debug" }
        );
    }

    #[test]
    fn values_keep_inner_equals_signs() {
        assert_eq!(
            parse_line("API_BASE_URL=https://api.test/api?x=1"),
            EnvLine::Entry { key: "API_BASE_URL", value: "https://api.test/api?x=1" }
        );
    }

    #[test]
    fn unknown_and_malformed_lines_are_reported() {
        assert_eq!(parse_line("DATABASE_URL=postgres://"), EnvLine::Unknown("DATABASE_URL"));
        assert_eq!(parse_line("ENTRY_ROUTE"), EnvLine::Malformed);
        assert_eq!(parse_line("=value"), EnvLine::Malformed);
    }

    #[test]
    fn example_file_only_sets_known_keys() {
        let example = include_str!(".env.example");
        for line in example.lines() {
            match parse_line(line) {
                EnvLine::Skip => {}
                EnvLine::Entry { key, .. } => assert!(CONFIG_KEYS.contains(&key)),
                other => panic!("unexpected line {:?} in .env.example", other),
            }
        }
    }
}
