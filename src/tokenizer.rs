//! Field tokenization over raw pasted text

use regex::Regex;
use std::sync::LazyLock;

// One candidate field per match, leftmost-first. Three forms:
// quoted display name, bare angled display name, plain address run.
// A field ends at the first separator run (comma, semicolon, slash,
// whitespace) after the `@`; the part after the `@` may itself contain
// further `@` occurrences.
static FIELD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"[^@"]*"(?P<quoted>[^"]*)"\s*<(?P<quoted_addr>[^@]*@[^,;/\s]*)"#,
        r"|",
        r#"(?P<bare_name>[^@<>,;/]*)<(?P<bare_addr>[^@]*@[^,;/\s]*)"#,
        r"|",
        r"[^@,;/\s]*@[^,;/\s]*",
    ))
    .unwrap()
});

/// One tokenized candidate unit of input believed to contain a single
/// address. Created per pass, consumed immediately, never retained.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'a> {
    /// Full matched text, junk prefix included
    pub raw: &'a str,

    /// Verbatim capture of a double-quoted display name
    pub quoted_name: Option<&'a str>,

    /// Display-name candidate captured before an angled address,
    /// interior spacing intact
    pub bare_name: Option<&'a str>,

    /// Pre-extracted `local@rest` text for the angled forms
    pub address: Option<&'a str>,
}

/// Lazy, finite, restartable sequence of fields over one input.
///
/// Each call matches leftmost from the cursor, then advances past the
/// match and its trailing separator run. Every branch of the field
/// grammar consumes at least one character, so the scan strictly
/// advances and terminates on any input.
pub(crate) struct FieldTokenizer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> FieldTokenizer<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }
}

impl<'a> Iterator for FieldTokenizer<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = FIELD_REGEX.captures_at(self.input, self.cursor)?;
        let matched = caps.get(0)?;

        let after = &self.input[matched.end()..];
        let remaining = after
            .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '/'));
        self.cursor = self.input.len() - remaining.len();

        let field = if let Some(quoted) = caps.name("quoted") {
            Field {
                raw: matched.as_str(),
                quoted_name: Some(quoted.as_str()),
                bare_name: None,
                address: caps.name("quoted_addr").map(|m| m.as_str()),
            }
        } else if let Some(addr) = caps.name("bare_addr") {
            Field {
                raw: matched.as_str(),
                quoted_name: None,
                bare_name: caps.name("bare_name").map(|m| m.as_str()),
                address: Some(addr.as_str()),
            }
        } else {
            Field {
                raw: matched.as_str(),
                quoted_name: None,
                bare_name: None,
                address: None,
            }
        };

        Some(field)
    }
}
