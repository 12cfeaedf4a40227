//! Address decomposition and strict validation grammars

use crate::diacritics::fold_to_ascii;
use regex::Regex;
use std::sync::LazyLock;

// A local-part piece: anything outside the usual specials. Dots join
// pieces but cannot lead, trail or double up.
const LOCAL_PART: &str = r#"[^<>()\[\]\\.,;:\s@"]+(?:\.[^<>()\[\]\\.,;:\s@"]+)*"#;

// A domain is either a bracketed dotted-quad literal or one-or-more
// labels followed by a TLD of at least two letters.
const DOMAIN: &str = r"\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}";

// Decomposition: lazy display-name prefix, local part, then everything
// after the first viable `@` (which may contain further `@`s).
static DECOMPOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?s)^(.*?)({LOCAL_PART})@(.*)$")).unwrap());

// Extraction accepts the first conforming substring; the standalone
// predicate requires the whole candidate to conform.
static EXTRACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{LOCAL_PART}@(?:{DOMAIN})")).unwrap());

static ANCHORED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{LOCAL_PART}@(?:{DOMAIN})$")).unwrap());

/// A field decomposed into a display-name candidate, a local part and
/// the unvalidated remainder after the first `@`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParsedCandidate<'a> {
    /// Everything before the local part; may be empty
    pub name_prefix: &'a str,

    /// Non-empty by construction
    pub local_part: &'a str,

    /// May be empty or malformed; validated after folding
    pub rest: &'a str,
}

/// Decompose a whitespace-stripped field. `None` means the field has no
/// usable address shape at all.
pub(crate) fn decompose(compact: &str) -> Option<ParsedCandidate<'_>> {
    let caps = DECOMPOSE_REGEX.captures(compact)?;
    Some(ParsedCandidate {
        name_prefix: caps.get(1).map_or("", |m| m.as_str()),
        local_part: caps.get(2).map_or("", |m| m.as_str()),
        rest: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Extract the first grammar-conforming address from a folded candidate,
/// tolerating surrounding garbage such as stray angle brackets.
pub(crate) fn extract_valid_address(folded: &str) -> Option<String> {
    EXTRACT_REGEX.find(folded).map(|m| m.as_str().to_lowercase())
}

/// Strict address check: true iff the entire candidate, lowercased and
/// diacritic-folded, matches the address grammar end to end.
///
/// This is stricter than list extraction, which accepts a conforming
/// substring inside a dirty field.
///
/// ```rust
/// use email_cleanup::is_email;
///
/// assert!(is_email("Jane.Doe@Example.COM"));
/// assert!(is_email("hervé@exemple.fr"));
/// assert!(!is_email("contact: jane@example.com"));
/// ```
#[must_use]
pub fn is_email(candidate: &str) -> bool {
    ANCHORED_REGEX.is_match(&fold_to_ascii(candidate))
}
