//! Display-name resolution and synthesis

use crate::tokenizer::Field;
use crate::types::CleanupOptions;

/// Resolve a display name for a validated entry.
///
/// Priority: a quoted capture is used verbatim; otherwise the angled
/// name capture (or the decomposition prefix) is scrubbed and used when
/// non-empty; otherwise a name is synthesized from the address when
/// `add_display_names` is set.
pub(crate) fn resolve_display_name(
    field: Field<'_>,
    name_prefix: &str,
    address: &str,
    options: CleanupOptions,
) -> Option<String> {
    if let Some(quoted) = field.quoted_name.filter(|name| !name.is_empty()) {
        return Some(quoted.to_owned());
    }

    let scrubbed = scrub_name_candidate(field.bare_name.unwrap_or(name_prefix));
    if !scrubbed.is_empty() {
        return Some(scrubbed);
    }

    if options.add_display_names {
        let generated = generate_display_name(address);
        if !generated.is_empty() {
            return Some(generated);
        }
    }

    None
}

/// Drop address punctuation from a name candidate and trim it.
fn scrub_name_candidate(candidate: &str) -> String {
    let scrubbed: String = candidate
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"'))
        .collect();
    scrubbed.trim().to_string()
}

/// Synthesize a display name from an address or a bare local part.
///
/// Splits the local part on `.` and `_` and capitalizes each piece,
/// re-capitalizes across `-`, then strips a trailing run of digits.
///
/// ```rust
/// use email_cleanup::generate_display_name;
///
/// assert_eq!(generate_display_name("john.doe0149@gmail.com"), "John Doe");
/// assert_eq!(generate_display_name("jean-pierre.martin"), "Jean-Pierre Martin");
/// ```
#[must_use]
pub fn generate_display_name(address_or_local: &str) -> String {
    let local_part = address_or_local.split('@').next().unwrap_or("");

    let spaced = local_part
        .split(['.', '_'])
        .filter(|piece| !piece.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ");

    let hyphenated = spaced
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("-");

    hyphenated
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_string()
}

/// Uppercase the first character of a piece, leaving the rest as-is.
fn capitalize_first(piece: &str) -> String {
    let mut chars = piece.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
