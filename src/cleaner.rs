//! Main cleanup pipeline implementation

use crate::diacritics::fold_to_ascii;
use crate::error::Result;
use crate::grammar::{decompose, extract_valid_address};
use crate::names::resolve_display_name;
use crate::tokenizer::{Field, FieldTokenizer};
use crate::types::{CleanupOptions, EmailEntry};
use tracing::debug;

/// Clean up a free-form string into an ordered list of address entries.
///
/// Fields are processed in input order; rejected fields are dropped
/// without affecting the rest of the list. Duplicates are kept. The only
/// error is a conflicting options combination, raised before any field
/// is processed.
pub fn clean_up_email_list(text: &str, options: CleanupOptions) -> Result<Vec<String>> {
    let options = options.resolved()?;

    // Doubled @ signs are a common paste artifact
    let text = text.replace("@@", "@");
    if !text.contains('@') {
        return Ok(Vec::new());
    }

    let mut cleaned = Vec::new();
    for field in FieldTokenizer::new(&text) {
        if let Some(entry) = clean_field(field, options) {
            cleaned.push(render(entry, options));
        }
    }

    Ok(cleaned)
}

/// Convenience wrapper: the first normalized address found in the text,
/// if any.
#[must_use]
pub fn clean_up_single_address(text: &str) -> Option<String> {
    clean_up_email_list(text, CleanupOptions::emails_only())
        .ok()?
        .into_iter()
        .next()
}

/// Run one field through decomposition, folding and validation.
fn clean_field(field: Field<'_>, options: CleanupOptions) -> Option<EmailEntry> {
    let inspected = field.address.unwrap_or(field.raw);
    let compact: String = inspected.chars().filter(|c| !c.is_whitespace()).collect();

    let Some(parsed) = decompose(&compact) else {
        if options.log_garbage {
            debug!("Discarding field with no usable address: {}", field.raw);
        }
        return None;
    };

    let folded = fold_to_ascii(&format!("{}@{}", parsed.local_part, parsed.rest));
    let Some(address) = extract_valid_address(&folded) else {
        if options.log_garbage {
            debug!("Discarding candidate that fails the address grammar: {folded}");
        }
        return None;
    };

    let name = resolve_display_name(field, parsed.name_prefix, &address, options);

    Some(EmailEntry { name, address })
}

/// Format one entry according to the active options.
fn render(entry: EmailEntry, options: CleanupOptions) -> String {
    if options.only_return_emails {
        entry.address
    } else if options.only_return_names {
        // An address with no extractable or synthesized name still
        // contributes its bare address
        entry.name.unwrap_or(entry.address)
    } else {
        entry.to_string()
    }
}
