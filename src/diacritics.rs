//! Diacritic folding for address canonicalization

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lowercase source letters grouped by their ASCII base form.
///
/// Candidates are lowercased before substitution, so only lowercase
/// sources need to appear here. A few bases expand to more than one
/// letter (ae, oe, ss, ...).
const FOLD_GROUPS: &[(&str, &str)] = &[
    ("a", "àáâãäåāăąǎǟǡǻȁȃȧạảấầẩẫậắằẳẵặ"),
    ("ae", "æǣǽ"),
    ("b", "ƀƃɓḃḅḇ"),
    ("c", "çćĉċčƈȼḉ"),
    ("d", "ðďđƌɖɗḋḍḏḑḓ"),
    ("dz", "ǆǳ"),
    ("e", "èéêëēĕėęěȅȇȩḕḗḙḛḝẹẻẽếềểễệ"),
    ("f", "ƒḟ"),
    ("g", "ĝğġģǥǧǵɠḡ"),
    ("h", "ĥħȟḣḥḧḩḫẖ"),
    ("i", "ìíîïĩīĭįıǐȉȋḭḯỉị"),
    ("ij", "ĳ"),
    ("j", "ĵǰ"),
    ("k", "ķƙǩḱḳḵ"),
    ("l", "ĺļľŀłƚḷḹḻḽ"),
    ("lj", "ǉ"),
    ("m", "ɱḿṁṃ"),
    ("n", "ñńņňŉƞǹɲṅṇṉṋ"),
    ("nj", "ǌ"),
    ("o", "òóôõöøōŏőơǒǫǭǿȍȏȫȭȯȱṍṏṑṓọỏốồổỗộớờởỡợ"),
    ("oe", "œ"),
    ("p", "ƥṕṗ"),
    ("r", "ŕŗřȑȓṙṛṝṟ"),
    ("s", "śŝşšșṡṣṥṧṩ"),
    ("ss", "ß"),
    ("t", "ţťŧƭțṫṭṯṱẗ"),
    ("th", "þ"),
    ("u", "ùúûüũūŭůűųưǔǖǘǚǜȕȗṳṵṷṹṻụủứừửữự"),
    ("v", "ṽṿ"),
    ("w", "ŵẁẃẅẇẉẘ"),
    ("x", "ẋẍ"),
    ("y", "ýÿŷȳẏẙỳỵỷỹ"),
    ("z", "źżžƶẑẓẕ"),
];

/// Built once on first use and never rebuilt; read-only afterwards.
static FOLD_TABLE: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    FOLD_GROUPS
        .iter()
        .flat_map(|&(base, sources)| sources.chars().map(move |source| (source, base)))
        .collect()
});

/// Lowercase a candidate and replace every code point outside the ASCII
/// printable range with its base form. Code points absent from the table
/// pass through unchanged.
pub(crate) fn fold_to_ascii(candidate: &str) -> String {
    let lowered = candidate.to_lowercase();
    let mut folded = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c as u32 <= 0x7E {
            folded.push(c);
        } else if let Some(base) = FOLD_TABLE.get(&c) {
            folded.push_str(base);
        } else {
            folded.push(c);
        }
    }
    folded
}
