//! Slug generation.

use unicode_normalization::UnicodeNormalization;

/// Convert `value` into a URL-safe slug.
///
/// Accents are folded to ASCII and other non-ASCII characters dropped before
/// anything else, so Unicode spaces vanish rather than separate words.
/// Anything that is not alphanumeric, `_`, `-` or ASCII whitespace (including
/// the `\x1c`..`\x1f` separators) is removed, the
/// result lowercased, runs of whitespace and hyphens collapsed into a single
/// `-`, and leading or trailing `-`/`_` stripped.
///
/// ```
/// use coupons_core::storage::slugify;
///
/// assert_eq!(slugify("  Café Promo.txt "), "cafe-promotxt");
/// ```
#[must_use]
pub fn slugify(value: &str) -> String {
    let cleaned = value
        .nfkd()
        .filter(char::is_ascii)
        .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || is_space(c))
        .map(|c| c.to_ascii_lowercase());

    let mut slug = String::with_capacity(value.len());
    let mut in_separator = false;
    for c in cleaned {
        if c == '-' || is_space(c) {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.push(c);
            in_separator = false;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// ASCII whitespace, counting the file/group/record/unit separators.
fn is_space(c: char) -> bool {
    matches!(c, '\t'..='\r' | ' ' | '\x1c'..='\x1f')
}
