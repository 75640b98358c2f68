//! ZIP and ZIP+4 handling.

use regex::Regex;
use std::sync::LazyLock;

// ASCII digits and word boundaries only; `\d` and `\b` would accept
// fullwidth and Arabic-Indic digit runs.
static ZIP_SEARCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{5}(?:-[0-9]{4})?(?-u:\b)").unwrap()
});

static ZIP_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());

/// Pull the first ZIP or ZIP+4 out of `text`.
///
/// Returns `(postal_code, remainder)`. Only the first match is removed; when
/// there is none the postal code is empty and the remainder is the input.
///
/// # Example
///
/// ```rust
/// use us_address_rs::postal_code::extract_postal_code;
///
/// let (zip, rest) = extract_postal_code("Chicago, IL 60601-1234");
/// assert_eq!(zip, "60601-1234");
/// assert_eq!(rest, "Chicago, IL ");
/// ```
pub fn extract_postal_code(text: &str) -> (String, String) {
    match ZIP_SEARCH_REGEX.find(text) {
        Some(m) => {
            let mut remainder = String::with_capacity(text.len() - m.len());
            remainder.push_str(&text[..m.start()]);
            remainder.push_str(&text[m.end()..]);
            (m.as_str().to_string(), remainder)
        }
        None => (String::new(), text.to_string()),
    }
}

/// Whether `code` is exactly a 5-digit ZIP or a hyphenated ZIP+4.
pub fn is_valid_postal_code(code: &str) -> bool {
    ZIP_FORMAT_REGEX.is_match(code)
}
