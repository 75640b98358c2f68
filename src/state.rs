//! US state resolution.

use crate::data;
use tracing::debug;

/// Whether `code` is one of the 51 USPS codes. Case-insensitive.
pub fn is_valid_state_code(code: &str) -> bool {
    data::state_code(&code.to_ascii_uppercase()).is_some()
}

/// Canonicalize a free-form state value to a USPS code.
///
/// Accepts a code in any case or a full state name. Returns `None` for
/// anything else.
pub fn canonical_state(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    data::state_code(&trimmed.to_ascii_uppercase())
        .or_else(|| data::state_code_for_name(&trimmed.to_lowercase()))
}

/// Find and remove a state from `segments`, scanning right to left.
///
/// Each segment is checked first for a two-letter code among its words
/// (last word first), then for a whole-segment match against a full state
/// name. The first hit is removed from its segment, an emptied segment is
/// dropped from the list, and scanning stops. Segments are left untouched
/// when nothing matches.
///
/// # Example
///
/// ```rust
/// use us_address_rs::state::resolve_state;
///
/// let mut segments = vec!["123 Main St".to_string(), "Albany NY".to_string()];
/// assert_eq!(resolve_state(&mut segments), Some("NY"));
/// assert_eq!(segments, vec!["123 Main St", "Albany"]);
/// ```
pub fn resolve_state(segments: &mut Vec<String>) -> Option<&'static str> {
    for i in (0..segments.len()).rev() {
        let mut words: Vec<&str> = segments[i].split_whitespace().collect();

        let abbreviation = words.iter().enumerate().rev().find_map(|(j, word)| {
            if word.len() == 2 {
                data::state_code(&word.to_ascii_uppercase()).map(|code| (j, code))
            } else {
                None
            }
        });

        if let Some((j, code)) = abbreviation {
            words.remove(j);
            let rest = words.join(" ");
            if rest.is_empty() {
                segments.remove(i);
            } else {
                segments[i] = rest;
            }
            debug!(state = code, segment = i, "resolved state abbreviation");
            return Some(code);
        }

        if let Some(code) = data::state_code_for_name(&segments[i].trim().to_lowercase()) {
            segments.remove(i);
            debug!(state = code, segment = i, "resolved full state name");
            return Some(code);
        }
    }

    None
}
