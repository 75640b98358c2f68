//! Splitting free text into street and city segments.

use crate::data;
use crate::normalizer::title_case;

/// Split address text into segments.
///
/// Comma-delimited text is split on commas, with each part trimmed and empty
/// parts dropped. Without commas, the text is split after the first street
/// suffix word ("St", "Ave", ...). When there is no suffix, or the suffix is
/// the last word, the whole text comes back as one segment.
///
/// # Example
///
/// ```rust
/// use us_address_rs::segmenter::segment;
///
/// assert_eq!(segment("123 Main St, , Boston"), vec!["123 Main St", "Boston"]);
/// assert_eq!(segment("123 Main St Boston MA"), vec!["123 Main St", "Boston MA"]);
/// ```
pub fn segment(text: &str) -> Vec<String> {
    if text.contains(',') {
        return text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 1 {
        return words.into_iter().map(str::to_string).collect();
    }

    match find_street_end(&words) {
        Some(end) if end < words.len() => {
            vec![words[..end].join(" "), words[end..].join(" ")]
        }
        _ => vec![text.to_string()],
    }
}

/// Index one past the first street-suffix word.
fn find_street_end(words: &[&str]) -> Option<usize> {
    words.iter().position(|word| {
        let lower = word.trim_end_matches(['.', ',']).to_lowercase();
        data::is_street_suffix(&lower)
    })
    .map(|i| i + 1)
}

/// Assign segments to `(street, city)`, title-casing both.
///
/// A lone segment is a street when it starts with a digit and a city
/// otherwise. With two or more segments the first is the street and the
/// second the city; anything after the second is dropped.
pub fn assign_segments(segments: &[String]) -> (String, String) {
    match segments {
        [] => (String::new(), String::new()),
        [only] => {
            if looks_like_street(only) {
                (title_case(only.trim()), String::new())
            } else {
                (String::new(), title_case(only.trim()))
            }
        }
        [street, city, ..] => (title_case(street.trim()), title_case(city.trim())),
    }
}

fn looks_like_street(segment: &str) -> bool {
    segment
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}
