//! Whitespace and case normalization.

/// Trim the input and collapse runs of spaces into one.
///
/// Tabs and newlines inside the string are left alone; only the ASCII space
/// is collapsed.
///
/// # Example
///
/// ```rust
/// use us_address_rs::normalizer::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  123  Main   St "), "123 Main St");
/// ```
pub fn normalize_whitespace(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_space = false;

    for ch in trimmed.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    out
}

/// Title-case a string: lower-case everything, then upper-case the first
/// character of each word. Any character that is neither alphanumeric nor an
/// apostrophe separates words.
///
/// # Example
///
/// ```rust
/// use us_address_rs::normalizer::title_case;
///
/// assert_eq!(title_case("123 MAIN st"), "123 Main St");
/// assert_eq!(title_case("winston-salem"), "Winston-Salem");
/// assert_eq!(title_case("12 main st (rear)"), "12 Main St (Rear)");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if !ch.is_alphanumeric() && ch != '\'' {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
