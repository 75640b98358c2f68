//! Address type classification.

use crate::types::AddressType;

/// Classify an address by keyword scan of the raw, unmodified input.
///
/// PO box markers are checked first, then APO/FPO, then rural route, so an
/// input carrying both a PO box and a military marker is a PO box. The
/// APO/FPO check is a plain substring match.
///
/// # Example
///
/// ```rust
/// use us_address_rs::{classifier::classify, AddressType};
///
/// assert_eq!(classify("P.O. Box 789, Chicago, IL"), AddressType::PoBox);
/// assert_eq!(classify("123 Main St, New York, NY"), AddressType::StandardStreet);
/// ```
pub fn classify(raw: &str) -> AddressType {
    let lower = raw.to_lowercase();

    if lower.contains("po box") || lower.contains("p.o. box") || lower.contains("p.o.") {
        return AddressType::PoBox;
    }
    if lower.contains("apo") || lower.contains("fpo") {
        return AddressType::ApoFpo;
    }
    if lower.contains("rural route") || has_token(&lower, "rr") {
        return AddressType::RuralRoute;
    }
    AddressType::StandardStreet
}

fn has_token(lower: &str, token: &str) -> bool {
    lower
        .split(|c: char| c.is_whitespace() || c == ',')
        .any(|word| word == token)
}
