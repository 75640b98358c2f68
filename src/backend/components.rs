//! Mapping labeled parser output (libpostal style) onto an [`Address`].

use crate::address::Address;
use crate::classifier::classify;
use crate::corrections::track_corrections;
use crate::normalizer::title_case;
use crate::state::canonical_state;

/// A single labeled address component, e.g. `("road", "main st")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledComponent {
    /// Component label, e.g. "house_number", "road", "city"
    pub label: String,
    /// Component value
    pub value: String,
}

impl LabeledComponent {
    /// Create a new labeled component.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Build an address from labeled components.
///
/// The street is `house_number`, the title-cased `road` and `unit` joined
/// by spaces. A state that is neither a code nor a full name is kept
/// upper-cased so validation can reject it. The type and corrections are
/// derived from `raw`. Later components override earlier ones with the same
/// label.
///
/// # Example
///
/// ```rust
/// use us_address_rs::backend::{LabeledComponent, components_to_address};
///
/// let addr = components_to_address(
///     "123 main st new york ny",
///     vec![
///         LabeledComponent::new("house_number", "123"),
///         LabeledComponent::new("road", "main st"),
///         LabeledComponent::new("city", "new york"),
///         LabeledComponent::new("state", "ny"),
///     ],
/// );
/// assert_eq!(addr.street_address, "123 Main St");
/// assert_eq!(addr.state, "NY");
/// ```
pub fn components_to_address(raw: &str, components: Vec<LabeledComponent>) -> Address {
    let mut house_number = String::new();
    let mut road = String::new();
    let mut unit = String::new();
    let mut city = String::new();
    let mut state = String::new();
    let mut postal_code = String::new();

    for component in components {
        let value = component.value.trim().to_string();
        match component.label.as_str() {
            "house_number" => house_number = value,
            "road" => road = value,
            "unit" => unit = value,
            "city" => city = value,
            "state" => state = value,
            "postcode" => postal_code = value,
            _ => {}
        }
    }

    let street_address = [house_number, title_case(&road), unit]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let state = if state.is_empty() {
        state
    } else {
        canonical_state(&state)
            .map(str::to_string)
            .unwrap_or_else(|| state.to_uppercase())
    };

    Address {
        street_address,
        city: title_case(&city),
        state,
        postal_code,
        address_type: classify(raw),
        corrections_applied: track_corrections(raw),
        ..Default::default()
    }
}
