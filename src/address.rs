//! The normalized address entity and its rules.

use crate::postal_code::is_valid_postal_code;
use crate::state::is_valid_state_code;
use crate::types::{AddressType, Confidence, ConfidenceLevel};

/// A rule an [`Address`] failed in [`Address::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressRuleViolation {
    /// Fewer than two of street, city and state are present
    #[error("at least 2 of street_address, city, state must be present")]
    MissingFields,

    /// State is not one of the 51 USPS codes
    #[error("invalid state code: {0}")]
    InvalidState(String),

    /// Postal code is neither ZIP nor ZIP+4
    #[error("postal_code must be 5 or 9-digit format")]
    InvalidPostalCode(String),
}

/// A normalized US address.
///
/// Built fresh from one raw string by a parsing backend, then graded and
/// formatted once by the validator before it is handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Street line, e.g. "123 Main St"
    pub street_address: String,
    /// City, title-cased
    pub city: String,
    /// Two-letter USPS code, upper-case
    pub state: String,
    /// "NNNNN" or "NNNNN-NNNN"
    pub postal_code: String,
    /// Structural type
    pub address_type: AddressType,
    /// Cached display string
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub formatted_address: Option<String>,
    /// Per-field grading, set during validation
    ///
    /// Serialized once, at the top level of a response.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub confidence: Option<Confidence>,
    /// Ordered correction notes
    #[cfg_attr(feature = "serde", serde(skip))]
    pub corrections_applied: Vec<String>,
}

impl Address {
    /// Number of non-empty fields among street, city and state.
    pub fn core_field_count(&self) -> usize {
        [&self.street_address, &self.city, &self.state]
            .iter()
            .filter(|field| !field.is_empty())
            .count()
    }

    /// Check the address against the acceptance rules.
    ///
    /// Rules are checked in order (field count, state code, postal format)
    /// and the first failure is returned.
    pub fn validate(&self) -> Result<(), AddressRuleViolation> {
        if self.core_field_count() < 2 {
            return Err(AddressRuleViolation::MissingFields);
        }

        if !self.state.is_empty() && !is_valid_state_code(&self.state) {
            return Err(AddressRuleViolation::InvalidState(self.state.clone()));
        }

        if !self.postal_code.is_empty() && !is_valid_postal_code(&self.postal_code) {
            return Err(AddressRuleViolation::InvalidPostalCode(
                self.postal_code.clone(),
            ));
        }

        Ok(())
    }

    /// Grade state, city and postal code.
    ///
    /// State and city are graded `Direct` when present and left ungraded
    /// otherwise. A missing postal code is graded `Inferred`.
    pub fn assign_confidence(&mut self) {
        let confidence = self.confidence.get_or_insert_with(Confidence::default);

        if !self.state.is_empty() {
            confidence.state = Some(ConfidenceLevel::Direct);
        }
        if !self.city.is_empty() {
            confidence.city = Some(ConfidenceLevel::Direct);
        }
        confidence.postal = Some(if self.postal_code.is_empty() {
            ConfidenceLevel::Inferred
        } else {
            ConfidenceLevel::Direct
        });
    }

    /// Render the display string: "street, city, STATE ZIP".
    ///
    /// The first result is cached and returned on every later call, even if
    /// fields change in between. A value set on `formatted_address` before
    /// the first call is returned as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use us_address_rs::Address;
    ///
    /// let mut addr = Address {
    ///     street_address: "123 Main St".into(),
    ///     city: "New York".into(),
    ///     state: "NY".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(addr.format_address(), "123 Main St, New York, NY");
    /// ```
    pub fn format_address(&mut self) -> &str {
        if self.formatted_address.is_none() {
            self.formatted_address = Some(self.render());
        }
        self.formatted_address.as_deref().unwrap_or_default()
    }

    fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        if !self.street_address.is_empty() {
            parts.push(self.street_address.clone());
        }
        if !self.city.is_empty() {
            parts.push(self.city.clone());
        }

        let state_zip = match (self.state.is_empty(), self.postal_code.is_empty()) {
            (false, false) => format!("{} {}", self.state, self.postal_code),
            (false, true) => self.state.clone(),
            (true, false) => self.postal_code.clone(),
            (true, true) => String::new(),
        };
        if !state_zip.is_empty() {
            parts.push(state_zip);
        }

        parts.join(", ")
    }
}
