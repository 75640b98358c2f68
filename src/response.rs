//! Structured success result handed back to callers.

use crate::address::Address;
use crate::types::Confidence;

/// Message for a single-interpretation success.
pub const MESSAGE_VALIDATED: &str = "Address validated successfully";

/// Message when the backend produced several interpretations.
pub const MESSAGE_MULTIPLE_CANDIDATES: &str =
    "Multiple valid interpretations found; returning most populous match";

/// Result of a successful parse-and-validate call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidateResponse {
    /// Always `true` for a returned response
    pub success: bool,
    /// The primary (most populous) interpretation
    pub address: Address,
    /// Every interpretation when the input was ambiguous
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub candidates: Vec<Address>,
    /// Grading of the primary address
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub confidence: Option<Confidence>,
    /// Corrections applied to the primary address
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub corrections_applied: Vec<String>,
    /// User-facing summary
    pub message: String,
}

impl ValidateResponse {
    /// Build a response from a graded, formatted primary and its candidates.
    pub fn new(address: Address, candidates: Vec<Address>) -> Self {
        let message = if candidates.is_empty() {
            MESSAGE_VALIDATED
        } else {
            MESSAGE_MULTIPLE_CANDIDATES
        };

        Self {
            success: true,
            confidence: address.confidence.clone(),
            corrections_applied: address.corrections_applied.clone(),
            address,
            candidates,
            message: message.to_string(),
        }
    }

    /// Whether the input had more than one interpretation.
    pub fn is_ambiguous(&self) -> bool {
        !self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_interpretation() {
        let address = Address {
            city: "Boston".to_string(),
            state: "MA".to_string(),
            corrections_applied: vec!["Normalized whitespace".to_string()],
            ..Default::default()
        };
        let resp = ValidateResponse::new(address, Vec::new());

        assert!(resp.success);
        assert!(!resp.is_ambiguous());
        assert_eq!(resp.message, MESSAGE_VALIDATED);
        assert_eq!(resp.corrections_applied, vec!["Normalized whitespace"]);
    }

    #[test]
    fn test_multiple_interpretations() {
        let resp = ValidateResponse::new(Address::default(), vec![Address::default(); 2]);
        assert!(resp.is_ambiguous());
        assert_eq!(resp.message, MESSAGE_MULTIPLE_CANDIDATES);
    }
}
