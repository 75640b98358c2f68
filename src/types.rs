//! Common types and enums for us-address-rs.

use std::fmt;
use std::time::Instant;

/// Structural type of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressType {
    /// House number and street
    #[default]
    StandardStreet,
    /// Post office box
    PoBox,
    /// Military (Army/Fleet Post Office)
    ApoFpo,
    /// Rural route
    RuralRoute,
}

impl AddressType {
    /// The snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::StandardStreet => "standard_street",
            AddressType::PoBox => "po_box",
            AddressType::ApoFpo => "apo_fpo",
            AddressType::RuralRoute => "rural_route",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a field value was extracted from the input or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConfidenceLevel {
    /// Taken directly from the input
    Direct,
    /// Absent from the input
    Inferred,
}

impl ConfidenceLevel {
    /// The lower-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Direct => "direct",
            ConfidenceLevel::Inferred => "inferred",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field confidence grading for an address.
///
/// An ungraded field is `None`; only the postal code is ever graded
/// `Inferred`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Confidence {
    /// State grading
    #[cfg_attr(feature = "serde", serde(rename = "state_confidence"))]
    pub state: Option<ConfidenceLevel>,
    /// City grading
    #[cfg_attr(feature = "serde", serde(rename = "city_confidence"))]
    pub city: Option<ConfidenceLevel>,
    /// Postal code grading
    #[cfg_attr(feature = "serde", serde(rename = "postal_confidence"))]
    pub postal: Option<ConfidenceLevel>,
}

/// Request-scoped metadata handed in by the caller.
///
/// The pipeline never blocks, so the deadline is informational: it is
/// recorded on tracing spans and never checked mid-parse.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    request_id: Option<String>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request id.
    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Set the caller's deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The request id, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The caller's deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_address_type_names() {
        assert_eq!(AddressType::StandardStreet.to_string(), "standard_street");
        assert_eq!(AddressType::PoBox.as_str(), "po_box");
        assert_eq!(AddressType::ApoFpo.as_str(), "apo_fpo");
        assert_eq!(AddressType::RuralRoute.as_str(), "rural_route");
        assert_eq!(AddressType::default(), AddressType::StandardStreet);
    }

    #[test]
    fn test_confidence_level_names() {
        assert_eq!(ConfidenceLevel::Direct.to_string(), "direct");
        assert_eq!(ConfidenceLevel::Inferred.to_string(), "inferred");
    }

    #[test]
    fn test_request_context() {
        let deadline = Instant::now() + Duration::from_secs(5);
        let ctx = RequestContext::new()
            .with_request_id("req-1")
            .with_deadline(deadline);

        assert_eq!(ctx.request_id(), Some("req-1"));
        assert_eq!(ctx.deadline(), Some(deadline));
        assert_eq!(RequestContext::default().request_id(), None);
    }
}
