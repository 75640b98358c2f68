use assert_matches::assert_matches;
use std::sync::{Arc, Mutex};
use us_address_rs::backend::{LabeledComponent, components_to_address};
use us_address_rs::response::MESSAGE_MULTIPLE_CANDIDATES;
use us_address_rs::{
    Address, AddressParsingBackend, AddressValidator, ConfidenceLevel, Error, ParseOutcome,
    RequestContext, Result,
};

/// Backend returning canned outcomes and recording what it was given.
#[derive(Debug)]
struct MockBackend {
    outcome: Result<ParseOutcome>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    fn returning(outcome: Result<ParseOutcome>) -> Self {
        Self {
            outcome,
            seen: Arc::default(),
        }
    }
}

impl AddressParsingBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn parse_address(&self, _ctx: &RequestContext, raw: &str) -> Result<ParseOutcome> {
        self.seen.lock().unwrap().push(raw.to_string());
        self.outcome.clone()
    }
}

fn address(street: &str, city: &str, state: &str, postal: &str) -> Address {
    Address {
        street_address: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        postal_code: postal.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_backend_receives_trimmed_input() {
    let backend = MockBackend::returning(Ok(ParseOutcome::single(address(
        "123 Main St",
        "New York",
        "NY",
        "10001",
    ))));
    let seen = Arc::clone(&backend.seen);
    let validator = AddressValidator::with_backend(backend);

    let ctx = RequestContext::new().with_request_id("r1");
    let resp = validator
        .parse_and_validate(&ctx, "  123 Main St New York NY 10001 ")
        .unwrap();

    assert_eq!(validator.backend_name(), "mock");
    assert_eq!(*seen.lock().unwrap(), vec!["123 Main St New York NY 10001"]);
    assert_eq!(resp.confidence.unwrap().state, Some(ConfidenceLevel::Direct));
}

#[test]
fn test_backend_not_called_for_empty_input() {
    let backend = MockBackend::returning(Err(Error::ambiguous("unreachable")));
    let seen = Arc::clone(&backend.seen);
    let validator = AddressValidator::with_backend(backend);

    assert_matches!(validator.validate("  "), Err(Error::Validation(_)));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_backend_error_is_propagated_unchanged() {
    let err = Error::parsing("address", "Could not extract required address components");
    let validator = AddressValidator::with_backend(MockBackend::returning(Err(err.clone())));

    assert_eq!(validator.validate("gibberish"), Err(err));
}

#[test]
fn test_missing_components_become_parsing_error() {
    let validator = AddressValidator::with_backend(MockBackend::returning(Ok(
        ParseOutcome::single(address("", "Somewhere", "", "")),
    )));

    assert_matches!(validator.validate("somewhere"), Err(Error::Parsing(detail)) => {
        assert_eq!(detail.field, "address");
        assert_eq!(
            detail.suggestion.as_deref(),
            Some("Ensure address contains at least street address, city, and state")
        );
    });
}

#[test]
fn test_invalid_postal_code_becomes_parsing_error() {
    let validator = AddressValidator::with_backend(MockBackend::returning(Ok(
        ParseOutcome::single(address("123 Main St", "New York", "NY", "1234")),
    )));

    let result = validator.validate("123 Main St, New York, NY 1234");
    assert_matches!(result, Err(Error::Parsing(detail)) => {
        assert_eq!(detail.reason, "postal_code must be 5 or 9-digit format");
    });
}

#[test]
fn test_multiple_candidates() {
    let primary = address("100 Main St", "Springfield", "IL", "62701");
    let alternative = address("100 Main St", "Springfield", "MO", "65801");
    let outcome = ParseOutcome::with_candidates(
        primary.clone(),
        vec![primary.clone(), alternative.clone()],
    );
    let validator = AddressValidator::with_backend(MockBackend::returning(Ok(outcome)));

    let resp = validator.validate("100 Main St, Springfield").unwrap();

    assert!(resp.success);
    assert!(resp.is_ambiguous());
    assert_eq!(resp.message, MESSAGE_MULTIPLE_CANDIDATES);
    assert_eq!(resp.address.state, "IL");
    assert_eq!(resp.candidates.len(), 2);
    assert_eq!(
        resp.candidates[0].formatted_address.as_deref(),
        Some("100 Main St, Springfield, IL 62701")
    );
    assert_eq!(
        resp.candidates[1].formatted_address.as_deref(),
        Some("100 Main St, Springfield, MO 65801")
    );
}

#[test]
fn test_preset_formatted_address_is_kept() {
    let mut primary = address("123 Main St", "New York", "NY", "");
    primary.formatted_address = Some("Already Formatted".to_string());
    let validator = AddressValidator::with_backend(MockBackend::returning(Ok(
        ParseOutcome::single(primary),
    )));

    let resp = validator.validate("anything").unwrap();
    assert_eq!(resp.address.formatted_address.as_deref(), Some("Already Formatted"));
}

#[test]
fn test_labeled_components_through_validator() {
    #[derive(Debug)]
    struct LabelBackend;

    impl AddressParsingBackend for LabelBackend {
        fn name(&self) -> &'static str {
            "labels"
        }

        fn parse_address(&self, _ctx: &RequestContext, raw: &str) -> Result<ParseOutcome> {
            let addr = components_to_address(
                raw,
                vec![
                    LabeledComponent::new("house_number", "1600"),
                    LabeledComponent::new("road", "pennsylvania avenue nw"),
                    LabeledComponent::new("city", "washington"),
                    LabeledComponent::new("state", "district of columbia"),
                    LabeledComponent::new("postcode", "20500"),
                ],
            );
            Ok(ParseOutcome::single(addr))
        }
    }

    let resp = AddressValidator::with_backend(LabelBackend)
        .validate("1600 pennsylvania avenue nw washington district of columbia 20500")
        .unwrap();

    assert_eq!(
        resp.address.formatted_address.as_deref(),
        Some("1600 Pennsylvania Avenue Nw, Washington, DC 20500")
    );
}
