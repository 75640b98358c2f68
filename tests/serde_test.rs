#![cfg(feature = "serde")]

use us_address_rs::{AddressType, AddressValidator, ValidateResponse};

#[test]
fn test_response_json_shape() {
    let resp = AddressValidator::new()
        .validate("123 main st, new york, ny")
        .unwrap();
    let json = serde_json::to_value(&resp).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["address"]["street_address"], "123 Main St");
    assert_eq!(json["address"]["postal_code"], "");
    assert_eq!(json["address"]["address_type"], "standard_street");
    assert_eq!(
        json["address"]["formatted_address"],
        "123 Main St, New York, NY"
    );
    assert_eq!(json["confidence"]["state_confidence"], "direct");
    assert_eq!(json["confidence"]["postal_confidence"], "inferred");
    assert_eq!(json["corrections_applied"][0], "Standardized capitalization");
    assert!(json.get("candidates").is_none());
    assert!(json["address"].get("confidence").is_none());
    assert!(json["address"].get("corrections_applied").is_none());
}

#[test]
fn test_response_deserializes() {
    let resp = AddressValidator::new()
        .validate("PO Box 9, Austin, TX 78701")
        .unwrap();
    let json = serde_json::to_string(&resp).unwrap();

    let back: ValidateResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back.address.street_address, resp.address.street_address);
    assert_eq!(back.address.formatted_address, resp.address.formatted_address);
    assert_eq!(back.address.address_type, AddressType::PoBox);
    assert_eq!(back.confidence, resp.confidence);
    assert_eq!(back.corrections_applied, resp.corrections_applied);
    assert_eq!(back.message, resp.message);
    assert!(back.address.confidence.is_none());
}
