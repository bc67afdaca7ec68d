use crate::response::ParsingError;
use crate::response::ResponseEnvelope;
use serde_json::json;

#[test]
fn data_object_is_unwrapped() {
    let envelope =
        ResponseEnvelope::from_slice(br#"{"data": {"flight": {"flightID": "1272"}}}"#)
            .unwrap();

    let ResponseEnvelope::Data(data) = envelope else {
        panic!("expected a data envelope");
    };
    assert_eq!(data.get("flight"), Some(&json!({ "flightID": "1272" })));
}

#[test]
fn error_entry_is_passed_through_untouched() {
    let envelope =
        ResponseEnvelope::from_slice(br#"{"error": {"message": "no such flight"}}"#)
            .unwrap();

    assert_eq!(
        envelope,
        ResponseEnvelope::Error(json!({ "message": "no such flight" })),
    );
}

#[test]
fn errors_entry_wins_over_data() {
    let envelope = ResponseEnvelope::from_value(json!({
        "data": { "flight": {} },
        "errors": [{ "message": "partial failure" }],
    })).unwrap();

    assert_eq!(
        envelope,
        ResponseEnvelope::Error(json!([{ "message": "partial failure" }])),
    );
}

#[test]
fn null_error_entry_is_ignored() {
    let envelope = ResponseEnvelope::from_value(json!({
        "data": { "flight": {} },
        "error": null,
    })).unwrap();

    assert!(matches!(envelope, ResponseEnvelope::Data(_)));
}

#[test]
fn missing_or_non_object_data_is_a_parsing_error() {
    assert_eq!(
        ResponseEnvelope::from_value(json!({ "result": {} })),
        Err(ParsingError::MissingData),
    );
    assert_eq!(
        ResponseEnvelope::from_value(json!({ "data": [1, 2] })),
        Err(ParsingError::MissingData),
    );
}

#[test]
fn non_object_body_is_a_parsing_error() {
    assert_eq!(
        ResponseEnvelope::from_slice(b"[1, 2, 3]"),
        Err(ParsingError::NotAnObject { found: "an array" }),
    );
}

#[test]
fn malformed_json_is_a_parsing_error_with_fixed_domain_and_code() {
    let err = ResponseEnvelope::from_slice(b"<html>502</html>").unwrap_err();

    assert!(matches!(err, ParsingError::InvalidJson { .. }), "{err:?}");
    assert_eq!(err.domain(), ParsingError::DOMAIN);
    assert_eq!(err.code(), ParsingError::CODE);
}
