use crate::client::ClientConfig;
use crate::client::TransmitError;
use crate::introspection::DEFAULT_MAX_DEPTH;

#[test]
fn defaults_allow_http_and_https() {
    let config = ClientConfig::default();

    assert_eq!(config.allowed_url_schemes(), ["http", "https"]);
    assert_eq!(config.max_introspection_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn missing_keys_deserialize_to_defaults() {
    let config: ClientConfig =
        serde_json::from_str(r#"{ "max_introspection_depth": 4 }"#).unwrap();

    assert_eq!(config.max_introspection_depth(), 4);
    assert_eq!(config.allowed_url_schemes(), ["http", "https"]);
}

#[test]
fn config_serializes_every_key() {
    let config = ClientConfig::new().set_allowed_url_schemes(["HTTPS"]);

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        serde_json::json!({
            "allowed_url_schemes": ["https"],
            "max_introspection_depth": DEFAULT_MAX_DEPTH,
        }),
    );
}

#[test]
fn url_with_allowed_scheme_parses() {
    let url = ClientConfig::default()
        .parse_url("https://api.example.com/graphql")
        .unwrap();

    assert_eq!(url.host_str(), Some("api.example.com"));
}

#[test]
fn malformed_url_is_rejected() {
    let result = ClientConfig::default().parse_url("not a url");

    assert!(matches!(result, Err(TransmitError::InvalidUrl { .. })), "{result:?}");
}

#[test]
fn disallowed_scheme_is_rejected() {
    let result = ClientConfig::default().parse_url("ftp://files.example.com/graphql");

    assert_eq!(
        result,
        Err(TransmitError::UnsupportedUrlScheme {
            allowed: vec!["http".to_string(), "https".to_string()],
            scheme: "ftp".to_string(),
        }),
    );
}
