use crate::document::DocumentBuildError;
use crate::introspection::IntrospectionError;
use thiserror::Error;

/// Why a request was rejected before reaching the transport. No transport
/// call is made when one of these is returned.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransmitError {
    #[error("Failed to build the request document: {0}")]
    DocumentBuild(#[from] DocumentBuildError),

    #[error("Failed to introspect `{type_name}`: {source}")]
    Introspection {
        source: IntrospectionError,
        type_name: &'static str,
    },

    #[error("Invalid request URL `{url}`: {source}")]
    InvalidUrl {
        source: url::ParseError,
        url: String,
    },

    #[error(
        "URL scheme `{scheme}` is not allowed (expected one of: {})",
        allowed.join(", "),
    )]
    UnsupportedUrlScheme {
        allowed: Vec<String>,
        scheme: String,
    },
}
