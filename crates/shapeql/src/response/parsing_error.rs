use thiserror::Error;

/// The payload did not have the shape a result can be built from.
///
/// Every variant shares the same [`DOMAIN`](Self::DOMAIN) and
/// [`CODE`](Self::CODE) so listeners can recognize parsing failures without
/// matching on the variant.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParsingError {
    #[error("Response body is not valid JSON: {message}")]
    InvalidJson {
        message: String,
    },

    #[error("Response contains neither a `data` object nor an `error` entry")]
    MissingData,

    #[error("Response body is {found}, expected a JSON object")]
    NotAnObject {
        found: &'static str,
    },

    #[error(
        "Populated an instance of `{found}` where `{expected}` was requested"
    )]
    TargetTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error(
        "Expected exactly one top-level key in `data`, found {}: [{}]",
        keys.len(),
        keys.join(", "),
    )]
    UnexpectedRootKeyCount {
        keys: Vec<String>,
    },

    #[error("Top-level `{key}` holds {found}, expected an object or an array")]
    UnexpectedRootValue {
        found: &'static str,
        key: String,
    },
}
impl ParsingError {
    pub const DOMAIN: &'static str = "shapeql.response";
    pub const CODE: i32 = 100;

    pub fn domain(&self) -> &'static str {
        Self::DOMAIN
    }

    pub fn code(&self) -> i32 {
        Self::CODE
    }
}

/// A short description of a JSON value's kind, for error messages.
pub(crate) fn json_kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::Object(_) => "an object",
        serde_json::Value::String(_) => "a string",
    }
}
