use crate::response::ParsingError;
use crate::response::parsing_error::json_kind_name;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, ParsingError>;

/// The decoded top level of a response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseEnvelope {
    /// The `data` object.
    Data(Map<String, Value>),

    /// A server-reported failure: the value of the `error` (or `errors`)
    /// entry, untouched.
    Error(Value),
}
impl ResponseEnvelope {
    /// Decode a raw response body.
    ///
    /// A non-null `error` or `errors` entry takes precedence over `data`.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|err| {
            ParsingError::InvalidJson {
                message: err.to_string(),
            }
        })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let mut root = match value {
            Value::Object(root) => root,
            other => return Err(ParsingError::NotAnObject {
                found: json_kind_name(&other),
            }),
        };

        for error_key in ["error", "errors"] {
            match root.remove(error_key) {
                Some(Value::Null) | None => (),
                Some(error) => return Ok(Self::Error(error)),
            }
        }

        match root.remove("data") {
            Some(Value::Object(data)) => Ok(Self::Data(data)),
            _ => Err(ParsingError::MissingData),
        }
    }
}
