use crate::response::ParsingError;
use crate::response::parsing_error::json_kind_name;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, ParsingError>;

/// Whether a `data` object holds one result object or a list of them.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseClassification<'data> {
    Plural {
        items: &'data [Value],
        key: &'data str,
    },
    Singular {
        key: &'data str,
        object: &'data Map<String, Value>,
    },
}
impl<'data> ResponseClassification<'data> {
    /// The single top-level key the result was found under.
    pub fn key(&self) -> &'data str {
        match self {
            Self::Plural { key, .. } => key,
            Self::Singular { key, .. } => key,
        }
    }
}

pub struct ResponseClassifier;
impl ResponseClassifier {
    /// Classify a `data` object, which must hold exactly one key whose value
    /// is an array (plural) or an object (singular).
    pub fn classify(data: &Map<String, Value>) -> Result<ResponseClassification<'_>> {
        let mut entries = data.iter();
        let (key, value) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Err(ParsingError::UnexpectedRootKeyCount {
                keys: data.keys().cloned().collect(),
            }),
        };

        match value {
            Value::Array(items) => Ok(ResponseClassification::Plural {
                items: items.as_slice(),
                key: key.as_str(),
            }),
            Value::Object(object) => Ok(ResponseClassification::Singular {
                key: key.as_str(),
                object,
            }),
            other => Err(ParsingError::UnexpectedRootValue {
                found: json_kind_name(other),
                key: key.to_string(),
            }),
        }
    }
}
