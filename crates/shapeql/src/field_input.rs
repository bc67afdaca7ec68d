use crate::BusinessObject;
use serde::de::DeserializeOwned;
use thiserror::Error;

type Result<T> = std::result::Result<T, FieldError>;

/// A value handed to [`BusinessObject::set_field()`] while populating an
/// object graph from a response.
#[derive(Debug)]
pub enum FieldInput {
    /// The raw decoded JSON for a scalar or array-of-scalar field. No
    /// coercion has been applied.
    Json(serde_json::Value),

    /// A freshly populated nested object.
    Object(Box<dyn BusinessObject>),

    /// Freshly populated elements for an array-of-object field, in response
    /// order.
    Objects(Vec<Box<dyn BusinessObject>>),
}
impl FieldInput {
    /// Decode a [`FieldInput::Json`] value into the field's Rust type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => serde_json::from_value(value).map_err(|err| {
                FieldError::Decode {
                    message: err.to_string(),
                    target: std::any::type_name::<T>(),
                }
            }),
            other => Err(FieldError::UnexpectedInput {
                expected: "json",
                received: other.kind_name(),
            }),
        }
    }

    /// Take a [`FieldInput::Object`] as the concrete nested type.
    pub fn into_object<T: BusinessObject>(self) -> Result<T> {
        match self {
            Self::Object(object) => downcast_object(object),
            other => Err(FieldError::UnexpectedInput {
                expected: "object",
                received: other.kind_name(),
            }),
        }
    }

    /// Take a [`FieldInput::Objects`] as a `Vec` of the concrete element
    /// type.
    pub fn into_objects<T: BusinessObject>(self) -> Result<Vec<T>> {
        match self {
            Self::Objects(objects) => {
                objects.into_iter()
                    .map(downcast_object)
                    .collect()
            },
            other => Err(FieldError::UnexpectedInput {
                expected: "objects",
                received: other.kind_name(),
            }),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Object(_) => "object",
            Self::Objects(_) => "objects",
        }
    }
}

fn downcast_object<T: BusinessObject>(object: Box<dyn BusinessObject>) -> Result<T> {
    object.downcast::<T>()
        .map(|concrete| *concrete)
        .map_err(|object| FieldError::ObjectTypeMismatch {
            expected: std::any::type_name::<T>(),
            received: object.type_name(),
        })
}

/// A failure to assign or clear a single field. These are soft failures: the
/// populator logs them, leaves the field untouched, and moves on.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("`{type_name}` does not implement clearing array field `{field_name}`")]
    ClearNotImplemented {
        field_name: String,
        type_name: String,
    },

    #[error("Failed to decode a value as `{target}`: {message}")]
    Decode {
        message: String,
        target: &'static str,
    },

    #[error("Expected an object of type `{expected}` but received `{received}`")]
    ObjectTypeMismatch {
        expected: &'static str,
        received: &'static str,
    },

    #[error("`{type_name}` does not implement a setter for field `{field_name}`")]
    SetterNotImplemented {
        field_name: String,
        type_name: String,
    },

    #[error("Expected {expected} input but received {received}")]
    UnexpectedInput {
        expected: &'static str,
        received: &'static str,
    },

    #[error("`{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },
}
