use crate::BusinessObject;
use crate::OperationKind;
use crate::client::TransportError;
use crate::response::ParsingError;
use std::sync::Arc;
use thiserror::Error;

/// Identifies a logical request for the lifetime of its client. Ids are
/// allocated in increasing order and never reused.
pub type RequestId = u64;

/// A successful result.
#[derive(Clone, Debug)]
pub enum ResponseData {
    /// One populated instance per element of a plural response, in order.
    List(Vec<Arc<dyn BusinessObject>>),

    /// The populated instance of a singular response.
    Object(Arc<dyn BusinessObject>),

    /// The `data` object of a mutation sent without a return type.
    Raw(serde_json::Value),
}
impl ResponseData {
    /// The populated instance, if it is a `T`.
    pub fn as_object<T: BusinessObject>(&self) -> Option<&T> {
        match self {
            Self::Object(object) => object.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The populated instances, if this is a list whose elements are all
    /// `T`s.
    pub fn as_list<T: BusinessObject>(&self) -> Option<Vec<&T>> {
        match self {
            Self::List(objects) => {
                objects.iter()
                    .map(|object| object.downcast_ref::<T>())
                    .collect()
            },
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Error)]
pub enum RequestError {
    #[error("Failed to parse the response: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Server reported an error: {0}")]
    Server(serde_json::Value),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),
}

/// What listeners receive once a request completes.
#[derive(Clone, Debug)]
pub struct RequestResult {
    pub(super) custom_tag: Option<String>,
    pub(super) operation_kind: OperationKind,
    pub(super) outcome: Result<ResponseData, RequestError>,
    pub(super) request_id: RequestId,
    pub(super) request_tag: String,
}
impl RequestResult {
    pub fn custom_tag(&self) -> Option<&str> {
        self.custom_tag.as_deref()
    }

    /// The populated result, absent when the request failed.
    pub fn data(&self) -> Option<&ResponseData> {
        self.outcome.as_ref().ok()
    }

    /// The failure, absent when the request succeeded.
    pub fn error(&self) -> Option<&RequestError> {
        self.outcome.as_ref().err()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn outcome(&self) -> &Result<ResponseData, RequestError> {
        &self.outcome
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn request_tag(&self) -> &str {
        self.request_tag.as_str()
    }
}
