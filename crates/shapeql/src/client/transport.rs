use crate::client::GraphQLClient;
use crate::client::graphql_client::ClientShared;
use std::sync::Arc;
use std::sync::Weak;
use thiserror::Error;
use url::Url;

/// The transport's own identifier for a submission.
pub type TransportId = u64;

/// Sends documents somewhere and reports back when a response arrives.
///
/// `submit()` must not block on the response. The transport later calls
/// [`CompletionHandle::complete()`], possibly from another thread and
/// possibly before `submit()` has returned.
pub trait Transport: Send + Sync {
    fn submit(&self, request: TransportRequest, completion: CompletionHandle) -> TransportId;
}

/// A document ready to send: the body is the UTF-8 document text itself.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub body: Vec<u8>,
    pub method: http::Method,
    pub url: Url,
}

/// What the transport observed for one submission.
#[derive(Clone, Debug, Default)]
pub struct TransportCompletion {
    pub body: Option<Vec<u8>>,
    pub error: Option<TransportError>,
    pub status_ok: bool,
}
impl TransportCompletion {
    /// A response with a success status.
    pub fn success(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            error: None,
            status_ok: true,
        }
    }

    /// A response with the given HTTP status.
    pub fn with_status(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            error: None,
            status_ok: status.is_success(),
        }
    }

    /// The request never produced a response.
    pub fn failure(error: TransportError) -> Self {
        Self {
            body: None,
            error: Some(error),
            status_ok: false,
        }
    }
}

/// A transport-level failure, shared as-is with every listener.
#[derive(Clone, Debug, Error)]
#[error(transparent)]
pub struct TransportError(Arc<dyn std::error::Error + Send + Sync>);
impl TransportError {
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(error))
    }

    /// Stands in for a response whose status was not a success and which
    /// carried no error of its own.
    pub fn status_not_ok() -> Self {
        Self::new(StatusNotOk)
    }

    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Whether both handles share the same underlying error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl std::convert::From<Arc<dyn std::error::Error + Send + Sync>> for TransportError {
    fn from(error: Arc<dyn std::error::Error + Send + Sync>) -> Self {
        Self(error)
    }
}

#[derive(Debug, Error)]
#[error("Transport reported a non-success status")]
struct StatusNotOk;

/// Delivers transport completions to the client that submitted them.
///
/// Holds the client weakly; completions arriving after every client handle
/// has been dropped are discarded.
#[derive(Clone)]
pub struct CompletionHandle {
    shared: Weak<ClientShared>,
}
impl CompletionHandle {
    pub(super) fn new(shared: &Arc<ClientShared>) -> Self {
        Self {
            shared: Arc::downgrade(shared),
        }
    }

    pub fn complete(&self, transport_id: TransportId, completion: TransportCompletion) {
        match self.shared.upgrade() {
            Some(shared) => GraphQLClient::from_shared(shared).on_complete(transport_id, completion),
            None => log::debug!(
                "Discarding completion for transport id {transport_id}: the client is gone.",
            ),
        }
    }
}
impl std::fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionHandle")
            .field("client_alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}
