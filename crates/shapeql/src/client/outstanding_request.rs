use crate::OperationKind;
use crate::client::RequestId;
use crate::client::TransportId;
use crate::introspection::ObjectShape;

/// Where a request is in its lifecycle. Requests are removed from the
/// client once their listeners have been notified.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RequestState {
    /// Recorded, but the transport has not yet returned its id.
    Building,
    /// The transport id is known; waiting for its completion.
    Transmitted,
    /// The completion arrived and is being turned into a result.
    Completed,
    /// Listeners are being notified.
    Dispatched,
}

#[derive(Clone, Debug)]
pub(super) struct OutstandingRequest {
    pub(super) custom_tag: Option<String>,
    pub(super) operation_kind: OperationKind,
    pub(super) request_id: RequestId,
    pub(super) request_tag: String,
    pub(super) return_shape: Option<ObjectShape>,
    pub(super) state: RequestState,
    pub(super) target_shape: ObjectShape,
    pub(super) transport_id: Option<TransportId>,
}
impl OutstandingRequest {
    /// The shape a successful response is populated with. A mutation without
    /// a return type has none.
    pub(super) fn population_shape(&self) -> Option<&ObjectShape> {
        match self.operation_kind {
            OperationKind::Query => Some(&self.target_shape),
            OperationKind::Mutation => self.return_shape.as_ref(),
        }
    }
}
