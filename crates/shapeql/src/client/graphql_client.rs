use crate::MutableType;
use crate::QueryableType;
use crate::client::ClientConfig;
use crate::client::CompletionHandle;
use crate::client::ListenerId;
use crate::client::MutationRequest;
use crate::client::QueryRequest;
use crate::client::RequestError;
use crate::client::RequestId;
use crate::client::RequestResult;
use crate::client::RequestState;
use crate::client::ResponseData;
use crate::client::ResultListener;
use crate::client::TransmitError;
use crate::client::Transport;
use crate::client::TransportCompletion;
use crate::client::TransportError;
use crate::client::TransportId;
use crate::client::TransportRequest;
use crate::client::listener::ListenerRegistry;
use crate::client::outstanding_request::OutstandingRequest;
use crate::document::DocumentBuilder;
use crate::introspection::ObjectShape;
use crate::mutation::ParameterEncoder;
use crate::response::ObjectGraphPopulator;
use crate::response::ResponseClassification;
use crate::response::ResponseClassifier;
use crate::response::ResponseEnvelope;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;
use url::Url;

type Result<T> = std::result::Result<T, TransmitError>;

/// Sends query and mutation documents through a [`Transport`] and delivers
/// populated results to registered [`ResultListener`]s.
///
/// Clones share the same outstanding requests and listeners.
#[derive(Clone)]
pub struct GraphQLClient {
    shared: Arc<ClientShared>,
}

pub(super) struct ClientShared {
    config: ClientConfig,
    state: Mutex<ClientState>,
    transport: Arc<dyn Transport>,
}

#[derive(Default)]
struct ClientState {
    /// Completions for transport ids not yet recorded, parked while a submit
    /// is in flight.
    early_completions: Vec<(TransportId, TransportCompletion)>,
    listeners: ListenerRegistry,
    next_request_id: RequestId,
    outstanding: IndexMap<RequestId, OutstandingRequest>,
    submits_in_flight: usize,
}

impl GraphQLClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            shared: Arc::new(ClientShared {
                config,
                state: Mutex::new(ClientState {
                    next_request_id: 1,
                    ..ClientState::default()
                }),
                transport,
            }),
        }
    }

    pub(super) fn from_shared(shared: Arc<ClientShared>) -> Self {
        Self { shared }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.shared.config
    }

    /// Build a query selecting every field of `T` and hand it to the
    /// transport.
    ///
    /// Returns before any response arrives. An invalid URL or a type that
    /// cannot be introspected is reported here and never reaches the
    /// transport.
    pub fn transmit_query<T: QueryableType>(&self, request: QueryRequest) -> Result<RequestId> {
        let url = self.shared.config.parse_url(request.url())?;
        let introspector = self.shared.config.introspector();
        let target_shape = introspector.shape_of::<T>().map_err(|source| {
            TransmitError::Introspection {
                source,
                type_name: std::any::type_name::<T>(),
            }
        })?;

        let mut builder = DocumentBuilder::query(&target_shape);
        if let Some(operation_name) = request.operation_name() {
            builder = builder.set_operation_name(operation_name);
        }
        if let Some(parameters) = request.parameters() {
            builder = builder.set_parameters(parameters);
        }
        for field_argument in request.field_arguments() {
            builder = builder.add_field_argument(field_argument.to_owned());
        }
        let document = builder.build()?;

        Ok(self.submit(url, document, OutstandingRequest {
            custom_tag: request.custom_tag().map(str::to_string),
            operation_kind: request.operation_kind(),
            request_id: 0,
            request_tag: request.request_tag().to_string(),
            return_shape: None,
            state: RequestState::Building,
            target_shape,
            transport_id: None,
        }))
    }

    /// Build a mutation whose parameters are taken from `instance`'s current
    /// field values and hand it to the transport.
    pub fn transmit_mutation<T: MutableType>(
        &self,
        instance: &T,
        request: MutationRequest,
    ) -> Result<RequestId> {
        let url = self.shared.config.parse_url(request.url())?;
        let introspector = self.shared.config.introspector();
        let target_shape = introspector.shape_of::<T>().map_err(|source| {
            TransmitError::Introspection {
                source,
                type_name: std::any::type_name::<T>(),
            }
        })?;
        let return_shape = match request.return_type() {
            Some(return_type) => Some(return_type.shape(&introspector).map_err(|source| {
                TransmitError::Introspection {
                    source,
                    type_name: return_type.type_name(),
                }
            })?),
            None => None,
        };

        let parameters = ParameterEncoder::encode_arguments(
            instance,
            &instance.mutation_specs(),
            request.mutation_name(),
        );
        let mut builder =
            DocumentBuilder::mutation(request.mutation_name())
                .set_parameters(parameters);
        if let Some(return_shape) = &return_shape {
            builder = builder.set_return_shape(return_shape);
        }
        for field_argument in request.field_arguments() {
            builder = builder.add_field_argument(field_argument.to_owned());
        }
        let document = builder.build()?;

        Ok(self.submit(url, document, OutstandingRequest {
            custom_tag: request.custom_tag().map(str::to_string),
            operation_kind: request.operation_kind(),
            request_id: 0,
            request_tag: request.request_tag().to_string(),
            return_shape,
            state: RequestState::Building,
            target_shape,
            transport_id: None,
        }))
    }

    /// Register a listener for every result dispatched from now on,
    /// including results of requests transmitted before registering.
    pub fn register_listener(&self, listener: impl ResultListener + 'static) -> ListenerId {
        self.register_shared_listener(Arc::new(listener))
    }

    pub fn register_shared_listener(&self, listener: Arc<dyn ResultListener>) -> ListenerId {
        let id = self.shared.state.lock().listeners.register(listener);
        log::debug!("Registered result listener {id:?}.");
        id
    }

    /// Returns `false` if no listener with that id is registered.
    pub fn unregister_listener(&self, id: ListenerId) -> bool {
        let removed = self.shared.state.lock().listeners.unregister(id);
        if removed {
            log::debug!("Unregistered result listener {id:?}.");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.shared.state.lock().listeners.len()
    }

    /// Requests transmitted whose listeners have not been notified yet.
    /// Requests whose transport never completes stay counted.
    pub fn outstanding_request_count(&self) -> usize {
        self.shared.state.lock().outstanding.len()
    }

    /// `None` once the request's listeners have been notified.
    pub fn request_state(&self, request_id: RequestId) -> Option<RequestState> {
        self.shared.state
            .lock()
            .outstanding
            .get(&request_id)
            .map(|request| request.state)
    }

    /// A handle the transport can complete submissions through.
    pub fn completion_handle(&self) -> CompletionHandle {
        CompletionHandle::new(&self.shared)
    }

    /// Resolve a transport completion to its request, turn it into a
    /// [`RequestResult`] and notify every registered listener.
    ///
    /// Completions for unknown transport ids are dropped.
    pub fn on_complete(&self, transport_id: TransportId, completion: TransportCompletion) {
        let claimed = {
            let mut guard = self.shared.state.lock();
            let state = &mut *guard;
            let matching =
                state.outstanding
                    .values_mut()
                    .find(|request| {
                        request.state == RequestState::Transmitted
                            && request.transport_id == Some(transport_id)
                    });

            match matching {
                Some(request) => {
                    request.state = RequestState::Completed;
                    Some(request.to_owned())
                },
                None if state.submits_in_flight > 0 => {
                    log::debug!(
                        "Parking completion for transport id {transport_id} until \
                        in-flight submits return.",
                    );
                    state.early_completions.push((transport_id, completion));
                    return;
                },
                None => None,
            }
        };

        let Some(request) = claimed else {
            log::debug!("Dropping completion for unknown transport id {transport_id}.");
            return;
        };

        let outcome = resolve_outcome(&request, completion);
        let result = RequestResult {
            custom_tag: request.custom_tag,
            operation_kind: request.operation_kind,
            outcome,
            request_id: request.request_id,
            request_tag: request.request_tag,
        };

        let listeners = {
            let mut state = self.shared.state.lock();
            if let Some(request) = state.outstanding.get_mut(&result.request_id) {
                request.state = RequestState::Dispatched;
            }
            state.listeners.snapshot()
        };

        log::debug!(
            "Dispatching result of request {} ({}) to {} listener(s).",
            result.request_id,
            if result.outcome.is_ok() { "success" } else { "failure" },
            listeners.len(),
        );
        for listener in &listeners {
            listener.on_result(&result);
        }

        self.shared.state.lock().outstanding.shift_remove(&result.request_id);
        log::debug!("Removed request {}.", result.request_id);
    }

    fn submit(&self, url: Url, document: String, mut request: OutstandingRequest) -> RequestId {
        let request_id = {
            let mut state = self.shared.state.lock();
            let request_id = state.next_request_id;
            state.next_request_id += 1;
            request.request_id = request_id;
            state.outstanding.insert(request_id, request);
            state.submits_in_flight += 1;
            request_id
        };

        log::debug!("Transmitting request {request_id} to {url}.");
        log::trace!("Document for request {request_id}: {document}");

        let transport_id = self.shared.transport.submit(
            TransportRequest {
                body: document.into_bytes(),
                method: http::Method::POST,
                url,
            },
            self.completion_handle(),
        );

        let replay = {
            let mut state = self.shared.state.lock();
            state.submits_in_flight -= 1;

            let duplicate =
                state.outstanding
                    .values()
                    .any(|other| other.transport_id == Some(transport_id));
            if duplicate {
                log::warn!(
                    "Transport id {transport_id} is already assigned to another request; \
                    its completion will resolve the older request first.",
                );
            }
            if let Some(request) = state.outstanding.get_mut(&request_id) {
                request.transport_id = Some(transport_id);
                request.state = RequestState::Transmitted;
            }

            let (replay, still_parked): (Vec<_>, Vec<_>) =
                std::mem::take(&mut state.early_completions)
                    .into_iter()
                    .partition(|(parked_id, _)| *parked_id == transport_id);
            if state.submits_in_flight == 0 {
                for (parked_id, _) in &still_parked {
                    log::debug!("Dropping completion for unknown transport id {parked_id}.");
                }
            } else {
                state.early_completions = still_parked;
            }
            replay
        };

        log::debug!("Request {request_id} is transport id {transport_id}.");
        for (parked_id, completion) in replay {
            self.on_complete(parked_id, completion);
        }

        request_id
    }
}

impl std::fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("GraphQLClient")
            .field("config", &self.shared.config)
            .field("listeners", &state.listeners.len())
            .field("outstanding_requests", &state.outstanding.len())
            .finish()
    }
}

fn resolve_outcome(
    request: &OutstandingRequest,
    completion: TransportCompletion,
) -> std::result::Result<ResponseData, RequestError> {
    if let Some(error) = completion.error {
        return Err(RequestError::Transport(error));
    }
    if !completion.status_ok {
        return Err(RequestError::Transport(TransportError::status_not_ok()));
    }

    let body = completion.body.unwrap_or_default();
    let data = match ResponseEnvelope::from_slice(&body)? {
        ResponseEnvelope::Data(data) => data,
        ResponseEnvelope::Error(error) => return Err(RequestError::Server(error)),
    };

    let Some(shape) = request.population_shape() else {
        return Ok(ResponseData::Raw(serde_json::Value::Object(data)));
    };
    populate(&data, shape)
}

fn populate(
    data: &serde_json::Map<String, serde_json::Value>,
    shape: &ObjectShape,
) -> std::result::Result<ResponseData, RequestError> {
    Ok(match ResponseClassifier::classify(data)? {
        ResponseClassification::Singular { object, .. } => ResponseData::Object(
            Arc::from(ObjectGraphPopulator::populate_singular(object, shape)),
        ),
        ResponseClassification::Plural { items, .. } => ResponseData::List(
            ObjectGraphPopulator::populate_plural(items, shape)
                .into_iter()
                .map(Arc::from)
                .collect(),
        ),
    })
}
