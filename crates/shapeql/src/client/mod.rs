//! Transmits documents through a [`Transport`], correlates completions with
//! the requests that produced them, and fans results out to listeners.

mod client_config;
mod client_error;
mod graphql_client;
mod listener;
mod outstanding_request;
mod request;
mod request_result;
mod transport;

pub use client_config::ClientConfig;
pub use client_error::TransmitError;
pub use graphql_client::GraphQLClient;
pub use listener::ListenerId;
pub use listener::ResultListener;
pub use outstanding_request::RequestState;
pub use request::MutationRequest;
pub use request::QueryRequest;
pub use request_result::RequestError;
pub use request_result::RequestId;
pub use request_result::RequestResult;
pub use request_result::ResponseData;
pub use transport::CompletionHandle;
pub use transport::Transport;
pub use transport::TransportCompletion;
pub use transport::TransportError;
pub use transport::TransportId;
pub use transport::TransportRequest;

#[cfg(test)]
mod tests;
