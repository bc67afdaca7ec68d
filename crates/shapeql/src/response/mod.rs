//! Turns a decoded response body into populated business objects.

mod object_graph_populator;
mod parsing_error;
mod response_classifier;
mod response_envelope;

pub use object_graph_populator::ObjectGraphPopulator;
pub use parsing_error::ParsingError;
pub use response_classifier::ResponseClassification;
pub use response_classifier::ResponseClassifier;
pub use response_envelope::ResponseEnvelope;

#[cfg(test)]
mod tests;
