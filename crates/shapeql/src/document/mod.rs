//! Serializes [`ObjectShape`](crate::introspection::ObjectShape)s into query
//! and mutation document text.

mod document_build_error;
mod document_builder;
mod field_argument;

pub use document_build_error::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use field_argument::FieldArgument;
