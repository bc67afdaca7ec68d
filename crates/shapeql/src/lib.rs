//! Build GraphQL query and mutation documents from statically declared Rust
//! "business object" shapes, send them through a pluggable transport, and
//! rehydrate nested object graphs from the JSON that comes back.
//!
//! No server schema is involved. Each business object describes itself
//! through [`BusinessObject::field_values()`], either by hand or via
//! `#[derive(BusinessObject)]`, and the [`Introspector`](introspection::Introspector)
//! turns a zero-valued instance into an
//! [`ObjectShape`](introspection::ObjectShape) that drives both document
//! generation and response population.

mod business_object;
pub mod client;
pub mod document;
mod field_input;
mod field_value;
pub mod introspection;
pub mod mutation;
mod operation_kind;
pub mod response;

pub use business_object::AsAny;
pub use business_object::BusinessObject;
pub use business_object::MutableType;
pub use business_object::QueryableType;
pub use field_input::FieldError;
pub use field_input::FieldInput;
pub use field_value::FieldValue;
pub use field_value::ToFieldValue;
pub use operation_kind::OperationKind;

#[cfg(feature = "macros")]
pub use shapeql_macros::BusinessObject;

#[cfg(test)]
mod test;
