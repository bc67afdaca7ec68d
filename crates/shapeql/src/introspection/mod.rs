//! Derives the queryable shape of a [`BusinessObject`](crate::BusinessObject)
//! from a zero-valued instance.

mod field_descriptor;
mod field_kind;
mod introspection_error;
mod introspector;
mod object_shape;

pub use field_descriptor::FieldDescriptor;
pub use field_kind::FieldKind;
pub use introspection_error::IntrospectionError;
pub use introspector::Introspector;
pub use introspector::DEFAULT_MAX_DEPTH;
pub use object_shape::ObjectShape;

#[cfg(test)]
mod tests;
