use crate::introspection::FieldKind;
use crate::introspection::ObjectShape;
use std::sync::Arc;

/// One field of an [`ObjectShape`], in declaration order.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub(super) kind: FieldKind,
    pub(super) name: String,
    pub(super) nested_shape: Option<Arc<ObjectShape>>,
}
impl FieldDescriptor {
    pub(super) fn scalar(name: &str) -> Self {
        Self {
            kind: FieldKind::Scalar,
            name: name.to_string(),
            nested_shape: None,
        }
    }

    pub(super) fn array_of_scalar(name: &str) -> Self {
        Self {
            kind: FieldKind::ArrayOfScalar,
            name: name.to_string(),
            nested_shape: None,
        }
    }

    pub(super) fn nested_object(name: &str, shape: ObjectShape) -> Self {
        Self {
            kind: FieldKind::NestedObject,
            name: name.to_string(),
            nested_shape: Some(Arc::new(shape)),
        }
    }

    pub(super) fn array_of_object(name: &str, element_shape: ObjectShape) -> Self {
        Self {
            kind: FieldKind::ArrayOfObject,
            name: name.to_string(),
            nested_shape: Some(Arc::new(element_shape)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The shape of the nested object (for [`FieldKind::NestedObject`]) or of
    /// each element (for [`FieldKind::ArrayOfObject`]).
    pub fn nested_shape(&self) -> Option<&ObjectShape> {
        self.nested_shape.as_deref()
    }
}
