use crate::BusinessObject;
use crate::introspection::FieldDescriptor;
use std::any::TypeId;
use std::sync::Arc;

/// The ordered, queryable field layout of one business-object type, as
/// derived by the [`Introspector`](crate::introspection::Introspector).
///
/// A shape also keeps a zero-valued prototype of its type so that fresh
/// instances can be created while populating a response.
#[derive(Clone, Debug)]
pub struct ObjectShape {
    pub(super) fields: Vec<FieldDescriptor>,
    pub(super) prototype: Arc<dyn BusinessObject>,
    pub(super) type_id: TypeId,
    pub(super) type_name: &'static str,
}
impl ObjectShape {
    /// The type's bare identifier (module path and generic arguments
    /// stripped), as it appears in a query document.
    pub fn bare_type_name(&self) -> &'static str {
        bare_type_name(self.type_name)
    }

    /// Look up a (non-excluded) field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_slice()
    }

    /// A fresh, zero-valued instance of the shaped type.
    pub fn instantiate(&self) -> Box<dyn BusinessObject> {
        self.prototype.new_default()
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The fully qualified type name reported by
    /// [`BusinessObject::type_name()`].
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

pub(crate) fn bare_type_name(type_name: &str) -> &str {
    let without_generics =
        type_name.split('<')
            .next()
            .unwrap_or(type_name);

    without_generics.rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
