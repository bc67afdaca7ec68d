use crate::FieldError;
use crate::FieldInput;
use crate::FieldValue;
use crate::mutation::MutationSpecs;
use std::any::Any;

/// Upcasting helpers that every `'static` type gets for free. They let a
/// `dyn BusinessObject` be turned back into its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}
impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// An application-defined type whose shape can be queried and whose
/// instances can be rehydrated from a JSON response.
///
/// Implementations describe themselves declaratively: [`field_values()`]
/// lists every field in declaration order along with its current value. The
/// [`Introspector`](crate::introspection::Introspector) classifies those
/// values on a zero-valued instance, so array fields must be seeded with a
/// single placeholder element by [`QueryableType::create_default()`] for
/// their element shape to be discovered.
///
/// [`field_values()`]: BusinessObject::field_values
pub trait BusinessObject: AsAny + Send + Sync {
    /// The fully qualified name of the type. Only the last path segment is
    /// used when naming the type in a document.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// A fresh, zero-valued instance of the same concrete type.
    fn new_default(&self) -> Box<dyn BusinessObject>;

    /// Every declared field paired with its current value, in declaration
    /// order. Excluded fields are listed too; they are filtered out when a
    /// shape is derived but stay available to the mutation encoder.
    fn field_values(&self) -> Vec<(&'static str, FieldValue<'_>)>;

    /// Names of fields that never appear in a generated document.
    fn excluded_fields(&self) -> &[&'static str] {
        &[]
    }

    /// Assign a decoded response value to the named field.
    ///
    /// Every concrete type is expected to override this. The default
    /// implementation reports [`FieldError::SetterNotImplemented`].
    fn set_field(&mut self, name: &str, value: FieldInput) -> Result<(), FieldError> {
        let _ = value;
        Err(FieldError::SetterNotImplemented {
            field_name: name.to_string(),
            type_name: self.type_name().to_string(),
        })
    }

    /// Empty the named array field.
    ///
    /// Every concrete type with array-of-object fields is expected to
    /// override this. The default implementation reports
    /// [`FieldError::ClearNotImplemented`].
    fn clear_array_field(&mut self, name: &str) -> Result<(), FieldError> {
        Err(FieldError::ClearNotImplemented {
            field_name: name.to_string(),
            type_name: self.type_name().to_string(),
        })
    }
}

impl dyn BusinessObject {
    pub fn is<T: BusinessObject>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: BusinessObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Recover the concrete type, handing the original box back on mismatch.
    pub fn downcast<T: BusinessObject>(
        self: Box<Self>,
    ) -> Result<Box<T>, Box<Self>> {
        if self.is::<T>() {
            match self.into_any().downcast::<T>() {
                Ok(concrete) => Ok(concrete),
                // `is::<T>()` was checked above, so the `Any` downcast agrees.
                Err(_) => unreachable!("type id changed during downcast"),
            }
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Debug for dyn BusinessObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct(self.type_name());
        for (name, value) in self.field_values() {
            debug_struct.field(name, &value);
        }
        debug_struct.finish()
    }
}

/// A [`BusinessObject`] that can be named as the target of a query.
pub trait QueryableType: BusinessObject + Sized {
    /// A zero-valued instance with every array-of-object field seeded with
    /// exactly one placeholder element.
    fn create_default() -> Self;
}

/// A [`QueryableType`] that also declares how its fields map onto mutation
/// parameters.
pub trait MutableType: QueryableType {
    fn mutation_specs(&self) -> MutationSpecs;
}
