use crate::BusinessObject;
use crate::FieldValue;
use crate::QueryableType;
use crate::introspection::FieldDescriptor;
use crate::introspection::IntrospectionError;
use crate::introspection::ObjectShape;
use std::any::TypeId;
use std::sync::Arc;

type Result<T> = std::result::Result<T, IntrospectionError>;

/// Nesting depth allowed by [`Introspector::default()`].
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Derives [`ObjectShape`]s from zero-valued business-object instances.
///
/// Each nested object or array-of-object field is classified by recursing
/// into a fresh zero-valued instance of its type. The recursion tracks the
/// chain of types it is currently inside of and reports
/// [`IntrospectionError::TypeCycleDetected`] as soon as a type re-enters its
/// own chain. Nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct Introspector {
    max_depth: usize,
}
impl Default for Introspector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
impl Introspector {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Derive the shape of `T` from `T::create_default()`.
    pub fn shape_of<T: QueryableType>(&self) -> Result<ObjectShape> {
        let instance = T::create_default();
        self.shape_of_instance(&instance)
    }

    /// Derive a shape from an instance, which is expected to be zero-valued
    /// (with array placeholders seeded).
    pub fn shape_of_instance(&self, instance: &dyn BusinessObject) -> Result<ObjectShape> {
        let mut type_path = vec![];
        let shape = self.introspect(instance, &mut type_path)?;
        log::trace!(
            "Introspected `{}` ({} top-level fields).",
            shape.type_name(),
            shape.fields().len(),
        );
        Ok(shape)
    }

    fn introspect(
        &self,
        instance: &dyn BusinessObject,
        type_path: &mut Vec<(TypeId, &'static str)>,
    ) -> Result<ObjectShape> {
        let type_id = instance.as_any().type_id();
        let type_name = instance.type_name();

        if type_path.iter().any(|(ancestor_id, _)| *ancestor_id == type_id) {
            let mut cycle_path: Vec<String> =
                type_path.iter()
                    .map(|(_, name)| name.to_string())
                    .collect();
            cycle_path.push(type_name.to_string());
            return Err(IntrospectionError::TypeCycleDetected { cycle_path });
        }

        if type_path.len() >= self.max_depth {
            return Err(IntrospectionError::MaxDepthExceeded {
                max_depth: self.max_depth,
                type_name: type_name.to_string(),
            });
        }

        type_path.push((type_id, type_name));

        let excluded_fields = instance.excluded_fields();
        let mut fields = vec![];
        for (name, value) in instance.field_values() {
            if excluded_fields.contains(&name) {
                continue;
            }

            let descriptor = match value {
                FieldValue::Object(nested) => {
                    let zero_valued = nested.new_default();
                    let nested_shape = self.introspect(&*zero_valued, type_path)?;
                    FieldDescriptor::nested_object(name, nested_shape)
                },

                FieldValue::List(elements) => match elements.first() {
                    Some(FieldValue::Object(placeholder)) => {
                        let zero_valued = placeholder.new_default();
                        let element_shape = self.introspect(&*zero_valued, type_path)?;
                        FieldDescriptor::array_of_object(name, element_shape)
                    },
                    Some(_) => FieldDescriptor::array_of_scalar(name),
                    // No placeholder to infer an element shape from.
                    None => FieldDescriptor::scalar(name),
                },

                _ => FieldDescriptor::scalar(name),
            };
            fields.push(descriptor);
        }

        type_path.pop();

        Ok(ObjectShape {
            fields,
            prototype: Arc::from(instance.new_default()),
            type_id,
            type_name,
        })
    }
}
