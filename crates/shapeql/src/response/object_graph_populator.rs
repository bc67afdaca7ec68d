use crate::BusinessObject;
use crate::FieldError;
use crate::FieldInput;
use crate::introspection::FieldKind;
use crate::introspection::ObjectShape;
use crate::response::ParsingError;
use crate::response::parsing_error::json_kind_name;
use serde_json::Map;
use serde_json::Value;

/// Rehydrates business objects from decoded JSON, guided by an
/// [`ObjectShape`].
///
/// Each shaped field is filled from the key of the same name:
///
/// * nested objects are populated recursively into fresh instances;
/// * object arrays are cleared first, then refilled with one fresh instance
///   per element, so the introspection placeholder never survives;
/// * everything else is handed to
///   [`set_field()`](BusinessObject::set_field) as raw JSON.
///
/// A field that cannot be assigned is logged and left alone. It never stops
/// its siblings from being populated.
pub struct ObjectGraphPopulator;
impl ObjectGraphPopulator {
    pub fn populate_singular(
        object: &Map<String, Value>,
        shape: &ObjectShape,
    ) -> Box<dyn BusinessObject> {
        let mut instance = shape.instantiate();
        populate_fields(&mut *instance, object, shape);
        instance
    }

    /// Populate one instance per object element, in order. Elements that are
    /// not objects are skipped.
    pub fn populate_plural(
        items: &[Value],
        shape: &ObjectShape,
    ) -> Vec<Box<dyn BusinessObject>> {
        items.iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Value::Object(object) => Some(Self::populate_singular(object, shape)),
                other => {
                    log::warn!(
                        "Skipping element {index} while populating a list of `{}`: \
                        expected an object, found {}.",
                        shape.bare_type_name(),
                        json_kind_name(other),
                    );
                    None
                },
            })
            .collect()
    }

    pub fn populate_singular_as<T: BusinessObject>(
        object: &Map<String, Value>,
        shape: &ObjectShape,
    ) -> Result<T, ParsingError> {
        downcast_populated(Self::populate_singular(object, shape))
    }

    pub fn populate_plural_as<T: BusinessObject>(
        items: &[Value],
        shape: &ObjectShape,
    ) -> Result<Vec<T>, ParsingError> {
        Self::populate_plural(items, shape)
            .into_iter()
            .map(downcast_populated)
            .collect()
    }
}

fn downcast_populated<T: BusinessObject>(
    instance: Box<dyn BusinessObject>,
) -> Result<T, ParsingError> {
    instance.downcast::<T>()
        .map(|concrete| *concrete)
        .map_err(|instance| ParsingError::TargetTypeMismatch {
            expected: std::any::type_name::<T>(),
            found: instance.type_name(),
        })
}

fn populate_fields(
    instance: &mut dyn BusinessObject,
    object: &Map<String, Value>,
    shape: &ObjectShape,
) {
    for field in shape.fields() {
        let name = field.name();
        let value = object.get(name);

        match (field.kind(), field.nested_shape()) {
            (FieldKind::NestedObject, Some(nested_shape)) => match value {
                Some(Value::Object(nested_object)) => {
                    let nested =
                        ObjectGraphPopulator::populate_singular(nested_object, nested_shape);
                    assign(instance, name, FieldInput::Object(nested));
                },
                None | Some(Value::Null) => (),
                Some(other) => log::warn!(
                    "Not populating `{}.{name}`: expected an object, found {}.",
                    shape.bare_type_name(),
                    json_kind_name(other),
                ),
            },

            (FieldKind::ArrayOfObject, Some(element_shape)) => {
                if let Err(err) = instance.clear_array_field(name) {
                    report_field_error(shape.type_name(), &err);
                }

                match value {
                    Some(Value::Array(items)) if !items.is_empty() => {
                        let elements =
                            ObjectGraphPopulator::populate_plural(items, element_shape);
                        assign(instance, name, FieldInput::Objects(elements));
                    },
                    None | Some(Value::Null) | Some(Value::Array(_)) => (),
                    Some(other) => log::warn!(
                        "Not populating `{}.{name}`: expected an array, found {}.",
                        shape.bare_type_name(),
                        json_kind_name(other),
                    ),
                }
            },

            _ => {
                if let Some(raw) = value {
                    assign(instance, name, FieldInput::Json(raw.to_owned()));
                }
            },
        }
    }
}

fn assign(instance: &mut dyn BusinessObject, name: &str, input: FieldInput) {
    if let Err(err) = instance.set_field(name, input) {
        report_field_error(instance.type_name(), &err);
    }
}

fn report_field_error(type_name: &str, err: &FieldError) {
    match err {
        FieldError::ClearNotImplemented { .. }
        | FieldError::SetterNotImplemented { .. } => log::error!("{err}"),
        _ => log::warn!("Left a field of `{type_name}` unset: {err}"),
    }
}
