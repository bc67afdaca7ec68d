use crate::BusinessObject;
use crate::FieldValue;
use crate::MutableType;
use crate::introspection::DEFAULT_MAX_DEPTH;
use crate::mutation::MutationSpecs;
use crate::mutation::ParameterSpec;

/// Renders the parenthesized parameter list of a mutation from an instance's
/// current field values.
///
/// Rendering rules, per bound field value:
///
/// * strings are double-quoted (with JSON-style escaping) unless the parameter is
///   [`literal`](ParameterSpec::literal);
/// * booleans are `true`/`false`, or `1`/`0` with
///   [`numeric_bool`](ParameterSpec::numeric_bool);
/// * integers and floats are rendered as *quoted* decimal strings;
/// * anything else gets a best-effort unquoted rendering.
///
/// A bad value never aborts the list: a missing bound field renders as
/// `null`.
pub struct ParameterEncoder;
impl ParameterEncoder {
    /// Encode using the [`MutationSpecs`] the instance declares for itself.
    pub fn encode_mutation<T: MutableType>(instance: &T, mutation_name: &str) -> String {
        Self::encode(instance, &instance.mutation_specs(), mutation_name)
    }

    /// The full parameter list, parentheses included. An unregistered
    /// mutation yields `()`.
    pub fn encode(
        instance: &dyn BusinessObject,
        specs: &MutationSpecs,
        mutation_name: &str,
    ) -> String {
        format!("({})", Self::encode_arguments(instance, specs, mutation_name))
    }

    /// The comma-separated `name:value` pairs without the surrounding
    /// parentheses.
    pub fn encode_arguments(
        instance: &dyn BusinessObject,
        specs: &MutationSpecs,
        mutation_name: &str,
    ) -> String {
        let Some(parameters) = specs.get(mutation_name) else {
            log::debug!(
                "No parameters registered for mutation `{mutation_name}` on `{}`.",
                instance.type_name(),
            );
            return String::new();
        };

        let field_values = instance.field_values();
        let rendered_params: Vec<String> =
            parameters.iter()
                .map(|spec| {
                    let bound_value =
                        field_values.iter()
                            .find(|(name, _)| *name == spec.bound_field_name())
                            .map(|(_, value)| value);

                    let rendered_value = match bound_value {
                        Some(value) => render_value(value, RenderFlags::from(spec), 0),
                        None => {
                            log::warn!(
                                "Mutation `{mutation_name}` binds parameter `{}` to \
                                field `{}`, which `{}` does not declare.",
                                spec.rendered_name(),
                                spec.bound_field_name(),
                                instance.type_name(),
                            );
                            "null".to_string()
                        },
                    };

                    format!("{}:{rendered_value}", spec.rendered_name())
                })
                .collect();

        rendered_params.join(", ")
    }
}

#[derive(Clone, Copy)]
struct RenderFlags {
    literal: bool,
    numeric_bool: bool,
}
impl std::convert::From<&ParameterSpec> for RenderFlags {
    fn from(spec: &ParameterSpec) -> Self {
        Self {
            literal: spec.is_literal(),
            numeric_bool: spec.is_numeric_bool(),
        }
    }
}

fn render_value(value: &FieldValue<'_>, flags: RenderFlags, depth: usize) -> String {
    match value {
        FieldValue::String(value) if flags.literal => value.to_string(),
        FieldValue::String(value) => quote_string(value),

        FieldValue::Bool(value) if flags.numeric_bool => {
            (if *value { "1" } else { "0" }).to_string()
        },
        FieldValue::Bool(value) => value.to_string(),

        FieldValue::Int(value) => format!("\"{value}\""),
        FieldValue::UInt(value) => format!("\"{value}\""),
        FieldValue::Float(value) => format!("\"{value}\""),

        FieldValue::Null => "null".to_string(),
        FieldValue::Json(value) => value.to_string(),
        FieldValue::Other(rendered) => rendered.to_owned(),

        FieldValue::List(elements) => {
            let rendered: Vec<String> =
                elements.iter()
                    .map(|element| render_value(element, flags, depth))
                    .collect();
            format!("[{}]", rendered.join(", "))
        },

        FieldValue::Object(object) => render_object(*object, flags, depth + 1),
    }
}

/// Render a nested object as an input-object literal: `{name:value, ...}`.
fn render_object(object: &dyn BusinessObject, flags: RenderFlags, depth: usize) -> String {
    if depth > DEFAULT_MAX_DEPTH {
        log::warn!(
            "Stopped rendering `{}` as a mutation parameter at depth {depth}.",
            object.type_name(),
        );
        return "null".to_string();
    }

    // Member strings are always quoted; `literal` only applies to the
    // parameter's own value.
    let member_flags = RenderFlags {
        literal: false,
        numeric_bool: flags.numeric_bool,
    };
    let excluded_fields = object.excluded_fields();
    let rendered_members: Vec<String> =
        object.field_values()
            .iter()
            .filter(|(name, _)| !excluded_fields.contains(name))
            .map(|(name, value)| {
                format!("{name}:{}", render_value(value, member_flags, depth))
            })
            .collect();

    format!("{{{}}}", rendered_members.join(", "))
}

fn quote_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
