/// Binds one mutation parameter to a field of a
/// [`MutableType`](crate::MutableType).
///
/// ```
/// use shapeql::mutation::ParameterSpec;
///
/// let spec = ParameterSpec::aliased("id", "passengerID");
/// assert_eq!(spec.rendered_name(), "id");
/// assert_eq!(spec.bound_field_name(), "passengerID");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterSpec {
    alias: bool,
    bound_field_name: String,
    literal: bool,
    numeric_bool: bool,
    param_name: String,
}
impl ParameterSpec {
    /// A parameter named after the field it is bound to.
    pub fn field(field_name: impl Into<String>) -> Self {
        let field_name = field_name.into();
        Self {
            alias: false,
            bound_field_name: field_name.to_owned(),
            literal: false,
            numeric_bool: false,
            param_name: field_name,
        }
    }

    /// A parameter whose name differs from the field it is bound to.
    pub fn aliased(
        param_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            alias: true,
            bound_field_name: field_name.into(),
            literal: false,
            numeric_bool: false,
            param_name: param_name.into(),
        }
    }

    /// Emit string values without surrounding quotes (enum values, variable
    /// references, pre-rendered input objects...).
    pub fn literal(mut self) -> Self {
        self.literal = true;
        self
    }

    /// Emit booleans as `1`/`0` instead of `true`/`false`.
    pub fn numeric_bool(mut self) -> Self {
        self.numeric_bool = true;
        self
    }

    pub fn bound_field_name(&self) -> &str {
        self.bound_field_name.as_str()
    }

    pub fn is_aliased(&self) -> bool {
        self.alias
    }

    pub fn is_literal(&self) -> bool {
        self.literal
    }

    pub fn is_numeric_bool(&self) -> bool {
        self.numeric_bool
    }

    pub fn param_name(&self) -> &str {
        self.param_name.as_str()
    }

    /// The name emitted in the parameter list: the alias when one was given,
    /// otherwise the bound field's name.
    pub fn rendered_name(&self) -> &str {
        if self.alias {
            self.param_name.as_str()
        } else {
            self.bound_field_name.as_str()
        }
    }
}
