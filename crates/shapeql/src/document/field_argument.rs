/// Arguments attached to the first field named `field_name` that a document
/// serializes.
///
/// Matching is by bare field name at any nesting depth. Each
/// `FieldArgument` is used at most once; a second field with the same name
/// only receives arguments if another `FieldArgument` names it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldArgument {
    arguments: String,
    field_name: String,
}
impl FieldArgument {
    pub fn new(
        field_name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            arguments: arguments.into(),
            field_name: field_name.into(),
        }
    }

    /// The argument text emitted between the parentheses.
    pub fn arguments(&self) -> &str {
        self.arguments.as_str()
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }
}
