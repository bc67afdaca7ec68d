use crate::OperationKind;
use crate::document::DocumentBuildError;
use crate::document::FieldArgument;
use crate::introspection::ObjectShape;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Builds the text of a single query or mutation document.
///
/// A query names its target type and selects every field of the target's
/// shape:
///
/// ```text
/// query FlightQuery { Flight(id: "1272") { flightID
/// route { origin
/// }
/// } }
/// ```
///
/// A mutation names the mutation, carries its encoded parameter list, and
/// selects the fields of the return shape when one is given:
///
/// ```text
/// mutation { updatePassenger(id:"p1") { passengerID
/// } }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder<'shape> {
    field_arguments: Vec<FieldArgument>,
    mutation_name: Option<String>,
    operation_kind: Option<OperationKind>,
    operation_name: Option<String>,
    parameters: Option<String>,
    shape: Option<&'shape ObjectShape>,
}
impl<'shape> DocumentBuilder<'shape> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A query selecting every field of `target_shape`.
    pub fn query(target_shape: &'shape ObjectShape) -> Self {
        Self::new()
            .set_operation_kind(OperationKind::Query)
            .set_target_shape(target_shape)
    }

    /// A mutation named `mutation_name`.
    pub fn mutation(mutation_name: impl Into<String>) -> Self {
        Self::new()
            .set_operation_kind(OperationKind::Mutation)
            .set_mutation_name(mutation_name)
    }

    /// Attach arguments to the first not-yet-argumented field of that name.
    /// Entries are matched in the order they were added.
    pub fn add_field_argument(mut self, field_argument: FieldArgument) -> Self {
        self.field_arguments.push(field_argument);
        self
    }

    pub fn set_mutation_name(mut self, mutation_name: impl Into<String>) -> Self {
        self.mutation_name = Some(mutation_name.into());
        self
    }

    pub fn set_operation_kind(mut self, operation_kind: OperationKind) -> Self {
        self.operation_kind = Some(operation_kind);
        self
    }

    pub fn set_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Parameter text placed in parentheses after the query's type name or
    /// after the mutation name. Pass it without the parentheses.
    pub fn set_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    /// The shape selected by a mutation. Mutations without one select
    /// nothing.
    pub fn set_return_shape(self, return_shape: &'shape ObjectShape) -> Self {
        self.set_target_shape(return_shape)
    }

    /// The shape selected by a query.
    pub fn set_target_shape(mut self, target_shape: &'shape ObjectShape) -> Self {
        self.shape = Some(target_shape);
        self
    }

    /// Consume this [`DocumentBuilder`] to produce the document text.
    pub fn build(self) -> Result<String> {
        let mut pending_arguments = self.field_arguments;
        let mut document = String::new();

        match self.operation_kind {
            Some(OperationKind::Query) => {
                let shape = self.shape.ok_or(DocumentBuildError::MissingTargetShape)?;

                write_operation_header(&mut document, "query", self.operation_name.as_deref());
                document.push_str(shape.bare_type_name());
                if let Some(parameters) = &self.parameters {
                    document.push('(');
                    document.push_str(parameters);
                    document.push(')');
                }
                document.push(' ');
                write_selection_tree(&mut document, shape, &mut pending_arguments);
                document.push_str(" }");
            },

            Some(OperationKind::Mutation) => {
                let mutation_name =
                    self.mutation_name.ok_or(DocumentBuildError::MissingMutationName)?;

                write_operation_header(&mut document, "mutation", self.operation_name.as_deref());
                document.push_str(mutation_name.as_str());
                document.push('(');
                document.push_str(self.parameters.as_deref().unwrap_or_default());
                document.push(')');
                if let Some(return_shape) = self.shape {
                    document.push(' ');
                    write_selection_tree(&mut document, return_shape, &mut pending_arguments);
                }
                document.push_str(" }");
            },

            None => return Err(DocumentBuildError::AmbiguousOperationKind),
        }

        for unused in &pending_arguments {
            log::debug!(
                "No field named `{}` in the document; its arguments were not emitted.",
                unused.field_name(),
            );
        }
        log::trace!("Built document: {document}");

        Ok(document)
    }
}

fn write_operation_header(document: &mut String, keyword: &str, name: Option<&str>) {
    document.push_str(keyword);
    document.push(' ');
    if let Some(name) = name {
        document.push_str(name);
        document.push(' ');
    }
    document.push_str("{ ");
}

/// `{ ` then one line per field (nested fields followed by their own tree)
/// then `}`.
fn write_selection_tree(
    document: &mut String,
    shape: &ObjectShape,
    pending_arguments: &mut Vec<FieldArgument>,
) {
    document.push_str("{ ");
    for field in shape.fields() {
        document.push_str(field.name());

        let matched =
            pending_arguments.iter()
                .position(|argument| argument.field_name() == field.name());
        if let Some(index) = matched {
            let argument = pending_arguments.remove(index);
            document.push('(');
            document.push_str(argument.arguments());
            document.push(')');
        }

        if let Some(nested_shape) = field.nested_shape() {
            document.push(' ');
            write_selection_tree(document, nested_shape, pending_arguments);
        }
        document.push('\n');
    }
    document.push('}');
}
