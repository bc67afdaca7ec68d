use crate::OperationKind;
use crate::QueryableType;
use crate::document::FieldArgument;
use crate::introspection::IntrospectionError;
use crate::introspection::Introspector;
use crate::introspection::ObjectShape;
use inherent::inherent;

/// Accessors shared by [`QueryRequest`] and [`MutationRequest`].
pub(super) trait OperationRequest {
    fn custom_tag(&self) -> Option<&str>;
    fn field_arguments(&self) -> &[FieldArgument];
    fn operation_kind(&self) -> OperationKind;
    fn request_tag(&self) -> &str;
    fn url(&self) -> &str;
}

/// Everything needed to transmit a query besides its target type.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRequest {
    custom_tag: Option<String>,
    field_arguments: Vec<FieldArgument>,
    operation_name: Option<String>,
    parameters: Option<String>,
    request_tag: String,
    url: String,
}
impl QueryRequest {
    pub fn new(url: impl Into<String>, request_tag: impl Into<String>) -> Self {
        Self {
            custom_tag: None,
            field_arguments: vec![],
            operation_name: None,
            parameters: None,
            request_tag: request_tag.into(),
            url: url.into(),
        }
    }

    /// Add a [`FieldArgument`] after any previously added ones.
    pub fn add_field_argument(mut self, field_argument: FieldArgument) -> Self {
        self.field_arguments.push(field_argument);
        self
    }

    /// An opaque tag echoed back in the [`RequestResult`](crate::client::RequestResult).
    pub fn set_custom_tag(mut self, custom_tag: impl Into<String>) -> Self {
        self.custom_tag = Some(custom_tag.into());
        self
    }

    pub fn set_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Parameters applied to the target type, without parentheses.
    pub fn set_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }
}

#[inherent]
impl OperationRequest for QueryRequest {
    pub fn custom_tag(&self) -> Option<&str> {
        self.custom_tag.as_deref()
    }

    pub fn field_arguments(&self) -> &[FieldArgument] {
        self.field_arguments.as_slice()
    }

    pub fn operation_kind(&self) -> OperationKind {
        OperationKind::Query
    }

    pub fn request_tag(&self) -> &str {
        self.request_tag.as_str()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

/// The type a mutation's result is populated as.
#[derive(Clone, Copy)]
pub(super) struct ReturnType {
    resolve_shape: fn(&Introspector) -> Result<ObjectShape, IntrospectionError>,
    type_name: &'static str,
}
impl ReturnType {
    fn of<R: QueryableType>() -> Self {
        Self {
            resolve_shape: resolve_shape::<R>,
            type_name: std::any::type_name::<R>(),
        }
    }

    pub(super) fn shape(
        &self,
        introspector: &Introspector,
    ) -> Result<ObjectShape, IntrospectionError> {
        (self.resolve_shape)(introspector)
    }

    pub(super) fn type_name(&self) -> &'static str {
        self.type_name
    }
}
impl std::fmt::Debug for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ReturnType").field(&self.type_name).finish()
    }
}
impl std::cmp::PartialEq for ReturnType {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

fn resolve_shape<R: QueryableType>(
    introspector: &Introspector,
) -> Result<ObjectShape, IntrospectionError> {
    introspector.shape_of::<R>()
}

/// Everything needed to transmit a mutation besides the mutated instance.
///
/// The request tag of a mutation is its name.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationRequest {
    custom_tag: Option<String>,
    field_arguments: Vec<FieldArgument>,
    mutation_name: String,
    return_type: Option<ReturnType>,
    url: String,
}
impl MutationRequest {
    pub fn new(url: impl Into<String>, mutation_name: impl Into<String>) -> Self {
        Self {
            custom_tag: None,
            field_arguments: vec![],
            mutation_name: mutation_name.into(),
            return_type: None,
            url: url.into(),
        }
    }

    /// Add a [`FieldArgument`] (applied to the return type's fields) after
    /// any previously added ones.
    pub fn add_field_argument(mut self, field_argument: FieldArgument) -> Self {
        self.field_arguments.push(field_argument);
        self
    }

    pub fn set_custom_tag(mut self, custom_tag: impl Into<String>) -> Self {
        self.custom_tag = Some(custom_tag.into());
        self
    }

    /// Select the fields of `R` in the mutation and populate the result as
    /// `R`. Without a return type the raw `data` object is dispatched.
    pub fn set_return_type<R: QueryableType>(mut self) -> Self {
        self.return_type = Some(ReturnType::of::<R>());
        self
    }

    pub fn mutation_name(&self) -> &str {
        self.mutation_name.as_str()
    }

    pub(super) fn return_type(&self) -> Option<ReturnType> {
        self.return_type
    }
}

#[inherent]
impl OperationRequest for MutationRequest {
    pub fn custom_tag(&self) -> Option<&str> {
        self.custom_tag.as_deref()
    }

    pub fn field_arguments(&self) -> &[FieldArgument] {
        self.field_arguments.as_slice()
    }

    pub fn operation_kind(&self) -> OperationKind {
        OperationKind::Mutation
    }

    pub fn request_tag(&self) -> &str {
        self.mutation_name.as_str()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}
