mod business_object_derive;
mod business_object_model;


use syn::DeriveInput;
use syn::parse_macro_input;

/// Implements `BusinessObject` and `QueryableType` for a struct with named
/// fields.
///
/// Every field is reported in declaration order. Scalar fields go through
/// `ToFieldValue` and are assigned with `serde::Deserialize`; nested
/// business objects must be marked with `#[shapeql(object)]` (plain or
/// `Box`ed) or `#[shapeql(objects)]` (a `Vec`).
///
/// `create_default()` is `Default::default()`, so the type's `Default` impl
/// must seed each `objects` field with one placeholder element for its
/// element shape to be discovered.
///
/// Container attributes:
///
/// * `#[shapeql(type_name = "...")]` overrides the name used in documents.
/// * `#[shapeql(rename_all = "camelCase")]` renames every field.
///
/// Field attributes:
///
/// * `#[shapeql(rename = "...")]`
/// * `#[shapeql(exclude)]` keeps the field out of generated documents.
/// * `#[shapeql(object)]` / `#[shapeql(objects)]`
///
/// ```rust
/// use shapeql::BusinessObject;
/// use shapeql::introspection::Introspector;
///
/// #[derive(BusinessObject, Default)]
/// #[shapeql(rename_all = "camelCase")]
/// struct Route {
///     origin: String,
///     final_destination: String,
///     #[shapeql(exclude)]
///     cached_distance: Option<f64>,
/// }
///
/// let shape = Introspector::default().shape_of::<Route>().unwrap();
/// let names: Vec<&str> = shape.fields().iter().map(|field| field.name()).collect();
/// assert_eq!(names, vec!["origin", "finalDestination"]);
/// ```
#[proc_macro_derive(BusinessObject, attributes(shapeql))]
pub fn derive_business_object(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    business_object_derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
