/// How a field participates in a document and in response population.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    /// An array whose placeholder element is a business object.
    ArrayOfObject,
    /// An array whose placeholder element is anything else.
    ArrayOfScalar,
    /// A single nested business object.
    NestedObject,
    /// Everything else, including values that could not be classified
    /// (empty arrays, nulls, untyped JSON).
    Scalar,
}
impl FieldKind {
    /// Whether fields of this kind carry a nested [`ObjectShape`](super::ObjectShape).
    pub fn has_nested_shape(&self) -> bool {
        matches!(self, Self::ArrayOfObject | Self::NestedObject)
    }
}
