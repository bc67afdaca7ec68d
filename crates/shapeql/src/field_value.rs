use crate::BusinessObject;

/// A borrowed view of one field's current value, as reported by
/// [`BusinessObject::field_values()`].
///
/// The variant decides how the field is classified during introspection and
/// how it is rendered as a mutation parameter.
#[derive(Clone, Debug)]
pub enum FieldValue<'a> {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// An untyped JSON payload. Never shape-inferred.
    Json(&'a serde_json::Value),
    List(Vec<FieldValue<'a>>),
    Null,
    Object(&'a dyn BusinessObject),
    /// A value of a kind this crate doesn't model (enums, dates, ids...),
    /// pre-rendered by the owning type.
    Other(String),
    String(&'a str),
    UInt(u64),
}
impl<'a> FieldValue<'a> {
    pub fn object(value: &'a dyn BusinessObject) -> Self {
        Self::Object(value)
    }

    /// Collect a slice of business objects into a [`FieldValue::List`].
    pub fn objects<T: BusinessObject>(values: &'a [T]) -> Self {
        Self::List(
            values.iter()
                .map(|value| Self::Object(value as &dyn BusinessObject))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short label for the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Json(_) => "json",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::Other(_) => "other",
            Self::String(_) => "string",
            Self::UInt(_) => "uint",
        }
    }
}

/// Conversion of a scalar-ish field into a [`FieldValue`].
///
/// Implemented for the primitive types, strings, `Option`, `Vec`, `Box` and
/// `serde_json::Value`. Nested business objects are reported with
/// [`FieldValue::object()`] / [`FieldValue::objects()`] instead.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self.as_str())
    }
}

impl ToFieldValue for &str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for char {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Other(self.to_string())
    }
}

macro_rules! impl_to_field_value {
    ($variant:ident as $target:ty: $($source:ty),+ $(,)?) => {
        $(
            impl ToFieldValue for $source {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_to_field_value!(Int as i64: i8, i16, i32, i64, isize);
impl_to_field_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_to_field_value!(Float as f64: f32, f64);

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for Box<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

impl ToFieldValue for serde_json::Value {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Json(self)
    }
}
