use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::GenericArgument;
use syn::Ident;
use syn::LitStr;
use syn::PathArguments;
use syn::Type;
use syn::ext::IdentExt;

/// How a field takes part in introspection and population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FieldRole {
    Object { boxed: bool },
    Objects,
    Scalar,
}

#[derive(Debug)]
pub(crate) struct FieldModel {
    pub(crate) excluded: bool,
    pub(crate) ident: Ident,
    pub(crate) is_vec: bool,
    pub(crate) name: String,
    pub(crate) role: FieldRole,
}

/// Everything the derive needs to know about the annotated struct.
pub(crate) struct BusinessObjectModel {
    pub(crate) fields: Vec<FieldModel>,
    pub(crate) type_name: Option<LitStr>,
}
impl BusinessObjectModel {
    pub(crate) fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let named_fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                Fields::Unit => return Ok(Self {
                    fields: vec![],
                    type_name: parse_container_attrs(input)?.type_name,
                }),
                Fields::Unnamed(_) => return Err(syn::Error::new_spanned(
                    &input.ident,
                    "BusinessObject cannot be derived for tuple structs",
                )),
            },
            Data::Enum(_) | Data::Union(_) => return Err(syn::Error::new_spanned(
                &input.ident,
                "BusinessObject can only be derived for structs with named fields",
            )),
        };

        let container_attrs = parse_container_attrs(input)?;

        let mut fields = vec![];
        for field in named_fields {
            let Some(ident) = field.ident.to_owned() else {
                continue;
            };
            let field_attrs = parse_field_attrs(field)?;

            let is_vec = outer_type_is(&field.ty, "Vec");
            let role = match field_attrs.role {
                Some(FieldRoleAttr::Object) => FieldRole::Object {
                    boxed: outer_type_is(&field.ty, "Box"),
                },
                Some(FieldRoleAttr::Objects) if is_vec => FieldRole::Objects,
                Some(FieldRoleAttr::Objects) => return Err(syn::Error::new_spanned(
                    &field.ty,
                    "`#[shapeql(objects)]` requires a `Vec` field",
                )),
                None => FieldRole::Scalar,
            };

            let name = match field_attrs.rename {
                Some(rename) => rename.value(),
                None if container_attrs.rename_all_camel_case => {
                    to_camel_case(&ident.unraw().to_string())
                },
                None => ident.unraw().to_string(),
            };

            fields.push(FieldModel {
                excluded: field_attrs.exclude,
                ident,
                is_vec,
                name,
                role,
            });
        }

        Ok(Self {
            fields,
            type_name: container_attrs.type_name,
        })
    }
}

#[derive(Default)]
struct ContainerAttrs {
    rename_all_camel_case: bool,
    type_name: Option<LitStr>,
}

fn parse_container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut attrs = ContainerAttrs::default();
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("shapeql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_name") {
                attrs.type_name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("rename_all") {
                let rule: LitStr = meta.value()?.parse()?;
                if rule.value() != "camelCase" {
                    return Err(syn::Error::new_spanned(
                        &rule,
                        "the only supported `rename_all` rule is \"camelCase\"",
                    ));
                }
                attrs.rename_all_camel_case = true;
                Ok(())
            } else {
                Err(meta.error("unknown shapeql container attribute"))
            }
        })?;
    }
    Ok(attrs)
}

enum FieldRoleAttr {
    Object,
    Objects,
}

#[derive(Default)]
struct FieldAttrs {
    exclude: bool,
    rename: Option<LitStr>,
    role: Option<FieldRoleAttr>,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("shapeql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("exclude") {
                attrs.exclude = true;
            } else if meta.path.is_ident("rename") {
                attrs.rename = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("object") || meta.path.is_ident("objects") {
                if attrs.role.is_some() {
                    return Err(meta.error(
                        "`object` and `objects` may only be given once per field",
                    ));
                }
                attrs.role = Some(if meta.path.is_ident("object") {
                    FieldRoleAttr::Object
                } else {
                    FieldRoleAttr::Objects
                });
            } else {
                return Err(meta.error("unknown shapeql field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(attrs)
}

/// Whether `ty` is a path type whose last segment is `wrapper<..>`.
fn outer_type_is(ty: &Type, wrapper: &str) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    type_path.path.segments.last().is_some_and(|segment| {
        segment.ident == wrapper
            && matches!(
                &segment.arguments,
                PathArguments::AngleBracketed(args)
                    if matches!(args.args.first(), Some(GenericArgument::Type(_))),
            )
    })
}

pub(crate) fn to_camel_case(snake_case: &str) -> String {
    let mut camel_case = String::with_capacity(snake_case.len());
    let mut capitalize_next = false;
    for ch in snake_case.trim_start_matches('_').chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            camel_case.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            camel_case.push(ch);
        }
    }
    camel_case
}
