//! Derive macros for input models.
//!
//! This crate provides `#[derive(InputModel)]` for structs whose fields become
//! form inputs, and `#[derive(InputEnum)]` for unit enums rendered as option
//! lists.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, Lit, Meta, Type};

/// Derives `InputModel` for a struct with named fields.
///
/// # Field Attributes
///
/// - `#[input(name = "Name")]` - Property name (defaults to the field name)
/// - `#[input(label = "Label")]` - Label shown next to the input
/// - `#[input(example = "text")]` - Example text
/// - `#[input(required)]` - Marks the property as required
/// - `#[input(partial = "Password")]` - Partial name override
/// - `#[input(max_length = 120)]` - Maximum value length
/// - `#[input(skip)]` - Leaves the field out of the model
///
/// Every other field type must implement `InputProperty`.
#[proc_macro_derive(InputModel, attributes(input))]
pub fn derive_input_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_input_model_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `InputEnum` and `InputProperty` for an enum with unit variants.
///
/// # Attributes
///
/// - `#[input(name = "Name")]` on the enum - Type name (defaults to the
///   enum name)
/// - `#[input(name = "Name")]` on a variant - Variant name (defaults to the
///   variant identifier)
#[proc_macro_derive(InputEnum, attributes(input))]
pub fn derive_input_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_input_enum_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_input_model_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "InputModel derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "InputModel derive only supports structs",
            ));
        }
    };

    let mut properties: Vec<PropertyDef> = Vec::new();
    for field in fields {
        let attrs = parse_input_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(field_name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        properties.push(PropertyDef {
            name: attrs.name.clone().unwrap_or_else(|| field_name.unraw().to_string()),
            field_name,
            field_type: field.ty.clone(),
            attrs,
        });
    }

    let property_infos: Vec<TokenStream2> = properties
        .iter()
        .map(|p| {
            let name = &p.name;
            let field_type = &p.field_type;
            let label = p.attrs.label.as_ref().map(|l| quote! { .label(#l) });
            let example = p.attrs.example.as_ref().map(|e| quote! { .example(#e) });
            let partial = p.attrs.partial.as_ref().map(|s| quote! { .partial(#s) });
            let max_length = p.attrs.max_length.map(|n| quote! { .max_length(#n) });
            let required = p.attrs.required.then(|| quote! { .required() });

            quote! {
                ::oxide_inputs::conventions::PropertyInfo::new(
                    #name,
                    <#field_type as ::oxide_inputs::conventions::InputProperty>::property_type(),
                )
                #label #example #partial #max_length #required
            }
        })
        .collect();

    let value_arms: Vec<TokenStream2> = properties
        .iter()
        .map(|p| {
            let name = &p.name;
            let field_name = &p.field_name;
            quote! {
                #name => ::oxide_inputs::conventions::InputProperty::to_property_value(
                    &self.#field_name
                ),
            }
        })
        .collect();

    Ok(quote! {
        impl #impl_generics ::oxide_inputs::conventions::InputModel
            for #struct_name #ty_generics #where_clause
        {
            fn properties() -> ::std::vec::Vec<::oxide_inputs::conventions::PropertyInfo> {
                ::std::vec![#(#property_infos),*]
            }

            fn property_value(&self, name: &str) -> ::oxide_inputs::conventions::PropertyValue {
                match name {
                    #(#value_arms)*
                    _ => ::oxide_inputs::conventions::PropertyValue::Null,
                }
            }
        }
    })
}

fn derive_input_enum_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let type_name = parse_input_attrs(&input.attrs)?
        .name
        .unwrap_or_else(|| enum_name.unraw().to_string());

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "InputEnum derive only supports enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input,
            "InputEnum derive requires at least one variant",
        ));
    }

    let mut variants: Vec<(Ident, String)> = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "InputEnum derive only supports unit variants",
            ));
        }
        let name = parse_input_attrs(&variant.attrs)?
            .name
            .unwrap_or_else(|| variant.ident.unraw().to_string());
        variants.push((variant.ident.clone(), name));
    }

    let variant_names: Vec<&str> = variants.iter().map(|(_, name)| name.as_str()).collect();
    let match_arms: Vec<TokenStream2> = variants
        .iter()
        .map(|(ident, name)| quote! { Self::#ident => #name, })
        .collect();

    Ok(quote! {
        impl #impl_generics ::oxide_inputs::conventions::InputEnum
            for #enum_name #ty_generics #where_clause
        {
            const NAME: &'static str = #type_name;
            const VARIANTS: &'static [&'static str] = &[#(#variant_names),*];

            fn variant_name(&self) -> &'static str {
                match self {
                    #(#match_arms)*
                }
            }
        }

        impl #impl_generics ::oxide_inputs::conventions::InputProperty
            for #enum_name #ty_generics #where_clause
        {
            fn property_type() -> ::oxide_inputs::conventions::PropertyType {
                ::oxide_inputs::conventions::PropertyType::Enum(
                    <Self as ::oxide_inputs::conventions::InputEnum>::enum_info(),
                )
            }

            fn to_property_value(&self) -> ::oxide_inputs::conventions::PropertyValue {
                ::oxide_inputs::conventions::PropertyValue::Enum(
                    ::oxide_inputs::conventions::InputEnum::variant_name(self),
                )
            }
        }
    })
}

struct PropertyDef {
    field_name: Ident,
    field_type: Type,
    name: String,
    attrs: InputAttrs,
}

#[derive(Default)]
struct InputAttrs {
    name: Option<String>,
    label: Option<String>,
    example: Option<String>,
    partial: Option<String>,
    max_length: Option<usize>,
    required: bool,
    skip: bool,
}

fn parse_input_attrs(attrs: &[Attribute]) -> syn::Result<InputAttrs> {
    let mut result = InputAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("input") {
            continue;
        }
        // Handle empty attribute like #[input]
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                result.required = true;
            } else if meta.path.is_ident("skip") {
                result.skip = true;
            } else if meta.path.is_ident("max_length") {
                let value: Expr = meta.value()?.parse()?;
                match value {
                    Expr::Lit(lit) => match lit.lit {
                        Lit::Int(n) => result.max_length = Some(n.base10_parse()?),
                        other => {
                            return Err(syn::Error::new_spanned(other, "expected an integer"));
                        }
                    },
                    other => return Err(syn::Error::new_spanned(other, "expected an integer")),
                }
            } else {
                let slot = if meta.path.is_ident("name") {
                    &mut result.name
                } else if meta.path.is_ident("label") {
                    &mut result.label
                } else if meta.path.is_ident("example") {
                    &mut result.example
                } else if meta.path.is_ident("partial") {
                    &mut result.partial
                } else {
                    return Err(meta.error("unknown input attribute"));
                };
                let value: Expr = meta.value()?.parse()?;
                match value {
                    Expr::Lit(lit) => match lit.lit {
                        Lit::Str(s) => *slot = Some(s.value()),
                        other => return Err(syn::Error::new_spanned(other, "expected a string")),
                    },
                    other => return Err(syn::Error::new_spanned(other, "expected a string")),
                }
            }
            Ok(())
        })?;
    }

    Ok(result)
}
