//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Generics, Type};

mod attrs;

use attrs::{ContainerAttrs, FieldAttrs};

/// `EnvBind` derive macro
///
/// Implements `envbind::EnvBind` and `envbind::EnvField` for a struct with
/// named fields, so it can be bound at the top level and nested inside other
/// bindable structs.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "app")]`: Path prefix for top-level binds
///
/// **Field-level**:
/// - `#[env(name = "x")]`: Variable name, or path segment for nested structs
/// - `#[env(default = "value")]`: Literal used when the variable is unset or empty
/// - `#[env(sep = ";")]`: Separator for `Vec` fields
/// - `#[env(skip)]`: Never touch the field
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let container = ContainerAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvBind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvBind only supports structs",
            ));
        }
    };

    let type_params: Vec<&Ident> = input
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect();

    let mut field_binds = Vec::with_capacity(fields.len());
    let mut bounded_types = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.skip {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let name = attrs.name.unwrap_or_default();
        let default = option_tokens(attrs.default);
        let sep = option_tokens(attrs.sep);

        if mentions_type_param(&field.ty, &type_params) {
            bounded_types.push(&field.ty);
        }

        // Types without an `EnvField` impl resolve to the no-op binding.
        field_binds.push(quote! {
            (&mut ::envbind::de::Slot(&mut self.#field_name)).bind_slot(
                &::envbind::FieldSpec {
                    name: #name,
                    default: #default,
                    sep: #sep,
                },
                prefix,
                env,
            )?;
        });
    }

    let prefix = container.prefix.unwrap_or_default();
    let generics = add_field_bounds(input.generics.clone(), &bounded_types);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            const PREFIX: &'static str = #prefix;

            #[allow(unused_variables)]
            fn bind_prefixed(
                &mut self,
                prefix: &str,
                env: &dyn ::envbind::EnvSource,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                #[allow(unused_imports)]
                use ::envbind::de::{BindFallback as _, BindSupported as _};

                #(#field_binds)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::envbind::EnvField for #struct_name #ty_generics #where_clause {
            fn bind_field(
                &mut self,
                spec: &::envbind::FieldSpec<'_>,
                prefix: &str,
                env: &dyn ::envbind::EnvSource,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                ::envbind::de::bind_record(self, spec, prefix, env)
            }
        }
    })
}

/// Require every field type that mentions a type parameter to be bindable.
fn add_field_bounds(mut generics: Generics, field_types: &[&Type]) -> Generics {
    if field_types.is_empty() {
        return generics;
    }

    let where_clause = generics.make_where_clause();
    for ty in field_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: ::envbind::EnvField));
    }
    generics
}

fn mentions_type_param(ty: &Type, params: &[&Ident]) -> bool {
    !params.is_empty() && tokens_mention(quote!(#ty), params)
}

fn tokens_mention(tokens: TokenStream2, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), params),
        _ => false,
    })
}

fn option_tokens(value: Option<String>) -> TokenStream2 {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(#value) },
        None => quote! { ::core::option::Option::None },
    }
}
