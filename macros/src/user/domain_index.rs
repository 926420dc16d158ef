use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path};

use crate::common::attrs_named;

/// Accessor forms in priority order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Form {
    Get,
    Value,
    Into,
}

#[derive(Default)]
struct DomainIndexArgs {
    forms: Vec<Form>,
    construct: Option<Path>,
}

impl DomainIndexArgs {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut args = DomainIndexArgs::default();
        for attr in attrs_named(&input.attrs, "domain_index") {
            attr.parse_nested_meta(|meta| {
                let form = if meta.path.is_ident("get") {
                    Form::Get
                } else if meta.path.is_ident("value") {
                    Form::Value
                } else if meta.path.is_ident("into") {
                    Form::Into
                } else if meta.path.is_ident("construct") {
                    args.construct = Some(meta.value()?.parse()?);
                    return Ok(());
                } else {
                    return Err(meta.error("expected `get`, `value`, `into` or `construct = path`"));
                };
                args.forms.push(form);
                Ok(())
            })?;
        }
        Ok(args)
    }

    /// The highest-priority form the type declared.
    fn selected(&self) -> Option<Form> {
        self.forms.iter().copied().min()
    }
}

/// `#[derive(DomainIndex)]` with `#[domain_index(get | value | into, construct = path)]`.
///
/// Construction defaults to `From<usize>`.
pub fn expand_derive_domain_index(input: DeriveInput) -> syn::Result<TokenStream2> {
    let args = DomainIndexArgs::from_input(&input)?;
    let ident = &input.ident;

    let Some(form) = args.selected() else {
        return Err(syn::Error::new(
            ident.span(),
            "`DomainIndex` needs an accessor form: #[domain_index(get)], #[domain_index(value)] or #[domain_index(into)]",
        ));
    };

    let (access, raw) = match form {
        Form::Get => (
            quote! { ::dense_index::AccessForm::Get },
            quote! { ::dense_index::RawPosition::into_raw(self.get()) },
        ),
        Form::Value => (
            quote! { ::dense_index::AccessForm::Value },
            quote! { ::dense_index::RawPosition::into_raw(self.value()) },
        ),
        Form::Into => (
            quote! { ::dense_index::AccessForm::Conversion },
            quote! { ::core::convert::Into::<usize>::into(::core::clone::Clone::clone(self)) },
        ),
    };

    let construct = match &args.construct {
        Some(path) => quote! { #path(raw) },
        None => quote! { <Self as ::core::convert::From<usize>>::from(raw) },
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::dense_index::DomainIndex for #ident #ty_generics #where_clause {
            const ACCESS: ::dense_index::AccessForm = #access;

            #[inline]
            fn from_raw(raw: usize) -> Self {
                #construct
            }

            #[inline]
            fn raw(&self) -> usize {
                #raw
            }
        }
    })
}
