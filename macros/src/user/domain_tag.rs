use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitStr};

use crate::common::attrs_named;

/// `#[derive(DomainTag)]`, optionally renamed with `#[domain(name = "...")]`.
pub fn expand_derive_domain_tag(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let mut name = LitStr::new(&ident.to_string(), ident.span());

    for attr in attrs_named(&input.attrs, "domain") {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = meta.value()?.parse()?;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::dense_index::DomainTag for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
        }
    })
}
