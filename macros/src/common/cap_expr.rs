// Capability expressions and the const probes they expand to

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Expression Tree
// =============================================================================

/// `Trait`, `!e`, `a & b & ..`, `a | b | ..`, `(e)`.
///
/// `!` binds tightest, then `&`, then `|`. Chains of one operator are kept
/// flat.
#[derive(Clone, Debug)]
pub enum CapExpr {
    Has(Type),
    Not(Box<CapExpr>),
    All(Vec<CapExpr>),
    Any(Vec<CapExpr>),
}

impl Parse for CapExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        any_of(input)
    }
}

fn any_of(input: ParseStream) -> syn::Result<CapExpr> {
    let mut terms = vec![all_of(input)?];
    while input.parse::<Option<Token![|]>>()?.is_some() {
        terms.push(all_of(input)?);
    }
    Ok(collapse(terms, CapExpr::Any))
}

fn all_of(input: ParseStream) -> syn::Result<CapExpr> {
    let mut terms = vec![factor(input)?];
    while input.parse::<Option<Token![&]>>()?.is_some() {
        terms.push(factor(input)?);
    }
    Ok(collapse(terms, CapExpr::All))
}

fn factor(input: ParseStream) -> syn::Result<CapExpr> {
    if input.parse::<Option<Token![!]>>()?.is_some() {
        return Ok(CapExpr::Not(Box::new(factor(input)?)));
    }
    if input.peek(syn::token::Paren) {
        let inner;
        syn::parenthesized!(inner in input);
        return inner.parse();
    }
    input.parse().map(CapExpr::Has)
}

fn collapse(mut terms: Vec<CapExpr>, group: fn(Vec<CapExpr>) -> CapExpr) -> CapExpr {
    match terms.len() {
        1 => terms.remove(0),
        _ => group(terms),
    }
}

// =============================================================================
// Capability Name Resolution
// =============================================================================

/// Capability traits addressable by bare name.
const CAPABILITIES: &[&str] = &[
    "IndexRead",
    "SizeQuery",
    "Sequence",
    "CheckedAccess",
    "EmptyQuery",
    "CapacityQuery",
    "Reserve",
    "Clear",
    "ShrinkToFit",
    "PushBack",
    "PopBack",
    "EmplaceBack",
    "FrontAccess",
    "BackAccess",
    "Resize",
    "Insert",
    "Erase",
    "DataAccess",
    "Iterate",
    "ReverseIterate",
    "FromCount",
];

/// Bare capability names resolve into `::dense_index::caps`; anything else
/// (a qualified path, a user trait) is used as written.
fn resolve_trait(trait_ty: &Type) -> TokenStream {
    if let Type::Path(type_path) = trait_ty {
        if type_path.qself.is_none() {
            if let Some(ident) = type_path.path.get_ident() {
                if CAPABILITIES.contains(&ident.to_string().as_str()) {
                    return quote! { ::dense_index::caps::#ident };
                }
            }
        }
    }
    quote! { #trait_ty }
}

// =============================================================================
// Probe Generation (Inherent Const Fallback)
// =============================================================================

/// Generate a `bool` expression evaluating `expr` for the concrete `ty`.
pub fn generate_probe_body(expr: &CapExpr, ty: &Type) -> TokenStream {
    match expr {
        CapExpr::Has(trait_ty) => generate_single_probe(trait_ty, ty),
        CapExpr::Not(operand) => {
            let operand = generate_probe_body(operand, ty);
            quote! { (!#operand) }
        }
        CapExpr::All(terms) => {
            let terms = terms.iter().map(|term| generate_probe_body(term, ty));
            quote! { (#(#terms &&)* true) }
        }
        CapExpr::Any(terms) => {
            let terms = terms.iter().map(|term| generate_probe_body(term, ty));
            quote! { (#(#terms ||)* false) }
        }
    }
}

/// One trait, one probe: the inherent const shadows the fallback when `ty`
/// satisfies the bound.
fn generate_single_probe(trait_ty: &Type, ty: &Type) -> TokenStream {
    let bound = resolve_trait(trait_ty);
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #bound> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
