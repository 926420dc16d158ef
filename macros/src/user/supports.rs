use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::common::{generate_probe_body, TypeConstraint};

/// `supports!(Type: Expr)` expands to a `bool` usable in const context.
pub fn expand_supports(input: TypeConstraint) -> TokenStream2 {
    let body = generate_probe_body(&input.expr, &input.ty);
    quote! { #body }
}
