//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    Attribute, Token, Type,
};

use super::CapExpr;

// =============================================================================
// Type Constraint Parsing: `Type: Expr`
// =============================================================================

/// A capability query on a concrete type: `Vec<u8>: PushBack & !DataAccess`
pub struct TypeConstraint {
    pub ty: Type,
    pub expr: CapExpr,
}

impl Parse for TypeConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: CapExpr = input.parse()?;
        Ok(TypeConstraint { ty, expr })
    }
}

// =============================================================================
// Attribute Lookup
// =============================================================================

/// Attributes on the item whose path is exactly `name`.
pub fn attrs_named<'a>(attrs: &'a [Attribute], name: &'a str) -> impl Iterator<Item = &'a Attribute> {
    attrs.iter().filter(move |attr| attr.path().is_ident(name))
}
