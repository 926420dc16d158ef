//! Procedural macros for dense-index
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(DomainTag)]` | enum/struct | Declare an index domain |
//! | `#[derive(DomainIndex)]` | index type | Register get / value / into access |
//! | `supports!()` | - | Capability expression on a concrete type |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(DomainTag)]
//! enum Employee {}
//!
//! #[derive(Clone, Copy, DomainIndex)]
//! #[domain_index(get)]
//! struct Seat(u16);
//!
//! const CAN_GROW: bool = supports!(Vec<u8>: PushBack & Reserve);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive `DomainTag` for a marker type.
///
/// The tag's `NAME` defaults to the type name.
///
/// # Usage
/// ```ignore
/// #[derive(DomainTag)]
/// enum Employee {}
///
/// #[derive(DomainTag)]
/// #[domain(name = "Dept")]
/// enum Department {}
/// ```
#[proc_macro_derive(DomainTag, attributes(domain))]
pub fn derive_domain_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_domain_tag(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `DomainIndex` for an index type defined elsewhere.
///
/// List every accessor form the type offers; the first by priority
/// (`get`, then `value`, then `into`) is used. Construction goes through
/// `From<usize>` unless `construct = path` names a `fn(usize) -> Self`.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, DomainIndex)]
/// #[domain_index(get, into, construct = UserId::from_raw)]
/// struct UserId(u32);
/// ```
#[proc_macro_derive(DomainIndex, attributes(domain_index))]
pub fn derive_domain_index(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_domain_index(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Evaluate a boolean capability expression for a concrete type.
///
/// Supports `&`, `|`, `!` and parentheses. Bare capability names refer to
/// `dense_index::caps`; other traits are used by path. Expands to a `bool`
/// usable in const context.
///
/// Only meaningful for concrete types known at the call site.
///
/// # Usage
/// ```ignore
/// assert!(supports!(Vec<u8>: PushBack & DataAccess));
/// assert!(supports!(VecDeque<u8>: Insert & !DataAccess));
/// const FIXED: bool = supports!([u8; 4]: !(PushBack | Reserve));
/// ```
#[proc_macro]
pub fn supports(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::TypeConstraint);
    user::expand_supports(input).into()
}
