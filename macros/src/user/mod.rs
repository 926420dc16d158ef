//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(DomainTag)]` | on empty enum/struct | Declare an index domain |
//! | `#[derive(DomainIndex)]` | on index newtype | Register an accessor form |
//! | `supports!` | function macro | Capability query on a concrete type |

mod domain_index;
mod domain_tag;
mod supports;

pub use domain_index::expand_derive_domain_index;
pub use domain_tag::expand_derive_domain_tag;
pub use supports::expand_supports;
