//! Domain-tagged indices and the contract adapters read them through.

mod extract;
mod strong;
mod tag;

pub use extract::{AccessForm, DomainIndex, RawPosition};
pub use strong::StrongIndex;
pub use tag::DomainTag;
