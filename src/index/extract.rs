//! The value-extraction contract shared by every index type an adapter accepts.
//!
//! An index type supplies its raw position through one of three accessor
//! forms, consulted in a fixed priority order:
//!
//! 1. a `get()` method,
//! 2. a `value()` method,
//! 3. a conversion into `usize`.
//!
//! [`StrongIndex`](crate::StrongIndex) implements the contract directly.
//! Index types from elsewhere opt in with `#[derive(DomainIndex)]`, listing
//! the forms they offer; the derive selects the first one by priority.
//!
//! ```
//! use dense_index::{AccessForm, DomainIndex};
//!
//! #[derive(Clone, Copy, DomainIndex)]
//! #[domain_index(value, into)]
//! struct Slot(u32);
//!
//! impl Slot {
//!     fn value(&self) -> u32 { self.0 }
//! }
//! impl From<usize> for Slot {
//!     fn from(raw: usize) -> Self { Slot(raw as u32) }
//! }
//! impl From<Slot> for usize {
//!     fn from(slot: Slot) -> usize { slot.0 as usize }
//! }
//!
//! assert_eq!(Slot::ACCESS, AccessForm::Value);
//! assert_eq!(Slot(9).raw(), 9);
//! ```
//!
//! Raw integers are never index types:
//!
//! ```compile_fail
//! use dense_index::DenseVec;
//!
//! let v: DenseVec<i32, usize> = DenseVec::new();
//! ```

/// Accessor form an index type's raw position is read through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessForm {
    /// A `get()` method. Highest priority.
    Get,
    /// A `value()` method.
    Value,
    /// A conversion into `usize`. Lowest priority.
    Conversion,
}

impl AccessForm {
    /// Forms in the order they are consulted.
    pub const PRIORITY: [AccessForm; 3] = [AccessForm::Get, AccessForm::Value, AccessForm::Conversion];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AccessForm::Get => "get",
            AccessForm::Value => "value",
            AccessForm::Conversion => "conversion",
        }
    }
}

/// An index type usable with [`DenseIndexed`](crate::DenseIndexed).
///
/// The adapter reads positions through [`raw`](Self::raw) and mints
/// positions it hands back (after `push`, `insert`, `erase`, ...) through
/// [`from_raw`](Self::from_raw).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a domain index",
    label = "no `get()`, `value()` or `usize` conversion registered for this type",
    note = "use `StrongIndex<Tag>`, or `#[derive(DomainIndex)]` with `#[domain_index(get | value | into)]`",
    note = "raw integers are never domain indices"
)]
pub trait DomainIndex: Sized {
    /// The accessor form [`raw`](Self::raw) reads through.
    const ACCESS: AccessForm;

    /// Build an index denoting `raw`.
    fn from_raw(raw: usize) -> Self;

    /// The raw position this index denotes.
    fn raw(&self) -> usize;
}

/// Unsigned integers an accessor may return, widened into `usize`.
pub trait RawPosition: Copy {
    fn into_raw(self) -> usize;
}

macro_rules! impl_raw_position {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RawPosition for $ty {
                #[inline]
                fn into_raw(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_raw_position!(u8, u16, u32, u64, usize);
