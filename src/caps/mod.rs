//! Capability traits: one per container operation.
//!
//! A container supports an operation exactly when it implements the matching
//! trait. [`DenseIndexed`](crate::DenseIndexed) gates each of its methods on
//! one of these traits, so an adapter over a fixed-size array simply has no
//! `push`:
//!
//! ```compile_fail
//! use dense_index::{define_index, DenseArray};
//! define_index!(Price);
//!
//! let mut prices: DenseArray<f64, 3, PriceIndex> = DenseArray::from_underlying([1.0, 2.0, 3.0]);
//! prices.push(4.0);
//! ```
//!
//! Implementations are provided for `Vec`, `VecDeque`, `Box<[T]>`, `[T; N]`
//! and (with the `smallvec` feature) `SmallVec`. Other containers opt in by
//! implementing the traits themselves; [`Sequence`] is the minimum.

pub mod detect;
mod impls;

use core::ops::Range;

pub use detect::{CapabilitySet, Detect};

// =============================================================================
// Minimum contract
// =============================================================================

/// Unchecked positional access.
///
/// Out-of-range positions behave like the container's own indexing.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support positional reads",
    label = "missing `IndexRead`"
)]
pub trait IndexRead {
    type Item;

    fn read(&self, raw: usize) -> &Self::Item;

    fn read_mut(&mut self, raw: usize) -> &mut Self::Item;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot report its size",
    label = "missing `SizeQuery`"
)]
pub trait SizeQuery {
    fn size(&self) -> usize;
}

/// The minimum a container must offer to be wrapped at all.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot back a dense indexed container",
    label = "needs both `IndexRead` and `SizeQuery`",
    note = "linked or keyed collections have no constant-time positional access"
)]
pub trait Sequence: IndexRead + SizeQuery {}

impl<C: IndexRead + SizeQuery + ?Sized> Sequence for C {}

// =============================================================================
// Queries and checked access
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no bounds-checked access",
    label = "missing `CheckedAccess`"
)]
pub trait CheckedAccess: IndexRead {
    fn checked(&self, raw: usize) -> Option<&Self::Item>;

    fn checked_mut(&mut self, raw: usize) -> Option<&mut Self::Item>;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot report emptiness",
    label = "missing `EmptyQuery`"
)]
pub trait EmptyQuery {
    fn is_empty(&self) -> bool;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no capacity to query",
    label = "missing `CapacityQuery`",
    note = "fixed-size containers have no separate capacity"
)]
pub trait CapacityQuery {
    fn capacity(&self) -> usize;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot reserve storage",
    label = "missing `Reserve`",
    note = "fixed-size containers cannot grow"
)]
pub trait Reserve {
    /// Make room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);
}

#[diagnostic::on_unimplemented(message = "`{Self}` cannot be cleared", label = "missing `Clear`")]
pub trait Clear {
    fn clear(&mut self);
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot release spare capacity",
    label = "missing `ShrinkToFit`"
)]
pub trait ShrinkToFit {
    fn shrink_to_fit(&mut self);
}

// =============================================================================
// Growth and shrinkage at the end
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot grow at the end",
    label = "missing `PushBack`",
    note = "fixed-size containers such as `[T; N]` have no `push`"
)]
pub trait PushBack: IndexRead {
    fn push_back(&mut self, value: Self::Item);
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot shrink at the end",
    label = "missing `PopBack`"
)]
pub trait PopBack: IndexRead {
    fn pop_back(&mut self) -> Option<Self::Item>;
}

/// Build the element in place at the end.
///
/// Every [`PushBack`] container gets this for free.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot construct elements at the end",
    label = "missing `EmplaceBack`"
)]
pub trait EmplaceBack: IndexRead {
    fn emplace_back_with<F: FnOnce() -> Self::Item>(&mut self, make: F);
}

impl<C: PushBack + ?Sized> EmplaceBack for C {
    #[inline]
    fn emplace_back_with<F: FnOnce() -> Self::Item>(&mut self, make: F) {
        self.push_back(make());
    }
}

// =============================================================================
// Ends
// =============================================================================

#[diagnostic::on_unimplemented(message = "`{Self}` has no front access", label = "missing `FrontAccess`")]
pub trait FrontAccess: IndexRead {
    fn front(&self) -> Option<&Self::Item>;

    fn front_mut(&mut self) -> Option<&mut Self::Item>;
}

#[diagnostic::on_unimplemented(message = "`{Self}` has no back access", label = "missing `BackAccess`")]
pub trait BackAccess: IndexRead {
    fn back(&self) -> Option<&Self::Item>;

    fn back_mut(&mut self) -> Option<&mut Self::Item>;
}

// =============================================================================
// Structural edits
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be resized",
    label = "missing `Resize`",
    note = "fixed-size containers cannot change length"
)]
pub trait Resize: IndexRead {
    /// Truncate, or extend with clones of `value`.
    fn resize(&mut self, len: usize, value: Self::Item)
    where
        Self::Item: Clone;

    /// Truncate, or extend with values produced by `fill`.
    fn resize_with<F: FnMut() -> Self::Item>(&mut self, len: usize, fill: F);
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support positional insertion",
    label = "missing `Insert`"
)]
pub trait Insert: IndexRead {
    /// Insert before `raw`; returns the position of the new element.
    ///
    /// Panics if `raw > size`.
    fn insert_at(&mut self, raw: usize, value: Self::Item) -> usize;

    /// Insert every item before `raw`, keeping their order; returns the
    /// position of the first inserted element (`raw`).
    fn insert_iter_at<I>(&mut self, raw: usize, items: I) -> usize
    where
        I: IntoIterator<Item = Self::Item>;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support positional erasure",
    label = "missing `Erase`"
)]
pub trait Erase: IndexRead {
    /// Remove and return the element at `raw`, shifting later elements down.
    ///
    /// Panics if `raw >= size`.
    fn erase_at(&mut self, raw: usize) -> Self::Item;

    /// Remove `range`; returns the position now following the removed run.
    fn erase_range(&mut self, range: Range<usize>) -> usize;
}

// =============================================================================
// Storage and iteration
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` has no contiguous storage",
    label = "missing `DataAccess`",
    note = "`VecDeque` is a ring buffer; use `make_contiguous` on the underlying container"
)]
pub trait DataAccess: IndexRead {
    fn as_slice(&self) -> &[Self::Item];

    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

#[diagnostic::on_unimplemented(message = "`{Self}` cannot be iterated", label = "missing `Iterate`")]
pub trait Iterate: IndexRead {
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be iterated in reverse",
    label = "missing `ReverseIterate`"
)]
pub trait ReverseIterate: Iterate {
    type RevIter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn iter_rev(&self) -> Self::RevIter<'_>;
}

// =============================================================================
// Construction
// =============================================================================

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be built from an element count",
    label = "missing `FromCount`",
    note = "fixed-size containers already have their length; use `from_underlying`"
)]
pub trait FromCount: IndexRead + Sized {
    fn from_count_with<F: FnMut() -> Self::Item>(count: usize, fill: F) -> Self;

    fn from_count_filled(count: usize, value: Self::Item) -> Self
    where
        Self::Item: Clone;
}
