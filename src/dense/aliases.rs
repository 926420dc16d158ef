//! Adapters over the standard container shapes.

use super::DenseIndexed;

/// Growable contiguous storage.
#[cfg(feature = "alloc")]
pub type DenseVec<T, I> = DenseIndexed<alloc::vec::Vec<T>, I>;

/// Double-ended queue. No contiguous data access.
#[cfg(feature = "alloc")]
pub type DenseDeque<T, I> = DenseIndexed<alloc::collections::VecDeque<T>, I>;

/// Fixed-size inline array. Read and iterate only.
pub type DenseArray<T, const N: usize, I> = DenseIndexed<[T; N], I>;

/// Fixed-size heap slice. Read and iterate only.
#[cfg(feature = "alloc")]
pub type DenseBoxedSlice<T, I> = DenseIndexed<alloc::boxed::Box<[T]>, I>;

/// Inline-first growable storage.
#[cfg(feature = "smallvec")]
pub type DenseSmallVec<A, I> = DenseIndexed<smallvec::SmallVec<A>, I>;
