//! The capability-gated adapter.

mod aliases;
mod iter;
#[cfg(feature = "serde")]
mod serde;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Map;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut, Range};

use crate::caps::{
    BackAccess, CapacityQuery, CheckedAccess, Clear, DataAccess, EmplaceBack, EmptyQuery, Erase,
    FromCount, FrontAccess, Insert, Iterate, PopBack, PushBack, Reserve, Resize, ReverseIterate,
    Sequence, ShrinkToFit,
};
use crate::error::IndexError;
use crate::index::DomainIndex;
use crate::trace::trace_op;

pub use aliases::*;
pub use iter::IndexedIter;

/// A sequence container addressed only through the domain index `I`.
///
/// Owns exactly one `C` and has the same layout. Every method beyond
/// `len` and indexing exists only when `C` implements the matching
/// [capability trait](crate::caps).
///
/// ```
/// use dense_index::{define_index, DenseVec};
///
/// define_index!(Employee);
///
/// let mut staff: DenseVec<&str, EmployeeIndex> = DenseVec::new();
/// let alice = staff.push("Alice");
/// let bob = staff.push("Bob");
///
/// assert_eq!(staff[alice], "Alice");
/// assert_eq!(bob.value(), 1);
/// ```
///
/// Indices of another domain, and raw integers, are rejected:
///
/// ```compile_fail
/// use dense_index::{define_index, DenseVec};
/// define_index!(Employee);
/// define_index!(Department);
///
/// let staff: DenseVec<&str, EmployeeIndex> = DenseVec::from_underlying(vec!["Alice"]);
/// let _ = staff[DepartmentIndex::new(0)];
/// ```
///
/// ```compile_fail
/// use dense_index::{define_index, DenseVec};
/// define_index!(Employee);
///
/// let staff: DenseVec<&str, EmployeeIndex> = DenseVec::from_underlying(vec!["Alice"]);
/// let _ = staff[0];
/// ```
///
/// ```compile_fail
/// use dense_index::{define_index, DenseVec};
/// define_index!(Employee);
///
/// let staff: DenseVec<&str, EmployeeIndex> = DenseVec::from_underlying(vec!["Alice"]);
/// let _ = staff.at(0);
/// ```
#[repr(transparent)]
pub struct DenseIndexed<C: Sequence, I: DomainIndex> {
    container: C,
    _index: PhantomData<fn(I) -> I>,
}

// =============================================================================
// Construction
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    /// Wrap an already-built container.
    #[inline]
    pub const fn from_underlying(container: C) -> Self {
        Self {
            container,
            _index: PhantomData,
        }
    }

    #[inline]
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::from_underlying(C::default())
    }

    /// `count` default-valued elements.
    pub fn with_count(count: usize) -> Self
    where
        C: FromCount,
        C::Item: Default,
    {
        Self::from_underlying(C::from_count_with(count, Default::default))
    }

    /// `count` clones of `value`.
    pub fn filled(count: usize, value: C::Item) -> Self
    where
        C: FromCount,
        C::Item: Clone,
    {
        Self::from_underlying(C::from_count_filled(count, value))
    }

    /// Build from a literal element list; see also [`dense!`](crate::dense).
    pub fn from_elements<const N: usize>(elements: [C::Item; N]) -> Self
    where
        C: From<[C::Item; N]>,
    {
        Self::from_underlying(C::from(elements))
    }

    /// Empty, with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self
    where
        C: Default + Reserve,
    {
        let mut container = C::default();
        container.reserve(capacity);
        Self::from_underlying(container)
    }
}

// =============================================================================
// Element access
// =============================================================================

impl<C: Sequence, I: DomainIndex> Index<I> for DenseIndexed<C, I> {
    type Output = C::Item;

    /// Out-of-range positions behave as the container's own indexing does.
    #[inline]
    fn index(&self, index: I) -> &C::Item {
        self.container.read(index.raw())
    }
}

impl<C: Sequence, I: DomainIndex> IndexMut<I> for DenseIndexed<C, I> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut C::Item {
        self.container.read_mut(index.raw())
    }
}

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    /// Bounds-checked access. `None` when `index` is past the end.
    #[inline]
    pub fn at(&self, index: I) -> Option<&C::Item>
    where
        C: CheckedAccess,
    {
        self.container.checked(index.raw())
    }

    #[inline]
    pub fn at_mut(&mut self, index: I) -> Option<&mut C::Item>
    where
        C: CheckedAccess,
    {
        self.container.checked_mut(index.raw())
    }

    /// Like [`at`](Self::at), reporting the violation as an error.
    pub fn try_at(&self, index: I) -> Result<&C::Item, IndexError>
    where
        C: CheckedAccess,
    {
        let raw = index.raw();
        let len = self.container.size();
        self.container
            .checked(raw)
            .ok_or(IndexError::OutOfBounds { index: raw, len })
    }

    pub fn try_at_mut(&mut self, index: I) -> Result<&mut C::Item, IndexError>
    where
        C: CheckedAccess,
    {
        let raw = index.raw();
        let len = self.container.size();
        self.container
            .checked_mut(raw)
            .ok_or(IndexError::OutOfBounds { index: raw, len })
    }

    #[inline]
    pub fn front(&self) -> Option<&C::Item>
    where
        C: FrontAccess,
    {
        self.container.front()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut C::Item>
    where
        C: FrontAccess,
    {
        self.container.front_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&C::Item>
    where
        C: BackAccess,
    {
        self.container.back()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut C::Item>
    where
        C: BackAccess,
    {
        self.container.back_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[C::Item]
    where
        C: DataAccess,
    {
        self.container.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C::Item]
    where
        C: DataAccess,
    {
        self.container.as_mut_slice()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const C::Item
    where
        C: DataAccess,
    {
        self.container.as_slice().as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut C::Item
    where
        C: DataAccess,
    {
        self.container.as_mut_slice().as_mut_ptr()
    }
}

// =============================================================================
// Size and storage
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    #[inline]
    pub fn len(&self) -> usize {
        self.container.size()
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.container.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    where
        C: EmptyQuery,
    {
        self.container.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize
    where
        C: CapacityQuery,
    {
        self.container.capacity()
    }

    /// Make room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize)
    where
        C: Reserve,
    {
        self.container.reserve(additional);
    }

    #[inline]
    pub fn shrink_to_fit(&mut self)
    where
        C: ShrinkToFit,
    {
        self.container.shrink_to_fit();
    }

    pub fn clear(&mut self)
    where
        C: Clear,
    {
        trace_op!("clear ({} elements)", self.container.size());
        self.container.clear();
    }

    /// Every valid index, in order.
    pub fn indices(&self) -> Map<Range<usize>, fn(usize) -> I> {
        (0..self.container.size()).map(I::from_raw as fn(usize) -> I)
    }
}

// =============================================================================
// Growth at the end
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    /// Append `value` and return its index.
    ///
    /// The index is `len - 1` measured after the append, which is exact for
    /// containers that grow strictly at the end.
    #[inline]
    pub fn push(&mut self, value: C::Item) -> I
    where
        C: PushBack,
    {
        self.container.push_back(value);
        I::from_raw(self.container.size() - 1)
    }

    /// Build the new last element with `make` and return its index.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F) -> I
    where
        C: EmplaceBack,
        F: FnOnce() -> C::Item,
    {
        self.container.emplace_back_with(make);
        I::from_raw(self.container.size() - 1)
    }

    #[inline]
    pub fn pop(&mut self) -> Option<C::Item>
    where
        C: PopBack,
    {
        self.container.pop_back()
    }
}

// =============================================================================
// Positional edits
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    /// Insert `value` before `index`; returns the index of the new element.
    ///
    /// # Panics
    ///
    /// If `index` is past the end, as the container's own insert does.
    pub fn insert(&mut self, index: I, value: C::Item) -> I
    where
        C: Insert,
    {
        let raw = index.raw();
        trace_op!("insert at {raw} (len {})", self.container.size());
        I::from_raw(self.container.insert_at(raw, value))
    }

    /// Insert an element built by `make` before `index`.
    pub fn insert_with<F>(&mut self, index: I, make: F) -> I
    where
        C: Insert,
        F: FnOnce() -> C::Item,
    {
        self.insert(index, make())
    }

    /// Insert every item before `index`, keeping their order; returns the
    /// index of the first inserted element.
    ///
    /// # Panics
    ///
    /// If `index` is past the end, even when `items` is empty.
    pub fn insert_many<It>(&mut self, index: I, items: It) -> I
    where
        C: Insert,
        It: IntoIterator<Item = C::Item>,
    {
        let raw = index.raw();
        trace_op!("insert range at {raw} (len {})", self.container.size());
        I::from_raw(self.container.insert_iter_at(raw, items))
    }

    /// Remove the element at `index`; returns the index that now holds the
    /// element which followed it.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn erase(&mut self, index: I) -> I
    where
        C: Erase,
    {
        let raw = index.raw();
        trace_op!("erase at {raw} (len {})", self.container.size());
        self.container.erase_at(raw);
        I::from_raw(raw)
    }

    /// Remove `[first, last)`; returns the index following the removed run.
    ///
    /// # Panics
    ///
    /// If `first > last` or `last` is past the end.
    pub fn erase_range(&mut self, first: I, last: I) -> I
    where
        C: Erase,
    {
        let range = first.raw()..last.raw();
        trace_op!("erase {range:?} (len {})", self.container.size());
        I::from_raw(self.container.erase_range(range))
    }

    /// Remove and return the element at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range.
    pub fn remove(&mut self, index: I) -> C::Item
    where
        C: Erase,
    {
        let raw = index.raw();
        trace_op!("remove at {raw} (len {})", self.container.size());
        self.container.erase_at(raw)
    }

    /// Truncate, or extend with clones of `value`.
    pub fn resize(&mut self, len: usize, value: C::Item)
    where
        C: Resize,
        C::Item: Clone,
    {
        trace_op!("resize {} -> {len}", self.container.size());
        self.container.resize(len, value);
    }

    /// Truncate, or extend with values produced by `fill`.
    pub fn resize_with<F>(&mut self, len: usize, fill: F)
    where
        C: Resize,
        F: FnMut() -> C::Item,
    {
        trace_op!("resize {} -> {len}", self.container.size());
        self.container.resize_with(len, fill);
    }

    /// Truncate, or extend with default values.
    pub fn resize_default(&mut self, len: usize)
    where
        C: Resize,
        C::Item: Default,
    {
        self.resize_with(len, Default::default);
    }

    /// Exchange the contents of two adapters.
    pub fn swap(&mut self, other: &mut Self) {
        trace_op!("swap ({} <-> {} elements)", self.container.size(), other.container.size());
        core::mem::swap(&mut self.container, &mut other.container);
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    #[inline]
    pub fn iter(&self) -> IndexedIter<C::Iter<'_>, I>
    where
        C: Iterate,
    {
        IndexedIter::starting_at(self.container.iter(), 0)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IndexedIter<C::IterMut<'_>, I>
    where
        C: Iterate,
    {
        IndexedIter::starting_at(self.container.iter_mut(), 0)
    }

    #[inline]
    pub fn iter_rev(&self) -> C::RevIter<'_>
    where
        C: ReverseIterate,
    {
        self.container.iter_rev()
    }

    /// An iterator whose front is the element at `index`.
    ///
    /// At `len` the iterator is exhausted.
    pub fn iterator_at(&self, index: I) -> IndexedIter<C::Iter<'_>, I>
    where
        C: Iterate,
    {
        let raw = index.raw();
        let mut inner = self.container.iter();
        if raw > 0 {
            inner.nth(raw - 1);
        }
        IndexedIter::starting_at(inner, raw)
    }

    pub fn iterator_at_mut(&mut self, index: I) -> IndexedIter<C::IterMut<'_>, I>
    where
        C: Iterate,
    {
        let raw = index.raw();
        let mut inner = self.container.iter_mut();
        if raw > 0 {
            inner.nth(raw - 1);
        }
        IndexedIter::starting_at(inner, raw)
    }

    /// Index of the element at the front of `iter`.
    #[inline]
    pub fn index_of<It>(&self, iter: &IndexedIter<It, I>) -> I
    where
        C: Iterate,
    {
        I::from_raw(iter.offset())
    }
}

// =============================================================================
// Raw access
// =============================================================================

impl<C: Sequence, I: DomainIndex> DenseIndexed<C, I> {
    /// The wrapped container. Positions here are raw, not domain-typed.
    #[inline]
    pub const fn underlying(&self) -> &C {
        &self.container
    }

    #[inline]
    pub fn underlying_mut(&mut self) -> &mut C {
        &mut self.container
    }

    #[inline]
    pub fn into_underlying(self) -> C {
        self.container
    }
}

// =============================================================================
// Conversions and std traits
// =============================================================================

impl<C: Sequence + Default, I: DomainIndex> Default for DenseIndexed<C, I> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Sequence, I: DomainIndex> From<C> for DenseIndexed<C, I> {
    #[inline]
    fn from(container: C) -> Self {
        Self::from_underlying(container)
    }
}

impl<T, C: Sequence + FromIterator<T>, I: DomainIndex> FromIterator<T> for DenseIndexed<C, I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_underlying(C::from_iter(iter))
    }
}

impl<T, C: Sequence + Extend<T>, I: DomainIndex> Extend<T> for DenseIndexed<C, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.container.extend(iter);
    }
}

impl<C: Sequence + IntoIterator, I: DomainIndex> IntoIterator for DenseIndexed<C, I> {
    type Item = <C as IntoIterator>::Item;
    type IntoIter = <C as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.container.into_iter()
    }
}

impl<'a, C: Sequence + Iterate, I: DomainIndex> IntoIterator for &'a DenseIndexed<C, I> {
    type Item = &'a C::Item;
    type IntoIter = IndexedIter<C::Iter<'a>, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, C: Sequence + Iterate, I: DomainIndex> IntoIterator for &'a mut DenseIndexed<C, I> {
    type Item = &'a mut C::Item;
    type IntoIter = IndexedIter<C::IterMut<'a>, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// Comparison, hashing and formatting forward to the container and exist
// only when it provides them. No bounds land on `I`.

impl<C: Sequence + Clone, I: DomainIndex> Clone for DenseIndexed<C, I> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_underlying(self.container.clone())
    }
}

impl<C: Sequence + fmt::Debug, I: DomainIndex> fmt::Debug for DenseIndexed<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.container, f)
    }
}

impl<C: Sequence + PartialEq, I: DomainIndex> PartialEq for DenseIndexed<C, I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<C: Sequence + Eq, I: DomainIndex> Eq for DenseIndexed<C, I> {}

impl<C: Sequence + PartialOrd, I: DomainIndex> PartialOrd for DenseIndexed<C, I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.container.partial_cmp(&other.container)
    }
}

impl<C: Sequence + Ord, I: DomainIndex> Ord for DenseIndexed<C, I> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.container.cmp(&other.container)
    }
}

impl<C: Sequence + Hash, I: DomainIndex> Hash for DenseIndexed<C, I> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.container.hash(state);
    }
}
