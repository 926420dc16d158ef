//! Position-tracking iterators handed out by the adapter.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::index::DomainIndex;

/// Wraps a container iterator and counts how far its front has advanced.
///
/// Yields the container's own items; the position is recovered through
/// [`DenseIndexed::index_of`](crate::DenseIndexed::index_of) or
/// [`position`](Self::position).
pub struct IndexedIter<It, I> {
    inner: It,
    front: usize,
    _index: PhantomData<fn() -> I>,
}

impl<It, I> IndexedIter<It, I> {
    #[inline]
    pub(crate) fn starting_at(inner: It, front: usize) -> Self {
        Self {
            inner,
            front,
            _index: PhantomData,
        }
    }

    /// Raw distance of the front from the beginning of the container.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.front
    }

    /// Discard the position and return the container's iterator.
    #[inline]
    pub fn into_inner(self) -> It {
        self.inner
    }
}

impl<It, I: DomainIndex> IndexedIter<It, I> {
    /// Index of the element the next call to `next` yields.
    #[inline]
    #[must_use]
    pub fn position(&self) -> I {
        I::from_raw(self.front)
    }
}

impl<It: Iterator, I> Iterator for IndexedIter<It, I> {
    type Item = It::Item;

    #[inline]
    fn next(&mut self) -> Option<It::Item> {
        let item = self.inner.next()?;
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// Taking from the back leaves the front position untouched.
impl<It: DoubleEndedIterator, I> DoubleEndedIterator for IndexedIter<It, I> {
    #[inline]
    fn next_back(&mut self) -> Option<It::Item> {
        self.inner.next_back()
    }
}

impl<It: ExactSizeIterator, I> ExactSizeIterator for IndexedIter<It, I> {}

impl<It: FusedIterator, I> FusedIterator for IndexedIter<It, I> {}

impl<It: Clone, I> Clone for IndexedIter<It, I> {
    fn clone(&self) -> Self {
        Self::starting_at(self.inner.clone(), self.front)
    }
}

impl<It: fmt::Debug, I> fmt::Debug for IndexedIter<It, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedIter")
            .field("front", &self.front)
            .field("inner", &self.inner)
            .finish()
    }
}
