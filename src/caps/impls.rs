//! Capability impls for the container shapes this crate knows about.

use core::iter::Rev;
#[cfg(any(feature = "alloc", feature = "smallvec"))]
use core::ops::Range;
use core::slice;

use super::{
    BackAccess, CheckedAccess, DataAccess, EmptyQuery, FrontAccess, IndexRead, Iterate,
    ReverseIterate, SizeQuery,
};
#[cfg(any(feature = "alloc", feature = "smallvec"))]
use super::{CapacityQuery, Clear, Erase, FromCount, Insert, PopBack, PushBack, Reserve, Resize, ShrinkToFit};

// =============================================================================
// Slice-backed read side
// =============================================================================

/// Read-only capabilities shared by every contiguous container.
///
/// `[generics] Container => Item`
macro_rules! impl_slice_backed {
    ([$($g:tt)*] $ty:ty => $item:ty) => {
        impl<$($g)*> IndexRead for $ty {
            type Item = $item;

            #[inline]
            fn read(&self, raw: usize) -> &$item {
                &self[raw]
            }

            #[inline]
            fn read_mut(&mut self, raw: usize) -> &mut $item {
                &mut self[raw]
            }
        }

        impl<$($g)*> SizeQuery for $ty {
            #[inline]
            fn size(&self) -> usize {
                <[$item]>::len(&self[..])
            }
        }

        impl<$($g)*> CheckedAccess for $ty {
            #[inline]
            fn checked(&self, raw: usize) -> Option<&$item> {
                <[$item]>::get(&self[..], raw)
            }

            #[inline]
            fn checked_mut(&mut self, raw: usize) -> Option<&mut $item> {
                <[$item]>::get_mut(&mut self[..], raw)
            }
        }

        impl<$($g)*> EmptyQuery for $ty {
            #[inline]
            fn is_empty(&self) -> bool {
                <[$item]>::is_empty(&self[..])
            }
        }

        impl<$($g)*> FrontAccess for $ty {
            #[inline]
            fn front(&self) -> Option<&$item> {
                <[$item]>::first(&self[..])
            }

            #[inline]
            fn front_mut(&mut self) -> Option<&mut $item> {
                <[$item]>::first_mut(&mut self[..])
            }
        }

        impl<$($g)*> BackAccess for $ty {
            #[inline]
            fn back(&self) -> Option<&$item> {
                <[$item]>::last(&self[..])
            }

            #[inline]
            fn back_mut(&mut self) -> Option<&mut $item> {
                <[$item]>::last_mut(&mut self[..])
            }
        }

        impl<$($g)*> DataAccess for $ty {
            #[inline]
            fn as_slice(&self) -> &[$item] {
                &self[..]
            }

            #[inline]
            fn as_mut_slice(&mut self) -> &mut [$item] {
                &mut self[..]
            }
        }

        impl<$($g)*> Iterate for $ty {
            type Iter<'a> = slice::Iter<'a, $item> where Self: 'a;
            type IterMut<'a> = slice::IterMut<'a, $item> where Self: 'a;

            #[inline]
            fn iter(&self) -> Self::Iter<'_> {
                <[$item]>::iter(&self[..])
            }

            #[inline]
            fn iter_mut(&mut self) -> Self::IterMut<'_> {
                <[$item]>::iter_mut(&mut self[..])
            }
        }

        impl<$($g)*> ReverseIterate for $ty {
            type RevIter<'a> = Rev<slice::Iter<'a, $item>> where Self: 'a;

            #[inline]
            fn iter_rev(&self) -> Self::RevIter<'_> {
                <[$item]>::iter(&self[..]).rev()
            }
        }
    };
}

impl_slice_backed!([T, const N: usize] [T; N] => T);

#[cfg(feature = "alloc")]
impl_slice_backed!([T] alloc::boxed::Box<[T]> => T);

#[cfg(feature = "alloc")]
impl_slice_backed!([T] alloc::vec::Vec<T> => T);

#[cfg(feature = "smallvec")]
impl_slice_backed!([A: smallvec::Array] smallvec::SmallVec<A> => A::Item);

// =============================================================================
// Growable: Vec and SmallVec
// =============================================================================

/// Growth capabilities for containers exposing the `Vec` method surface.
///
/// `insert_iter_at` differs between containers and is passed in.
macro_rules! impl_growable {
    ([$($g:tt)*] $ty:ty => $item:ty, |$this:ident, $at:ident, $items:ident| $insert_iter:expr) => {
        impl<$($g)*> CapacityQuery for $ty {
            #[inline]
            fn capacity(&self) -> usize {
                <$ty>::capacity(self)
            }
        }

        impl<$($g)*> Reserve for $ty {
            #[inline]
            fn reserve(&mut self, additional: usize) {
                <$ty>::reserve(self, additional);
            }
        }

        impl<$($g)*> Clear for $ty {
            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }
        }

        impl<$($g)*> ShrinkToFit for $ty {
            #[inline]
            fn shrink_to_fit(&mut self) {
                <$ty>::shrink_to_fit(self);
            }
        }

        impl<$($g)*> PushBack for $ty {
            #[inline]
            fn push_back(&mut self, value: $item) {
                <$ty>::push(self, value);
            }
        }

        impl<$($g)*> PopBack for $ty {
            #[inline]
            fn pop_back(&mut self) -> Option<$item> {
                <$ty>::pop(self)
            }
        }

        impl<$($g)*> Resize for $ty {
            #[inline]
            fn resize(&mut self, len: usize, value: $item)
            where
                $item: Clone,
            {
                <$ty>::resize(self, len, value);
            }

            fn resize_with<F: FnMut() -> $item>(&mut self, len: usize, fill: F) {
                let current = <[$item]>::len(&self[..]);
                if len <= current {
                    <$ty>::truncate(self, len);
                } else {
                    self.extend(core::iter::repeat_with(fill).take(len - current));
                }
            }
        }

        impl<$($g)*> Insert for $ty {
            #[inline]
            fn insert_at(&mut self, raw: usize, value: $item) -> usize {
                <$ty>::insert(self, raw, value);
                raw
            }

            fn insert_iter_at<I>(&mut self, raw: usize, items: I) -> usize
            where
                I: IntoIterator<Item = $item>,
            {
                let ($this, $at, $items) = (self, raw, items);
                $insert_iter;
                raw
            }
        }

        impl<$($g)*> Erase for $ty {
            #[inline]
            fn erase_at(&mut self, raw: usize) -> $item {
                <$ty>::remove(self, raw)
            }

            fn erase_range(&mut self, range: Range<usize>) -> usize {
                let start = range.start;
                <$ty>::drain(self, range);
                start
            }
        }

        impl<$($g)*> FromCount for $ty {
            fn from_count_with<F: FnMut() -> $item>(count: usize, fill: F) -> Self {
                core::iter::repeat_with(fill).take(count).collect()
            }

            fn from_count_filled(count: usize, value: $item) -> Self
            where
                $item: Clone,
            {
                core::iter::repeat_n(value, count).collect()
            }
        }
    };
}

#[cfg(feature = "alloc")]
impl_growable!([T] alloc::vec::Vec<T> => T, |this, at, items| {
    this.splice(at..at, items);
});

#[cfg(feature = "smallvec")]
impl_growable!([A: smallvec::Array] smallvec::SmallVec<A> => A::Item, |this, at, items| {
    this.insert_many(at, items);
});

// =============================================================================
// VecDeque
// =============================================================================

#[cfg(feature = "alloc")]
mod deque {
    use alloc::collections::VecDeque;
    use alloc::collections::vec_deque;
    use core::iter::Rev;
    use core::ops::Range;

    use crate::caps::{
        BackAccess, CapacityQuery, CheckedAccess, Clear, EmptyQuery, Erase, FromCount, FrontAccess,
        IndexRead, Insert, Iterate, PopBack, PushBack, Reserve, Resize, ReverseIterate,
        ShrinkToFit, SizeQuery,
    };

    impl<T> IndexRead for VecDeque<T> {
        type Item = T;

        #[inline]
        fn read(&self, raw: usize) -> &T {
            &self[raw]
        }

        #[inline]
        fn read_mut(&mut self, raw: usize) -> &mut T {
            &mut self[raw]
        }
    }

    impl<T> SizeQuery for VecDeque<T> {
        #[inline]
        fn size(&self) -> usize {
            VecDeque::len(self)
        }
    }

    impl<T> CheckedAccess for VecDeque<T> {
        #[inline]
        fn checked(&self, raw: usize) -> Option<&T> {
            VecDeque::get(self, raw)
        }

        #[inline]
        fn checked_mut(&mut self, raw: usize) -> Option<&mut T> {
            VecDeque::get_mut(self, raw)
        }
    }

    impl<T> EmptyQuery for VecDeque<T> {
        #[inline]
        fn is_empty(&self) -> bool {
            VecDeque::is_empty(self)
        }
    }

    impl<T> CapacityQuery for VecDeque<T> {
        #[inline]
        fn capacity(&self) -> usize {
            VecDeque::capacity(self)
        }
    }

    impl<T> Reserve for VecDeque<T> {
        #[inline]
        fn reserve(&mut self, additional: usize) {
            VecDeque::reserve(self, additional);
        }
    }

    impl<T> Clear for VecDeque<T> {
        #[inline]
        fn clear(&mut self) {
            VecDeque::clear(self);
        }
    }

    impl<T> ShrinkToFit for VecDeque<T> {
        #[inline]
        fn shrink_to_fit(&mut self) {
            VecDeque::shrink_to_fit(self);
        }
    }

    impl<T> PushBack for VecDeque<T> {
        #[inline]
        fn push_back(&mut self, value: T) {
            VecDeque::push_back(self, value);
        }
    }

    impl<T> PopBack for VecDeque<T> {
        #[inline]
        fn pop_back(&mut self) -> Option<T> {
            VecDeque::pop_back(self)
        }
    }

    impl<T> FrontAccess for VecDeque<T> {
        #[inline]
        fn front(&self) -> Option<&T> {
            VecDeque::front(self)
        }

        #[inline]
        fn front_mut(&mut self) -> Option<&mut T> {
            VecDeque::front_mut(self)
        }
    }

    impl<T> BackAccess for VecDeque<T> {
        #[inline]
        fn back(&self) -> Option<&T> {
            VecDeque::back(self)
        }

        #[inline]
        fn back_mut(&mut self) -> Option<&mut T> {
            VecDeque::back_mut(self)
        }
    }

    impl<T> Resize for VecDeque<T> {
        #[inline]
        fn resize(&mut self, len: usize, value: T)
        where
            T: Clone,
        {
            VecDeque::resize(self, len, value);
        }

        #[inline]
        fn resize_with<F: FnMut() -> T>(&mut self, len: usize, fill: F) {
            VecDeque::resize_with(self, len, fill);
        }
    }

    impl<T> Insert for VecDeque<T> {
        #[inline]
        fn insert_at(&mut self, raw: usize, value: T) -> usize {
            VecDeque::insert(self, raw, value);
            raw
        }

        fn insert_iter_at<I>(&mut self, raw: usize, items: I) -> usize
        where
            I: IntoIterator<Item = T>,
        {
            let len = VecDeque::len(self);
            assert!(raw <= len, "insertion index (is {raw}) should be <= len (is {len})");
            for (offset, item) in items.into_iter().enumerate() {
                VecDeque::insert(self, raw + offset, item);
            }
            raw
        }
    }

    impl<T> Erase for VecDeque<T> {
        fn erase_at(&mut self, raw: usize) -> T {
            let len = VecDeque::len(self);
            match VecDeque::remove(self, raw) {
                Some(value) => value,
                None => panic!("erase position (is {raw}) should be < len (is {len})"),
            }
        }

        fn erase_range(&mut self, range: Range<usize>) -> usize {
            let start = range.start;
            VecDeque::drain(self, range);
            start
        }
    }

    impl<T> Iterate for VecDeque<T> {
        type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;
        type IterMut<'a> = vec_deque::IterMut<'a, T> where Self: 'a;

        #[inline]
        fn iter(&self) -> Self::Iter<'_> {
            VecDeque::iter(self)
        }

        #[inline]
        fn iter_mut(&mut self) -> Self::IterMut<'_> {
            VecDeque::iter_mut(self)
        }
    }

    impl<T> ReverseIterate for VecDeque<T> {
        type RevIter<'a> = Rev<vec_deque::Iter<'a, T>> where Self: 'a;

        #[inline]
        fn iter_rev(&self) -> Self::RevIter<'_> {
            VecDeque::iter(self).rev()
        }
    }

    impl<T> FromCount for VecDeque<T> {
        fn from_count_with<F: FnMut() -> T>(count: usize, fill: F) -> Self {
            core::iter::repeat_with(fill).take(count).collect()
        }

        fn from_count_filled(count: usize, value: T) -> Self
        where
            T: Clone,
        {
            core::iter::repeat_n(value, count).collect()
        }
    }
}
