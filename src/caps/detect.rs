//! Capability descriptors for concrete container types.
//!
//! Uses the inherent-const fallback pattern: for each capability trait
//! `X` there is a fallback trait with `const HAS_X: bool = false`,
//! implemented for every `Detect<C>`, and an inherent `const HAS_X = true`
//! on `Detect<C>` where `C: X`. When resolving `Detect::<Concrete>::HAS_X`
//! the inherent const wins if the bound holds and the trait const
//! answers otherwise.
//!
//! Only meaningful for concrete types known at the use site; inside a
//! generic `fn foo<C>()` the answer is always the fallback.
//!
//! ```
//! use dense_index::caps::detect::*;
//! use dense_index::capability_set;
//!
//! assert!(Detect::<Vec<u8>>::HAS_PUSH_BACK);
//! assert!(!Detect::<[u8; 4]>::HAS_PUSH_BACK);
//!
//! const ARRAY: CapabilitySet = capability_set!([u8; 4]);
//! assert!(ARRAY.contains(CapabilitySet::DATA_ACCESS));
//! assert!(!ARRAY.contains(CapabilitySet::RESERVE));
//! ```

use core::marker::PhantomData;

use bitflags::bitflags;

use super::{
    BackAccess, CapacityQuery, CheckedAccess, Clear, DataAccess, EmplaceBack, EmptyQuery, Erase,
    FromCount, FrontAccess, IndexRead, Insert, Iterate, PopBack, PushBack, Reserve, Resize,
    ReverseIterate, ShrinkToFit, SizeQuery,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<C: ?Sized>(PhantomData<C>);

/// Declare the probe consts and the flag for every capability, in one order.
macro_rules! define_capabilities {
    ($($Trait:ident => $name:ident, $bit:expr;)*) => {
        ::paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] {
                    const [<HAS_ $name:upper>]: bool = false;
                }
                impl<C: ?Sized> [<$Trait Fallback>] for Detect<C> {}
                impl<C: ?Sized + $Trait> Detect<C> {
                    pub const [<HAS_ $name:upper>]: bool = true;
                }
            )*

            bitflags! {
                /// The set of capabilities a container type implements.
                ///
                /// Build one for a concrete type with
                /// [`capability_set!`](crate::capability_set).
                #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
                pub struct CapabilitySet: u32 {
                    $(
                        #[doc = concat!("Implements `", stringify!($Trait), "`.")]
                        const [<$name:upper>] = 1 << $bit;
                    )*
                }
            }

            impl CapabilitySet {
                /// Every flag paired with the trait it stands for, in bit order.
                pub const NAMED: &'static [(CapabilitySet, &'static str)] = &[
                    $((CapabilitySet::[<$name:upper>], stringify!($Trait)),)*
                ];
            }
        }
    };
}

define_capabilities! {
    IndexRead => index_read, 0;
    SizeQuery => size_query, 1;
    CheckedAccess => checked_access, 2;
    EmptyQuery => empty_query, 3;
    CapacityQuery => capacity_query, 4;
    Reserve => reserve, 5;
    Clear => clear, 6;
    ShrinkToFit => shrink_to_fit, 7;
    PushBack => push_back, 8;
    PopBack => pop_back, 9;
    EmplaceBack => emplace_back, 10;
    FrontAccess => front_access, 11;
    BackAccess => back_access, 12;
    Resize => resize, 13;
    Insert => insert, 14;
    Erase => erase, 15;
    DataAccess => data_access, 16;
    Iterate => iterate, 17;
    ReverseIterate => reverse_iterate, 18;
    FromCount => from_count, 19;
}

impl CapabilitySet {
    /// What every wrappable container provides.
    pub const SEQUENCE: Self = Self::INDEX_READ.union(Self::SIZE_QUERY);

    /// `self` plus `flag` when `present` holds.
    #[doc(hidden)]
    #[must_use]
    pub const fn with_probe(self, flag: Self, present: bool) -> Self {
        if present { self.union(flag) } else { self }
    }

    /// Whether a container with this set can back an adapter.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        self.contains(Self::SEQUENCE)
    }

    /// Trait names of the capabilities in this set, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

/// Build the [`CapabilitySet`] of a concrete container type.
///
/// Usable in `const` context.
///
/// ```
/// use dense_index::capability_set;
/// use dense_index::caps::CapabilitySet;
/// use std::collections::VecDeque;
///
/// const DEQUE: CapabilitySet = capability_set!(VecDeque<i32>);
/// assert!(DEQUE.contains(CapabilitySet::INSERT | CapabilitySet::ERASE));
/// assert!(!DEQUE.contains(CapabilitySet::DATA_ACCESS));
/// ```
#[macro_export]
macro_rules! capability_set {
    ($ty:ty) => {
        $crate::__capability_set!($ty;
            index_read size_query checked_access empty_query capacity_query
            reserve clear shrink_to_fit push_back pop_back emplace_back
            front_access back_access resize insert erase data_access
            iterate reverse_iterate from_count
        )
    };
}

/// Pairs each flag with its probe by name, so bit order never matters here.
#[doc(hidden)]
#[macro_export]
macro_rules! __capability_set {
    ($ty:ty; $($name:ident)*) => {{
        #[allow(unused_imports)]
        use $crate::caps::detect::*;
        $crate::paste::paste! {
            $crate::caps::CapabilitySet::empty()
                $(.with_probe(
                    $crate::caps::CapabilitySet::[<$name:upper>],
                    Detect::<$ty>::[<HAS_ $name:upper>],
                ))*
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_is_read_only() {
        let set = capability_set!([i32; 3]);
        assert!(set.is_sequence());
        assert!(set.contains(CapabilitySet::DATA_ACCESS | CapabilitySet::REVERSE_ITERATE));
        assert!(!set.intersects(
            CapabilitySet::PUSH_BACK
                | CapabilitySet::POP_BACK
                | CapabilitySet::RESERVE
                | CapabilitySet::CAPACITY_QUERY
        ));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn vec_has_everything() {
        assert_eq!(capability_set!(alloc::vec::Vec<u8>), CapabilitySet::all());
    }

    #[test]
    fn names_follow_bit_order() {
        let set = CapabilitySet::SEQUENCE | CapabilitySet::FROM_COUNT;
        let names: [&str; 3] = {
            let mut it = set.names();
            [it.next().unwrap_or(""), it.next().unwrap_or(""), it.next().unwrap_or("")]
        };
        assert_eq!(names, ["IndexRead", "SizeQuery", "FromCount"]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn every_named_flag_is_probed() {
        assert_eq!(CapabilitySet::NAMED.len(), CapabilitySet::all().bits().count_ones() as usize);
        let deque = capability_set!(alloc::collections::VecDeque<u8>);
        for (flag, name) in CapabilitySet::NAMED {
            let expected = *name != "DataAccess";
            assert_eq!(deque.contains(*flag), expected, "{name}");
        }
    }

    #[test]
    fn plain_types_are_not_containers() {
        assert!(!capability_set!(u64).is_sequence());
        assert!(capability_set!(u64).is_empty());
    }
}
