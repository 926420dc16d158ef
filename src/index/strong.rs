//! The built-in domain-tagged index.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::extract::{AccessForm, DomainIndex};
use super::tag::DomainTag;

/// A raw position stamped with the domain `Tag`.
///
/// Same size and layout as `usize`. Indices of different domains do not
/// compare, convert, or substitute for each other, and there is no implicit
/// conversion from or to integers:
///
/// ```compile_fail
/// use dense_index::define_index;
/// define_index!(Employee);
///
/// let idx: EmployeeIndex = 3; // raw integers are not indices
/// ```
///
/// ```compile_fail
/// use dense_index::define_index;
/// define_index!(Employee);
/// define_index!(Department);
///
/// let e = EmployeeIndex::new(0);
/// let d = DepartmentIndex::new(0);
/// assert!(e == d); // cross-domain comparison
/// ```
///
/// ```compile_fail
/// use dense_index::define_index;
/// define_index!(Employee);
///
/// let raw: usize = EmployeeIndex::new(1); // no implicit conversion out
/// ```
#[repr(transparent)]
pub struct StrongIndex<Tag: DomainTag> {
    raw: usize,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag: DomainTag> StrongIndex<Tag> {
    /// Index at position zero.
    pub const ZERO: Self = Self::new(0);

    /// Stamp `raw` with this domain.
    #[inline]
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// The raw position.
    #[inline]
    #[must_use]
    pub const fn value(self) -> usize {
        self.raw
    }

    /// The raw position. Alias of [`value`](Self::value).
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.raw
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// The following position, without mutating `self`.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.raw + 1)
    }

    /// The preceding position, without mutating `self`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `self` is position zero.
    #[inline]
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::new(self.raw - 1)
    }

    /// Advance in place and return the new value.
    #[inline]
    pub fn increment(&mut self) -> Self {
        self.raw += 1;
        *self
    }

    /// Advance in place and return the value held before.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.raw += 1;
        old
    }

    /// Step back in place and return the new value.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        self.raw -= 1;
        *self
    }

    /// Step back in place and return the value held before.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.raw -= 1;
        old
    }
}

impl<Tag: DomainTag> DomainIndex for StrongIndex<Tag> {
    const ACCESS: AccessForm = AccessForm::Get;

    #[inline]
    fn from_raw(raw: usize) -> Self {
        Self::new(raw)
    }

    #[inline]
    fn raw(&self) -> usize {
        self.raw
    }
}

// =============================================================================
// Value-object impls
// =============================================================================
//
// Written by hand: derives would demand `Tag: Clone + Eq + ...`, which tags
// never implement.

impl<Tag: DomainTag> Clone for StrongIndex<Tag> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tag: DomainTag> Copy for StrongIndex<Tag> {}

impl<Tag: DomainTag> Default for StrongIndex<Tag> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<Tag: DomainTag> PartialEq for StrongIndex<Tag> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Tag: DomainTag> Eq for StrongIndex<Tag> {}

impl<Tag: DomainTag> PartialOrd for StrongIndex<Tag> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tag: DomainTag> Ord for StrongIndex<Tag> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<Tag: DomainTag> Hash for StrongIndex<Tag> {
    // Only the position: hashes equal those of the raw `usize`.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<Tag: DomainTag> fmt::Debug for StrongIndex<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Tag::NAME, self.raw)
    }
}

impl<Tag: DomainTag> fmt::Display for StrongIndex<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Tag::NAME, self.raw)
    }
}

impl<Tag: DomainTag> From<StrongIndex<Tag>> for usize {
    #[inline]
    fn from(index: StrongIndex<Tag>) -> usize {
        index.raw
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl<Tag: DomainTag> Add<usize> for StrongIndex<Tag> {
    type Output = Self;

    #[inline]
    fn add(self, offset: usize) -> Self {
        Self::new(self.raw + offset)
    }
}

impl<Tag: DomainTag> Sub<usize> for StrongIndex<Tag> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: usize) -> Self {
        Self::new(self.raw - offset)
    }
}

impl<Tag: DomainTag> AddAssign<usize> for StrongIndex<Tag> {
    #[inline]
    fn add_assign(&mut self, offset: usize) {
        self.raw += offset;
    }
}

impl<Tag: DomainTag> SubAssign<usize> for StrongIndex<Tag> {
    #[inline]
    fn sub_assign(&mut self, offset: usize) {
        self.raw -= offset;
    }
}

/// Signed distance between two positions of the same domain.
///
/// # Panics
///
/// If the distance does not fit in `isize`.
impl<Tag: DomainTag> Sub for StrongIndex<Tag> {
    type Output = isize;

    #[inline]
    fn sub(self, other: Self) -> isize {
        let distance = if self.raw >= other.raw {
            isize::try_from(self.raw - other.raw).ok()
        } else {
            0isize.checked_sub_unsigned(other.raw - self.raw)
        };
        match distance {
            Some(distance) => distance,
            None => panic!("distance between {self} and {other} overflows isize"),
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<Tag: DomainTag> serde::Serialize for StrongIndex<Tag> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.raw as u64)
    }
}

#[cfg(feature = "serde")]
impl<'de, Tag: DomainTag> serde::Deserialize<'de> for StrongIndex<Tag> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <usize as serde::Deserialize>::deserialize(deserializer).map(Self::new)
    }
}
