//! Declarative construction macros.

// =============================================================================
// define_index! - Tag + index alias in one line
// =============================================================================

/// Declare a domain tag and its [`StrongIndex`](crate::StrongIndex) alias.
///
/// `define_index!(Employee)` generates an uninhabited `EmployeeTag`
/// implementing [`DomainTag`](crate::DomainTag) with `NAME = "Employee"`, and
/// `type EmployeeIndex = StrongIndex<EmployeeTag>`.
///
/// # Example
///
/// ```
/// use dense_index::define_index;
///
/// define_index! {
///     pub Employee,
///     Department,
/// }
///
/// let e = EmployeeIndex::new(2);
/// assert_eq!(e.to_string(), "Employee(2)");
/// let _d: DepartmentIndex = DepartmentIndex::default();
/// ```
#[macro_export]
macro_rules! define_index {
    ($($vis:vis $name:ident),+ $(,)?) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("Domain tag for `", stringify!($name), "` positions.")]
                #[derive(Debug)]
                $vis enum [<$name Tag>] {}

                impl $crate::DomainTag for [<$name Tag>] {
                    const NAME: &'static str = stringify!($name);
                }

                #[doc = concat!("Position in a `", stringify!($name), "` container.")]
                $vis type [<$name Index>] = $crate::StrongIndex<[<$name Tag>]>;
            )+
        }
    };
}

// =============================================================================
// dense! - Literal construction
// =============================================================================

/// Build a [`DenseIndexed`](crate::DenseIndexed) from a literal list.
///
/// `dense![a, b, c]` forwards to `from_elements([a, b, c])`; `dense![v; n]`
/// forwards to `filled(n, v)`. The container and index types come from
/// context.
///
/// # Example
///
/// ```
/// use dense_index::{dense, define_index, DenseArray, DenseVec};
///
/// define_index!(Slot);
///
/// let names: DenseVec<&str, SlotIndex> = dense!["a", "b"];
/// let zeros: DenseVec<u8, SlotIndex> = dense![0; 4];
/// let fixed: DenseArray<i32, 3, SlotIndex> = dense![1, 2, 3];
///
/// assert_eq!(names[SlotIndex::new(1)], "b");
/// assert_eq!(zeros.len(), 4);
/// assert_eq!(fixed.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! dense {
    () => {
        $crate::DenseIndexed::new()
    };
    ($value:expr; $count:expr) => {
        $crate::DenseIndexed::filled($count, $value)
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DenseIndexed::from_elements([$($element),+])
    };
}
