//! Domain tags: compile-time markers naming an index domain.

/// Marker for a logical index domain.
///
/// A tag is never instantiated. It only exists in type position so that
/// `StrongIndex<Employees>` and `StrongIndex<Departments>` are distinct types.
///
/// Implement it with `#[derive(DomainTag)]` or declare tag and index alias
/// together with [`define_index!`](crate::define_index).
///
/// ```
/// use dense_index::{DomainTag, StrongIndex};
///
/// #[derive(DomainTag)]
/// enum Employee {}
///
/// assert_eq!(<Employee as DomainTag>::NAME, "Employee");
/// assert_eq!(format!("{:?}", StrongIndex::<Employee>::new(3)), "Employee(3)");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a domain tag",
    label = "not a domain tag",
    note = "derive `DomainTag` on an empty enum or struct, or use `define_index!`"
)]
pub trait DomainTag: 'static {
    /// Name printed by `Debug` and `Display` of indices in this domain.
    const NAME: &'static str;
}
