//! StrongIndex value semantics.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use dense_index::{define_index, AccessForm, DomainIndex, DomainTag, StrongIndex};
use pretty_assertions::assert_eq;

define_index!(Employee, Department);

fn hash_of<T: Hash>(value: T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction and extraction
// =============================================================================

#[test]
fn test_construction_and_value() {
    let idx = EmployeeIndex::new(5);
    assert_eq!(idx.value(), 5);
    assert_eq!(idx.get(), 5);
    assert_eq!(usize::from(idx), 5);
    assert_eq!(EmployeeIndex::default().value(), 0);
    assert!(EmployeeIndex::ZERO.is_zero());
}

#[test]
fn test_builtin_index_reports_get_form() {
    assert_eq!(EmployeeIndex::ACCESS, AccessForm::Get);
    assert_eq!(EmployeeIndex::from_raw(9).raw(), 9);
}

#[test]
fn test_tag_names() {
    assert_eq!(<EmployeeTag as DomainTag>::NAME, "Employee");
    assert_eq!(<DepartmentTag as DomainTag>::NAME, "Department");
    assert_eq!(format!("{:?}", DepartmentIndex::new(4)), "Department(4)");
}

// =============================================================================
// Comparison
// =============================================================================

#[test]
fn test_comparisons() {
    let a = EmployeeIndex::new(5);
    let b = EmployeeIndex::new(5);
    let c = EmployeeIndex::new(10);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
    assert!(c > a);
    assert!(a <= b);
    assert!(a <= c);
    assert_eq!(a.max(c), c);
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn test_increment_decrement() {
    let mut idx = EmployeeIndex::new(5);
    assert_eq!(idx.increment().value(), 6);
    assert_eq!(idx.post_increment().value(), 6);
    assert_eq!(idx.value(), 7);
    assert_eq!(idx.decrement().value(), 6);
    assert_eq!(idx.post_decrement().value(), 6);
    assert_eq!(idx.value(), 5);
    assert_eq!(idx.next().value(), 6);
    assert_eq!(idx.prev().value(), 4);
}

#[test]
fn test_offset_arithmetic() {
    let base = EmployeeIndex::new(10);
    assert_eq!((base + 5).value(), 15);
    assert_eq!((base - 3).value(), 7);

    let mut idx = base;
    idx += 5;
    assert_eq!(idx.value(), 15);
    idx -= 3;
    assert_eq!(idx.value(), 12);
}

#[test]
fn test_difference_between_indices() {
    let a = EmployeeIndex::new(10);
    let b = EmployeeIndex::new(5);
    assert_eq!(a - b, 5);
    assert_eq!(b - a, -5);
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn test_hash_matches_raw_position() {
    assert_eq!(hash_of(EmployeeIndex::new(42)), hash_of(42usize));
}

#[test]
fn test_usable_as_set_key() {
    let set: HashSet<EmployeeIndex> = [1, 2, 2, 3].into_iter().map(EmployeeIndex::new).collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&EmployeeIndex::new(2)));
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_same_size_as_usize() {
    assert_eq!(size_of::<EmployeeIndex>(), size_of::<usize>());
    assert_eq!(size_of::<Option<StrongIndex<DepartmentTag>>>(), size_of::<Option<usize>>());
}

// Distinct domains are distinct types; a function accepting one refuses the other.
fn takes_employee(idx: EmployeeIndex) -> usize {
    idx.value()
}

#[test]
fn test_domains_are_separate_types() {
    assert_eq!(takes_employee(EmployeeIndex::new(3)), 3);
    assert_ne!(
        std::any::TypeId::of::<EmployeeIndex>(),
        std::any::TypeId::of::<DepartmentIndex>()
    );
}
