#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Vec / VecDeque / Box<[T]> adapters in no_std
// - serde, smallvec, log: optional integrations

//! # dense-index
//!
//! Domain-tagged indices for positional containers.
//!
//! A program that keeps employees in one vector and departments in another
//! indexes both with plain `usize`, and nothing stops an employee position
//! from reaching into the department list. `dense-index` gives every domain
//! its own index type and wraps the container so only that type is accepted.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Indices                                                 |
//! |  - DomainTag, StrongIndex<Tag>                                    |
//! |  - DomainIndex: get() > value() > into usize                      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capabilities                                            |
//! |  - one trait per container operation (PushBack, Insert, ...)      |
//! |  - impls for Vec, VecDeque, [T; N], Box<[T]>, SmallVec            |
//! |  - Detect / CapabilitySet / supports! for concrete types          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Adapter                                                 |
//! |  - DenseIndexed<C, I>: each method gated on one capability        |
//! |  - DenseVec, DenseDeque, DenseArray, ...                          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! The adapter is `#[repr(transparent)]` over the container and every
//! method forwards inline, so domain typing costs nothing at runtime.
//!
//! ## Quick Start
//!
//! ```
//! use dense_index::prelude::*;
//!
//! define_index!(Employee, Department);
//!
//! let mut employees: DenseVec<&str, EmployeeIndex> = DenseVec::new();
//! let mut departments: DenseVec<&str, DepartmentIndex> = DenseVec::new();
//!
//! let alice = employees.push("Alice");
//! let sales = departments.push("Sales");
//!
//! assert_eq!(employees[alice], "Alice");
//! assert_eq!(departments[sales], "Sales");
//! ```
//!
//! Mixing them up does not compile:
//!
//! ```compile_fail
//! use dense_index::prelude::*;
//!
//! define_index!(Employee, Department);
//!
//! let mut employees: DenseVec<&str, EmployeeIndex> = DenseVec::new();
//! let sales = DepartmentIndex::new(0);
//! let _ = employees[sales];
//! ```
//!
//! Neither does asking a container for an operation it lacks:
//!
//! ```compile_fail
//! use dense_index::prelude::*;
//!
//! define_index!(Price);
//!
//! let prices: DenseArray<f64, 2, PriceIndex> = dense![1.0, 2.0];
//! let _ = prices.capacity();
//! ```
//!
//! Or wrapping something without positional access:
//!
//! ```compile_fail
//! use dense_index::prelude::*;
//! use std::collections::LinkedList;
//!
//! define_index!(Node);
//!
//! let _list: DenseIndexed<LinkedList<i32>, NodeIndex> = DenseIndexed::new();
//! ```
//!
//! Or using a primitive as a domain tag:
//!
//! ```compile_fail
//! use dense_index::prelude::*;
//!
//! let _v: DenseVec<i32, StrongIndex<i32>> = DenseVec::new();
//! ```

// Allow `::dense_index` to work inside the crate itself
extern crate self as dense_index;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for define_index!
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Indices
// =============================================================================
mod index;

// =============================================================================
// Layer 1: Capabilities
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Adapter
// =============================================================================
mod dense;

mod error;
mod trace;

// define_index!, dense!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use dense::*;
pub use error::{IndexError, Result};
pub use index::{AccessForm, DomainIndex, DomainTag, RawPosition, StrongIndex};

// Re-export proc-macros
pub use macros::{DomainIndex, DomainTag, supports};

/// Common items for declaring domains and wrapping containers.
pub mod prelude {
    pub use crate::caps::{CapabilitySet, Sequence};
    #[cfg(feature = "alloc")]
    pub use crate::{DenseBoxedSlice, DenseDeque, DenseVec};
    pub use crate::{
        AccessForm, DenseArray, DenseIndexed, DomainIndex, DomainTag, IndexError, IndexedIter,
        StrongIndex,
    };
    pub use crate::{capability_set, define_index, dense, supports};
}
