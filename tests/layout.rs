//! The adapter adds no size and no indirection.

use std::collections::VecDeque;

use dense_index::prelude::*;
use pretty_assertions::assert_eq;

define_index!(Sample);

#[test]
fn test_adapter_sizes_match_containers() {
    assert_eq!(size_of::<DenseVec<u32, SampleIndex>>(), size_of::<Vec<u32>>());
    assert_eq!(size_of::<DenseDeque<u32, SampleIndex>>(), size_of::<VecDeque<u32>>());
    assert_eq!(size_of::<DenseArray<u32, 7, SampleIndex>>(), size_of::<[u32; 7]>());
    assert_eq!(size_of::<DenseBoxedSlice<u32, SampleIndex>>(), size_of::<Box<[u32]>>());
    assert_eq!(align_of::<DenseArray<u8, 3, SampleIndex>>(), align_of::<[u8; 3]>());
}

#[test]
fn test_element_bytes_match_raw_container() {
    const N: u32 = 1000;
    let raw: Vec<u32> = (0..N).collect();
    let mut dense: DenseVec<u32, SampleIndex> = DenseVec::with_capacity(N as usize);
    for value in 0..N {
        dense.push(value);
    }

    assert_eq!(raw.len(), dense.len());
    assert_eq!(raw.as_slice(), dense.as_slice());
    assert_eq!(dense.as_ptr(), dense.underlying().as_ptr());
}
