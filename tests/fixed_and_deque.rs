//! Adapters over fixed-size storage and double-ended queues.

use std::collections::VecDeque;

use dense_index::prelude::*;
use pretty_assertions::assert_eq;

define_index!(Product, Task, Sensor);

// =============================================================================
// DenseArray
// =============================================================================

#[test]
fn test_array_read_write() {
    let mut prices: DenseArray<f64, 5, ProductIndex> = DenseArray::from_underlying([0.0; 5]);

    let first = ProductIndex::new(0);
    let second = ProductIndex::new(1);
    prices[first] = 19.99;
    prices[second] = 29.99;
    assert_eq!(prices[first], 19.99);
    assert_eq!(prices[second], 29.99);
    assert_eq!(prices.len(), 5);

    prices[ProductIndex::new(2)] = 39.99;
    prices[ProductIndex::new(3)] = 49.99;
    prices[ProductIndex::new(4)] = 59.99;

    let sum: f64 = prices.iter().sum();
    assert!((sum - 199.95).abs() < 0.001);

    assert_eq!(prices.as_slice()[0], 19.99);
    assert_eq!(prices.front(), Some(&19.99));
    assert_eq!(prices.back(), Some(&59.99));
}

#[test]
fn test_array_checked_access() {
    let readings: DenseArray<u16, 3, SensorIndex> = dense![4, 8, 15];
    assert_eq!(readings.at(SensorIndex::new(2)), Some(&15));
    assert_eq!(readings.at(SensorIndex::new(3)), None);
    assert!(readings.try_at(SensorIndex::new(3)).is_err());
    assert!(!readings.is_empty());
}

#[test]
fn test_array_position_round_trip() {
    let readings: DenseArray<u16, 4, SensorIndex> = dense![1, 2, 3, 4];
    for idx in readings.indices() {
        let it = readings.iterator_at(idx);
        assert_eq!(readings.index_of(&it), idx);
    }
}

#[test]
fn test_boxed_slice() {
    let mut readings: DenseBoxedSlice<u16, SensorIndex> =
        DenseBoxedSlice::from_underlying(vec![3, 1, 2].into_boxed_slice());
    readings.as_mut_slice().sort();
    assert_eq!(readings[SensorIndex::new(0)], 1);
    assert_eq!(readings.iter_rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
}

// =============================================================================
// DenseDeque
// =============================================================================

#[test]
fn test_deque_insert_and_erase() {
    let mut tasks: DenseDeque<i32, TaskIndex> = DenseDeque::new();

    let a = tasks.push(100);
    let b = tasks.push(200);
    let c = tasks.push(300);
    assert_eq!(tasks[a], 100);
    assert_eq!(tasks[b], 200);
    assert_eq!(tasks[c], 300);
    assert_eq!(tasks.len(), 3);

    let inserted = tasks.insert(TaskIndex::new(1), 150);
    assert_eq!(tasks[inserted], 150);
    assert_eq!(tasks.len(), 4);

    tasks.erase(TaskIndex::new(0));
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks.front(), Some(&150));
}

#[test]
fn test_deque_range_operations() {
    let mut tasks: DenseDeque<i32, TaskIndex> = (1..=3).collect();
    tasks.insert_many(TaskIndex::new(3), [4, 5, 6]);
    assert_eq!(tasks.underlying(), &VecDeque::from(vec![1, 2, 3, 4, 5, 6]));

    let after = tasks.erase_range(TaskIndex::new(0), TaskIndex::new(2));
    assert_eq!(tasks[after], 3);
    assert_eq!(tasks.pop(), Some(6));
    assert_eq!(tasks.back(), Some(&5));
}

#[test]
fn test_deque_empty_insert_many_at_end() {
    let mut tasks: DenseDeque<i32, TaskIndex> = (1..=2).collect();
    let at = tasks.insert_many(TaskIndex::new(2), Vec::new());
    assert_eq!(at, TaskIndex::new(2));
    assert_eq!(tasks.len(), 2);
}

#[test]
#[should_panic]
fn test_deque_empty_insert_many_past_end_panics() {
    let mut tasks: DenseDeque<i32, TaskIndex> = (1..=2).collect();
    tasks.insert_many(TaskIndex::new(5), Vec::new());
}

#[test]
fn test_deque_growth_methods() {
    let mut tasks: DenseDeque<i32, TaskIndex> = DenseDeque::filled(2, 7);
    tasks.reserve(32);
    assert!(tasks.capacity() >= 34);
    tasks.resize_with(4, || 1);
    assert_eq!(tasks.iter().copied().collect::<Vec<_>>(), [7, 7, 1, 1]);
    tasks.clear();
    assert!(tasks.is_empty());
}
