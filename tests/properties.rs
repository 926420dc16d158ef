//! Property tests for the adapter's positional guarantees.

use std::collections::VecDeque;

use dense_index::prelude::*;
use proptest::prelude::*;

define_index!(Cell);

type Cells = DenseVec<i64, CellIndex>;

proptest! {
    #[test]
    fn appends_return_sequential_indices(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut cells = Cells::new();
        for (expected, value) in values.iter().enumerate() {
            let idx = cells.push(*value);
            prop_assert_eq!(idx.value(), expected);
        }
        prop_assert_eq!(cells.len(), values.len());
    }

    #[test]
    fn iterator_position_round_trips(values in prop::collection::vec(any::<i64>(), 1..64), seed in any::<usize>()) {
        let cells: Cells = values.into_iter().collect();
        let idx = CellIndex::new(seed % cells.len());
        let it = cells.iterator_at(idx);
        prop_assert_eq!(cells.index_of(&it), idx);
    }

    #[test]
    fn indexing_matches_underlying(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let cells: Cells = values.iter().copied().collect();
        for idx in cells.indices() {
            prop_assert_eq!(cells[idx], cells.underlying()[idx.value()]);
        }
    }

    #[test]
    fn iteration_order_matches_container(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let cells: DenseDeque<i64, CellIndex> = values.iter().copied().collect();
        let raw: VecDeque<i64> = values.iter().copied().collect();
        prop_assert!(cells.iter().eq(raw.iter()));
        prop_assert!(cells.iter_rev().eq(raw.iter().rev()));
    }

    #[test]
    fn equality_follows_contents(values in prop::collection::vec(any::<i64>(), 1..64), seed in any::<usize>()) {
        let a: Cells = values.iter().copied().collect();
        let mut b = a.clone();
        prop_assert_eq!(&a, &b);

        let idx = CellIndex::new(seed % b.len());
        b[idx] = b[idx].wrapping_add(1);
        prop_assert_ne!(&a, &b);
    }

    #[test]
    fn swap_exchanges_contents_and_sizes(
        left in prop::collection::vec(any::<i64>(), 0..32),
        right in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        let mut a: Cells = left.iter().copied().collect();
        let mut b: Cells = right.iter().copied().collect();
        a.swap(&mut b);
        prop_assert_eq!(a.as_slice(), right.as_slice());
        prop_assert_eq!(b.as_slice(), left.as_slice());
    }

    #[test]
    fn erase_keeps_relative_order(values in prop::collection::vec(any::<i64>(), 1..64), seed in any::<usize>()) {
        let mut cells: Cells = values.iter().copied().collect();
        let raw = seed % values.len();
        let next = cells.erase(CellIndex::new(raw));

        let mut expected = values.clone();
        expected.remove(raw);
        prop_assert_eq!(next.value(), raw);
        prop_assert_eq!(cells.as_slice(), expected.as_slice());
    }
}
