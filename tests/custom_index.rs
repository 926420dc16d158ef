//! Index types defined outside the crate, in each accessor style.

use dense_index::prelude::*;
use pretty_assertions::assert_eq;

// =============================================================================
// Accessor Styles
// =============================================================================

/// Converts into `usize` and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(into)]
struct ConvertingIndex(usize);

impl From<usize> for ConvertingIndex {
    fn from(raw: usize) -> Self {
        ConvertingIndex(raw)
    }
}

impl From<ConvertingIndex> for usize {
    fn from(idx: ConvertingIndex) -> usize {
        idx.0
    }
}

/// Exposes `get()`.
#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(get)]
struct NamedIndex {
    raw: usize,
}

impl NamedIndex {
    fn get(&self) -> usize {
        self.raw
    }
}

impl From<usize> for NamedIndex {
    fn from(raw: usize) -> Self {
        NamedIndex { raw }
    }
}

/// Exposes `value()` returning a narrower integer.
#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(value)]
struct CompactIndex(u32);

impl CompactIndex {
    fn value(&self) -> u32 {
        self.0
    }
}

impl From<usize> for CompactIndex {
    fn from(raw: usize) -> Self {
        CompactIndex(raw as u32)
    }
}

/// Offers every form; `get` wins.
#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(into, value, get)]
struct FlexibleIndex(usize);

impl FlexibleIndex {
    fn get(&self) -> usize {
        self.0
    }

    #[allow(dead_code)]
    fn value(&self) -> usize {
        self.0 + 1000
    }
}

impl From<usize> for FlexibleIndex {
    fn from(raw: usize) -> Self {
        FlexibleIndex(raw)
    }
}

impl From<FlexibleIndex> for usize {
    fn from(idx: FlexibleIndex) -> usize {
        idx.0 + 2000
    }
}

/// Value and conversion; `value` wins.
#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(into, value)]
struct ValueFirstIndex(usize);

impl ValueFirstIndex {
    fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for ValueFirstIndex {
    fn from(raw: usize) -> Self {
        ValueFirstIndex(raw)
    }
}

impl From<ValueFirstIndex> for usize {
    fn from(idx: ValueFirstIndex) -> usize {
        idx.0 + 2000
    }
}

// =============================================================================
// Third-party Style Types
// =============================================================================

/// A strong id whose constructor is a named function, not `From`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, DomainIndex)]
#[domain_index(get, construct = UserId::from_position)]
struct UserId(u64);

impl UserId {
    fn from_position(raw: usize) -> Self {
        UserId(raw as u64)
    }

    fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, DomainIndex)]
#[domain_index(value, construct = SessionId::new)]
struct SessionId(u16);

impl SessionId {
    fn new(raw: usize) -> Self {
        SessionId(raw as u16)
    }

    fn value(&self) -> u16 {
        self.0
    }
}

// =============================================================================
// Priority
// =============================================================================

#[test]
fn test_selected_forms() {
    assert_eq!(ConvertingIndex::ACCESS, AccessForm::Conversion);
    assert_eq!(NamedIndex::ACCESS, AccessForm::Get);
    assert_eq!(CompactIndex::ACCESS, AccessForm::Value);
    assert_eq!(FlexibleIndex::ACCESS, AccessForm::Get);
    assert_eq!(ValueFirstIndex::ACCESS, AccessForm::Value);
    assert_eq!(UserId::ACCESS, AccessForm::Get);
}

#[test]
fn test_priority_is_observable() {
    assert_eq!(FlexibleIndex(3).raw(), 3);
    assert_eq!(ValueFirstIndex(3).raw(), 3);
    assert_eq!(ConvertingIndex(3).raw(), 3);
    assert_eq!(CompactIndex(7).raw(), 7);
}

// =============================================================================
// Adapters over Custom Indices
// =============================================================================

#[test]
fn test_converting_style_adapter() {
    let mut names: DenseVec<&str, ConvertingIndex> = DenseVec::new();
    let idx = names.push("first");
    assert_eq!(idx, ConvertingIndex(0));
    assert_eq!(names[idx], "first");
}

#[test]
fn test_named_and_compact_styles() {
    let mut scores: DenseVec<i32, NamedIndex> = dense![10, 20];
    assert_eq!(scores[NamedIndex { raw: 1 }], 20);
    let third = scores.push(30);
    assert_eq!(third.get(), 2);

    let mut flags: DenseDeque<bool, CompactIndex> = DenseDeque::filled(3, false);
    flags[CompactIndex(2)] = true;
    assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    assert_eq!(flags.push(true), CompactIndex(3));
}

#[test]
fn test_flexible_style_uses_get() {
    let values: DenseVec<char, FlexibleIndex> = dense!['a', 'b', 'c'];
    assert_eq!(values[FlexibleIndex(2)], 'c');
    let it = values.iterator_at(FlexibleIndex(1));
    assert_eq!(values.index_of(&it), FlexibleIndex(1));
}

#[test]
fn test_third_party_ids() {
    let mut users: DenseVec<&str, UserId> = DenseVec::new();
    let ada = users.push("ada");
    let grace = users.push("grace");
    assert_eq!(grace, UserId(1));
    assert_eq!(users[ada], "ada");

    let mut sessions: DenseVec<UserId, SessionId> = DenseVec::new();
    let session = sessions.push(grace);
    assert_eq!(session, SessionId(0));
    assert_eq!(users[sessions[session]], "grace");
}

// =============================================================================
// Mixing Styles
// =============================================================================

define_index!(Room);

#[test]
fn test_built_in_and_custom_side_by_side() {
    let rooms: DenseVec<&str, RoomIndex> = dense!["lab", "office"];
    let owners: DenseVec<RoomIndex, UserId> = dense![RoomIndex::new(1), RoomIndex::new(0)];

    assert_eq!(rooms[owners[UserId(0)]], "office");
    assert_eq!(rooms[owners[UserId(1)]], "lab");
}
