//! Serialization is transparent: indices as integers, adapters as containers.
#![cfg(feature = "serde")]

use dense_index::prelude::*;
use pretty_assertions::assert_eq;

define_index!(Order);

#[test]
fn test_index_serializes_as_integer() {
    let json = serde_json::to_string(&OrderIndex::new(17)).unwrap();
    assert_eq!(json, "17");
    let back: OrderIndex = serde_json::from_str(&json).unwrap();
    assert_eq!(back, OrderIndex::new(17));
}

#[test]
fn test_adapter_serializes_as_container() {
    let orders: DenseVec<String, OrderIndex> = dense!["a".to_string(), "b".to_string()];
    let json = serde_json::to_string(&orders).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let back: DenseVec<String, OrderIndex> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, orders);
}

#[test]
fn test_indices_inside_payloads() {
    let links: DenseDeque<OrderIndex, OrderIndex> = dense![OrderIndex::new(1); 2];
    let json = serde_json::to_string(&links).unwrap();
    assert_eq!(json, "[1,1]");
}
