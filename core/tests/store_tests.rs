// tests/store_tests.rs
mod common; // Reference the common module

use common::*;
use shopcore::{MemoryStore, Store, StoreError};

#[tokio::test]
async fn test_find_returns_added_item() {
  setup_tracing();
  let store = MemoryStore::<Widget>::new();

  let added = store.add(Widget::new(1, "anvil")).await.unwrap();
  assert_eq!(added.label, "anvil");

  let found = store.find(&1).await.unwrap();
  assert_eq!(found, Some(Widget::new(1, "anvil")));
}

#[tokio::test]
async fn test_find_missing_id_is_none() {
  setup_tracing();
  let store = MemoryStore::<Widget>::new();
  assert_eq!(store.find(&42).await.unwrap(), None);
}

#[tokio::test]
async fn test_add_rejects_duplicate_id() {
  setup_tracing();
  let store = MemoryStore::<Widget>::new();
  store.add(Widget::new(7, "first")).await.unwrap();

  let result = store.add(Widget::new(7, "second")).await;
  assert!(matches!(result, Err(StoreError::Duplicate { .. })));

  // The original row is untouched.
  assert_eq!(store.find(&7).await.unwrap().unwrap().label, "first");
}

#[tokio::test]
async fn test_query_follows_requested_order_and_skips_unknown_ids() {
  setup_tracing();
  let store = MemoryStore::<Widget>::new();
  store.add(Widget::new(1, "a")).await.unwrap();
  store.add(Widget::new(2, "b")).await.unwrap();
  store.add(Widget::new(3, "c")).await.unwrap();

  let found = store.query(&[3, 99, 1]).await.unwrap();
  let labels: Vec<&str> = found.iter().map(|w| w.label.as_str()).collect();
  assert_eq!(labels, vec!["c", "a"]);
}

#[tokio::test]
async fn test_insert_seeds_without_duplicate_check() {
  setup_tracing();
  let store = MemoryStore::<Widget>::new();
  store.insert(Widget::new(5, "seeded"));
  store.insert(Widget::new(5, "reseeded"));

  assert_eq!(store.len(), 1);
  assert_eq!(store.find(&5).await.unwrap().unwrap().label, "reseeded");
}
