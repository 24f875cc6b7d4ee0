// shopcore/src/store/memory.rs

use crate::error::{StoreError, StoreResult};
use crate::store::{Entity, Store};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// HashMap-backed `Store` implementation.
///
/// Used by tests and by database-less runs of the application. Lock scope is
/// a single map operation; guards are never held across an await point.
pub struct MemoryStore<T: Entity> {
  rows: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity> MemoryStore<T> {
  pub fn new() -> Self {
    MemoryStore {
      rows: RwLock::new(HashMap::new()),
    }
  }

  /// Synchronous insert for seeding. Overwrites silently, unlike `add`.
  pub fn insert(&self, item: T) {
    self.rows.write().insert(item.id(), item);
  }

  pub fn len(&self) -> usize {
    self.rows.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.read().is_empty()
  }
}

impl<T: Entity> Default for MemoryStore<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<T: Entity> Store<T> for MemoryStore<T> {
  async fn find(&self, id: &T::Id) -> StoreResult<Option<T>> {
    Ok(self.rows.read().get(id).cloned())
  }

  async fn query(&self, ids: &[T::Id]) -> StoreResult<Vec<T>> {
    let rows = self.rows.read();
    let found: Vec<T> = ids.iter().filter_map(|id| rows.get(id).cloned()).collect();
    debug!(requested = ids.len(), found = found.len(), "MemoryStore query");
    Ok(found)
  }

  async fn add(&self, item: T) -> StoreResult<T> {
    let id = item.id();
    let mut rows = self.rows.write();
    if rows.contains_key(&id) {
      return Err(StoreError::Duplicate {
        id: format!("{:?}", id),
      });
    }
    rows.insert(id, item.clone());
    Ok(item)
  }
}
