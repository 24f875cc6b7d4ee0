// shopcore/src/store/mod.rs

//! The generic persistence seam: `Entity` + `Store<T>`.
//!
//! A `Store<T>` is the only thing the application services know about
//! persistence. Any backing implementation (in-memory, relational, document)
//! may satisfy it; this module ships the in-memory one.

pub mod memory;

use crate::error::StoreResult;
use async_trait::async_trait;
use std::fmt::Debug;
use std::hash::Hash;

/// A storable record with a stable identifier.
pub trait Entity: Clone + Send + Sync + 'static {
  type Id: Clone + Eq + Hash + Debug + Send + Sync + 'static;

  fn id(&self) -> Self::Id;
}

/// Minimal async repository interface.
#[async_trait]
pub trait Store<T: Entity>: Send + Sync {
  /// Point lookup by identifier. `Ok(None)` when absent.
  async fn find(&self, id: &T::Id) -> StoreResult<Option<T>>;

  /// Batched lookup. The result follows the requested id order; ids with no
  /// matching record are simply absent from the result.
  async fn query(&self, ids: &[T::Id]) -> StoreResult<Vec<T>>;

  /// Durable insert. Returns the stored value; adding an id that already
  /// exists is an error.
  async fn add(&self, item: T) -> StoreResult<T>;
}
