// src/lib.rs

//! Shopcore: typed store and event-bus building blocks for the shop services.
//!
//! Shopcore deliberately stays small. It provides:
//!  - A generic, async `Store<T>` interface (`find` / `query` / `add`) that a
//!    backing implementation of any kind (in-memory, relational, document)
//!    may satisfy.
//!  - An in-memory `MemoryStore<T>` used for tests and database-less runs.
//!  - A typed publish/subscribe `EventBus<E>` with independently-registered
//!    handlers. Publishing awaits each handler's dispatch and nothing more.

pub mod error;
pub mod events;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{StoreError, StoreResult};
pub use crate::events::{EventBus, EventHandler};
pub use crate::store::memory::MemoryStore;
pub use crate::store::{Entity, Store};
