// shopcore/src/events.rs

//! Typed publish/subscribe.
//!
//! An `EventBus<E>` carries one event type to zero or more
//! independently-registered handlers. `publish` awaits each handler's
//! dispatch in subscription order and returns; there is no acknowledgment
//! beyond that, and handlers are infallible from the bus's point of view.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait EventHandler<E>: Send + Sync {
  async fn handle(&self, event: &E);
}

pub struct EventBus<E: 'static> {
  handlers: RwLock<Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: Send + Sync + 'static> EventBus<E> {
  pub fn new() -> Self {
    EventBus {
      handlers: RwLock::new(Vec::new()),
    }
  }

  pub fn subscribe(&self, handler: Arc<dyn EventHandler<E>>) {
    self.handlers.write().push(handler);
  }

  pub fn subscriber_count(&self) -> usize {
    self.handlers.read().len()
  }

  pub async fn publish(&self, event: E) {
    // Snapshot under the lock, dispatch outside it.
    let handlers: Vec<Arc<dyn EventHandler<E>>> = self.handlers.read().iter().cloned().collect();
    debug!(subscribers = handlers.len(), "Publishing event");
    for handler in handlers {
      handler.handle(&event).await;
    }
  }
}

impl<E: Send + Sync + 'static> Default for EventBus<E> {
  fn default() -> Self {
    Self::new()
  }
}
