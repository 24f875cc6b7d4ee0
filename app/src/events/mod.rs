// app/src/events/mod.rs

//! Domain events published by the ordering flow.
//!
//! The flow only needs the publish half of the bus; subscribers are
//! registered independently at startup and the publisher does not await any
//! acknowledgment beyond dispatch.

use crate::models::Order;
use crate::services::email_mock;
use async_trait::async_trait;
use shopcore::{EventBus, EventHandler};
use tracing::{debug, warn};

/// Raised once per successfully created (and forwarded) order, carrying the
/// full order for any interested subscriber.
#[derive(Debug, Clone)]
pub struct OrderCreated {
  pub order: Order,
}

pub type OrderEventBus = EventBus<OrderCreated>;

/// Demo subscriber: sends the buyer a mock confirmation email. Failures are
/// logged and swallowed; a subscriber must not fail the ordering flow.
pub struct OrderConfirmationEmailer {
  pub sender: String,
}

#[async_trait]
impl EventHandler<OrderCreated> for OrderConfirmationEmailer {
  async fn handle(&self, event: &OrderCreated) {
    let order = &event.order;
    match email_mock::send_order_confirmation(&order.buyer_id, &self.sender, order).await {
      Ok(info) => {
        debug!(
          order_id = %order.id,
          to = %info.to,
          subject = %info.subject,
          message_id = %info.message_id,
          "Order confirmation email dispatched"
        );
      }
      Err(e) => warn!(order_id = %order.id, error = %e, "Order confirmation email failed"),
    }
  }
}
