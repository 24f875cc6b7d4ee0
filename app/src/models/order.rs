// app/src/models/order.rs

use crate::models::{Address, OrderItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopcore::Entity;
use uuid::Uuid;

/// A placed order. Created once, then persisted; line items are immutable
/// snapshots. Invariant: at least one item (empty baskets are rejected
/// before an `Order` is ever constructed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub buyer_id: String,
  pub ship_to_address: Address,
  pub items: Vec<OrderItem>,
  pub created_at: DateTime<Utc>,
}

impl Order {
  pub fn new(buyer_id: String, ship_to_address: Address, items: Vec<OrderItem>) -> Self {
    Order {
      id: Uuid::new_v4(),
      buyer_id,
      ship_to_address,
      items,
      created_at: Utc::now(),
    }
  }

  /// Sum of unit price × quantity across all order items, decimal-exact.
  pub fn total(&self) -> Decimal {
    self.items.iter().map(|item| item.line_total()).sum()
  }
}

impl Entity for Order {
  type Id = Uuid;

  fn id(&self) -> Uuid {
    self.id
  }
}
