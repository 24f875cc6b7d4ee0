// app/src/models/order_item.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a catalog item taken at purchase time, decoupled from future
/// catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOrdered {
  pub catalog_item_id: Uuid,
  pub product_name: String,
  pub picture_uri: String,
}

/// One order line: the catalog snapshot plus the unit price and quantity
/// captured from the basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub item_ordered: ItemOrdered,
  pub unit_price: Decimal,
  pub units: i32,
}

impl OrderItem {
  pub fn new(item_ordered: ItemOrdered, unit_price: Decimal, units: i32) -> Self {
    OrderItem {
      item_ordered,
      unit_price,
      units,
    }
  }

  pub fn line_total(&self) -> Decimal {
    self.unit_price * Decimal::from(self.units)
  }
}
