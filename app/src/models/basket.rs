// app/src/models/basket.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopcore::Entity;
use uuid::Uuid;

/// A buyer's in-progress collection of intended purchases.
///
/// Read-only input to order creation; nothing in this application mutates a
/// basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
  pub id: Uuid,
  pub buyer_id: String,
  pub items: Vec<BasketItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketItem {
  pub catalog_item_id: Uuid,
  /// Unit price captured when the line was added to the basket.
  pub unit_price: Decimal,
  pub quantity: i32,
}

impl Basket {
  /// Distinct catalog item ids referenced by the basket lines, first-seen
  /// order preserved.
  pub fn distinct_catalog_item_ids(&self) -> Vec<Uuid> {
    let mut seen = Vec::new();
    for item in &self.items {
      if !seen.contains(&item.catalog_item_id) {
        seen.push(item.catalog_item_id);
      }
    }
    seen
  }
}

impl Entity for Basket {
  type Id = Uuid;

  fn id(&self) -> Uuid {
    self.id
  }
}
