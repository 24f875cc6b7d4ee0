// app/src/models/catalog_item.rs

use serde::{Deserialize, Serialize};
use shopcore::Entity;
use uuid::Uuid;

/// A sellable product record. Treated as an immutable snapshot at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
  pub id: Uuid,
  pub name: String,
  /// May carry the catalog base-url placeholder; composed into a real URI
  /// when an order snapshot is taken.
  pub picture_uri: String,
}

impl Entity for CatalogItem {
  type Id = Uuid;

  fn id(&self) -> Uuid {
    self.id
  }
}
