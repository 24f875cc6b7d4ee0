// app/src/models/address.rs

use serde::{Deserialize, Serialize};

/// Shipping destination. Presence-checked only; no postal validation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub street: String,
  pub city: String,
  pub state: String,
  pub country: String,
  pub zip_code: String,
}
