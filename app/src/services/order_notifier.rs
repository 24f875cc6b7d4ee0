// app/src/services/order_notifier.rs

//! Forwards freshly-created orders to the external order processor.
//!
//! The transport shape is a flat, write-once projection of an `Order`: the
//! shipping address, a computed final price, and one `{count, itemId, name}`
//! entry per line. It lives for the duration of a single call and is never
//! persisted.

use crate::errors::{AppError, Result as AppResult};
use crate::models::Order;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
  pub shipping_address: ShippingAddress,
  #[serde(with = "rust_decimal::serde::float")]
  pub final_price: Decimal,
  pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
  pub street: String,
  pub city: String,
  pub state: String,
  pub country: String,
  pub zip_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
  pub count: i32,
  pub item_id: Uuid,
  pub name: String,
}

impl OrderDetails {
  pub fn from_order(order: &Order) -> Self {
    let final_price: Decimal = order.items.iter().map(|item| item.line_total()).sum();
    OrderDetails {
      shipping_address: ShippingAddress {
        street: order.ship_to_address.street.clone(),
        city: order.ship_to_address.city.clone(),
        state: order.ship_to_address.state.clone(),
        country: order.ship_to_address.country.clone(),
        zip_code: order.ship_to_address.zip_code.clone(),
      },
      final_price,
      items: order
        .items
        .iter()
        .map(|item| Item {
          count: item.units,
          item_id: item.item_ordered.catalog_item_id,
          name: item.item_ordered.product_name.clone(),
        })
        .collect(),
    }
  }
}

pub struct OrderNotifier {
  http: reqwest::Client,
  processor_url: String,
}

impl OrderNotifier {
  pub fn new(http: reqwest::Client, processor_url: String) -> Self {
    OrderNotifier { http, processor_url }
  }

  /// Sends the order details in a single POST. No retry, no backoff, no
  /// timeout override; any non-2xx response or transport failure is fatal
  /// to the overall operation.
  #[instrument(name = "order_notifier::notify", skip(self, order), fields(order_id = %order.id))]
  pub async fn notify(&self, order: &Order) -> AppResult<()> {
    if self.processor_url.is_empty() {
      return Err(AppError::Config(
        "No order processor url was present in configuration.".to_string(),
      ));
    }

    let details = OrderDetails::from_order(order);
    let response = self
      .http
      .post(&self.processor_url)
      .json(&details)
      .send()
      .await
      .map_err(|e| AppError::Unexpected(format!("Sending order details to processor failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      return Err(AppError::Unexpected(format!(
        "Order processor responded with status {}",
        status
      )));
    }

    info!(order_id = %order.id, %status, "Order details accepted by processor");
    Ok(())
  }
}
