// app/src/services/order_service.rs

//! The order builder: turns a basket plus a shipping address into a
//! persisted order, forwards it to the order processor, and publishes the
//! order-created event.

use crate::errors::{AppError, Result as AppResult};
use crate::events::{OrderCreated, OrderEventBus};
use crate::models::{Address, Basket, CatalogItem, ItemOrdered, Order, OrderItem};
use crate::services::{OrderNotifier, UriComposer};
use shopcore::Store;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct OrderService {
  basket_store: Arc<dyn Store<Basket>>,
  item_store: Arc<dyn Store<CatalogItem>>,
  order_store: Arc<dyn Store<Order>>,
  uri_composer: UriComposer,
  notifier: OrderNotifier,
  events: Arc<OrderEventBus>,
}

impl OrderService {
  pub fn new(
    basket_store: Arc<dyn Store<Basket>>,
    item_store: Arc<dyn Store<CatalogItem>>,
    order_store: Arc<dyn Store<Order>>,
    uri_composer: UriComposer,
    notifier: OrderNotifier,
    events: Arc<OrderEventBus>,
  ) -> Self {
    OrderService {
      basket_store,
      item_store,
      order_store,
      uri_composer,
      notifier,
      events,
    }
  }

  /// Creates an order from the basket identified by `basket_id`.
  ///
  /// Every step (load basket, resolve catalog items, build order, persist,
  /// notify the processor, publish the event) is awaited to completion
  /// before the next begins. There is no rollback: once the order is
  /// persisted, a failed notification leaves it persisted and surfaces the
  /// failure to the caller.
  #[instrument(name = "order_service::create_order", skip(self, shipping_address), fields(basket_id = %basket_id))]
  pub async fn create_order(&self, basket_id: Uuid, shipping_address: Address) -> AppResult<Order> {
    let basket = self
      .basket_store
      .find(&basket_id)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("Basket {} was not found.", basket_id)))?;

    if basket.items.is_empty() {
      return Err(AppError::InvalidOperation(format!(
        "Basket {} has no items on checkout.",
        basket_id
      )));
    }

    // One batched lookup for every distinct catalog item the basket references.
    let catalog_ids = basket.distinct_catalog_item_ids();
    let catalog_items = self.item_store.query(&catalog_ids).await?;

    let items = basket
      .items
      .iter()
      .map(|basket_item| {
        let catalog_item = catalog_items
          .iter()
          .find(|c| c.id == basket_item.catalog_item_id)
          .ok_or_else(|| {
            AppError::NotFound(format!(
              "Catalog item {} referenced by basket {} was not found.",
              basket_item.catalog_item_id, basket_id
            ))
          })?;
        let item_ordered = ItemOrdered {
          catalog_item_id: catalog_item.id,
          product_name: catalog_item.name.clone(),
          picture_uri: self.uri_composer.compose_pic_uri(&catalog_item.picture_uri),
        };
        Ok(OrderItem::new(item_ordered, basket_item.unit_price, basket_item.quantity))
      })
      .collect::<AppResult<Vec<OrderItem>>>()?;

    let order = self.order_store.add(Order::new(basket.buyer_id.clone(), shipping_address, items)).await?;
    info!(order_id = %order.id, lines = order.items.len(), "Order persisted");

    self.notifier.notify(&order).await?;

    self.events.publish(OrderCreated { order: order.clone() }).await;
    info!(order_id = %order.id, "Order created event published");

    Ok(order)
  }
}
