// app/src/state.rs
use crate::models::Order;
use crate::services::OrderService;
use shopcore::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub order_service: Arc<OrderService>,
  pub order_store: Arc<dyn Store<Order>>,
}
