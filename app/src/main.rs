// app/src/main.rs

// Declare modules for the application
mod config;
mod db;
mod errors;
mod events;
mod models;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::events::{OrderConfirmationEmailer, OrderEventBus};
use crate::models::{Basket, BasketItem, CatalogItem, Order};
use crate::services::{OrderNotifier, OrderService, UriComposer};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use rust_decimal::Decimal;
use shopcore::{MemoryStore, Store};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use uuid::Uuid;

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting ordering application server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Pick store backends: Postgres when DATABASE_URL is set, seeded in-memory
  // stores otherwise.
  let (basket_store, item_store, order_store): (
    Arc<dyn Store<Basket>>,
    Arc<dyn Store<CatalogItem>>,
    Arc<dyn Store<Order>>,
  ) = match &app_config.database_url {
    Some(database_url) => {
      let db_pool = match PgPool::connect(database_url).await {
        Ok(pool) => {
          tracing::info!("Successfully connected to the database.");
          pool
        }
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          panic!("Database connection error: {}", e);
        }
      };
      (
        Arc::new(db::PgBasketStore::new(db_pool.clone())) as Arc<dyn Store<Basket>>,
        Arc::new(db::PgCatalogItemStore::new(db_pool.clone())) as Arc<dyn Store<CatalogItem>>,
        Arc::new(db::PgOrderStore::new(db_pool)) as Arc<dyn Store<Order>>,
      )
    }
    None => {
      tracing::info!("No DATABASE_URL configured; running on in-memory stores.");
      let baskets = Arc::new(MemoryStore::<Basket>::new());
      let items = Arc::new(MemoryStore::<CatalogItem>::new());
      if app_config.seed_demo_data {
        seed_demo_data(&baskets, &items);
      }
      (
        baskets as Arc<dyn Store<Basket>>,
        items as Arc<dyn Store<CatalogItem>>,
        Arc::new(MemoryStore::<Order>::new()) as Arc<dyn Store<Order>>,
      )
    }
  };

  // Event bus with the demo order-created subscriber
  let events = Arc::new(OrderEventBus::new());
  events.subscribe(Arc::new(OrderConfirmationEmailer {
    sender: app_config.mock_email_sender.clone(),
  }));

  let order_service = Arc::new(OrderService::new(
    basket_store,
    item_store,
    order_store.clone(),
    UriComposer::new(app_config.catalog_base_url.clone()),
    OrderNotifier::new(reqwest::Client::new(), app_config.order_processor_url.clone()),
    events,
  ));

  // Create AppState
  let app_state = AppState {
    order_service,
    order_store,
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::routes::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

/// Seeds a small demo catalog and one ready-to-checkout basket so the flow
/// can be exercised against the in-memory stores.
fn seed_demo_data(baskets: &MemoryStore<Basket>, items: &MemoryStore<CatalogItem>) {
  let mug = CatalogItem {
    id: Uuid::new_v4(),
    name: ".NET Black & White Mug".to_string(),
    picture_uri: "http://catalogbaseurltobereplaced/2.png".to_string(),
  };
  let shirt = CatalogItem {
    id: Uuid::new_v4(),
    name: "Prism White T-Shirt".to_string(),
    picture_uri: "http://catalogbaseurltobereplaced/3.png".to_string(),
  };
  let basket = Basket {
    id: Uuid::new_v4(),
    buyer_id: "demouser@example.com".to_string(),
    items: vec![
      BasketItem {
        catalog_item_id: mug.id,
        unit_price: Decimal::new(850, 2), // 8.50
        quantity: 1,
      },
      BasketItem {
        catalog_item_id: shirt.id,
        unit_price: Decimal::new(1200, 2), // 12.00
        quantity: 2,
      },
    ],
  };
  tracing::info!(basket_id = %basket.id, "Seeded demo catalog and basket");
  items.insert(mug);
  items.insert(shirt);
  baskets.insert(basket);
}
