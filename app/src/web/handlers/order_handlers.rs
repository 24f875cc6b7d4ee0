// app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Address;
use crate::state::AppState;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestPayload {
  pub basket_id: Uuid,
  pub shipping_address: Address,
}

#[instrument(
    name = "handler::checkout",
    skip(app_state, payload),
    fields(basket_id = %payload.basket_id)
)]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CheckoutRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  info!("Checkout initiation for basket: {}", payload.basket_id);

  let order = app_state
    .order_service
    .create_order(payload.basket_id, payload.shipping_address)
    .await?;

  Ok(HttpResponse::Created().json(json!({
    "orderId": order.id,
    "buyerId": order.buyer_id,
    "total": order.total(),
  })))
}

#[instrument(name = "handler::get_order", skip(app_state))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  order_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order_id = order_id.into_inner();
  let order = app_state
    .order_store
    .find(&order_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} was not found.", order_id)))?;

  Ok(HttpResponse::Ok().json(order))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::events::OrderEventBus;
  use crate::models::{Basket, BasketItem, CatalogItem, Order};
  use crate::services::{OrderNotifier, OrderService, UriComposer};
  use actix_web::http::StatusCode;
  use actix_web::{test, App, HttpServer};
  use rust_decimal::Decimal;
  use shopcore::MemoryStore;
  use std::sync::Arc;

  struct TestApp {
    baskets: Arc<MemoryStore<Basket>>,
    items: Arc<MemoryStore<CatalogItem>>,
    orders: Arc<MemoryStore<Order>>,
    state: AppState,
  }

  fn test_app(processor_url: &str) -> TestApp {
    let baskets = Arc::new(MemoryStore::<Basket>::new());
    let items = Arc::new(MemoryStore::<CatalogItem>::new());
    let orders = Arc::new(MemoryStore::<Order>::new());

    let order_service = Arc::new(OrderService::new(
      baskets.clone(),
      items.clone(),
      orders.clone(),
      UriComposer::new("http://cdn.example.com".to_string()),
      OrderNotifier::new(reqwest::Client::new(), processor_url.to_string()),
      Arc::new(OrderEventBus::new()),
    ));

    let state = AppState {
      order_service,
      order_store: orders.clone(),
    };

    TestApp {
      baskets,
      items,
      orders,
      state,
    }
  }

  fn checkout_body(basket_id: Uuid) -> serde_json::Value {
    json!({
      "basketId": basket_id,
      "shippingAddress": {
        "street": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "country": "USA",
        "zipCode": "62704"
      }
    })
  }

  async fn spawn_ok_processor() -> String {
    let server = HttpServer::new(|| {
      App::new().default_service(web::route().to(|| async { HttpResponse::Ok().finish() }))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{}", addr)
  }

  #[actix_web::test]
  async fn checkout_returns_created_with_order_summary() {
    let processor_url = spawn_ok_processor().await;
    let fx = test_app(&processor_url);

    let item_id = Uuid::new_v4();
    fx.items.insert(CatalogItem {
      id: item_id,
      name: "apple".to_string(),
      picture_uri: "http://catalogbaseurltobereplaced/apple.png".to_string(),
    });
    let basket_id = Uuid::new_v4();
    fx.baskets.insert(Basket {
      id: basket_id,
      buyer_id: "buyer@example.com".to_string(),
      items: vec![BasketItem {
        catalog_item_id: item_id,
        unit_price: Decimal::from(10),
        quantity: 2,
      }],
    });

    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(fx.state.clone()))
        .configure(crate::web::routes::configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/v1/checkout")
      .set_json(checkout_body(basket_id))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["buyerId"], "buyer@example.com");
    assert!(body["orderId"].is_string());
    assert_eq!(fx.orders.len(), 1);
  }

  #[actix_web::test]
  async fn checkout_with_empty_basket_is_bad_request() {
    let fx = test_app("http://127.0.0.1:1/orders");
    let basket_id = Uuid::new_v4();
    fx.baskets.insert(Basket {
      id: basket_id,
      buyer_id: "buyer@example.com".to_string(),
      items: vec![],
    });

    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(fx.state.clone()))
        .configure(crate::web::routes::configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/v1/checkout")
      .set_json(checkout_body(basket_id))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(fx.orders.is_empty());
  }

  #[actix_web::test]
  async fn checkout_with_unknown_basket_is_not_found() {
    let fx = test_app("http://127.0.0.1:1/orders");

    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(fx.state.clone()))
        .configure(crate::web::routes::configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/v1/checkout")
      .set_json(checkout_body(Uuid::new_v4()))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn get_order_round_trips_a_persisted_order() {
    let fx = test_app("http://127.0.0.1:1/orders");
    let order = Order::new(
      "buyer@example.com".to_string(),
      Address {
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "USA".to_string(),
        zip_code: "62704".to_string(),
      },
      vec![crate::models::OrderItem::new(
        crate::models::ItemOrdered {
          catalog_item_id: Uuid::new_v4(),
          product_name: "apple".to_string(),
          picture_uri: "http://cdn.example.com/apple.png".to_string(),
        },
        Decimal::from(10),
        1,
      )],
    );
    let order_id = order.id;
    fx.orders.insert(order);

    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(fx.state.clone()))
        .configure(crate::web::routes::configure_app_routes),
    )
    .await;

    let req = test::TestRequest::get()
      .uri(&format!("/api/v1/orders/{}", order_id))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], order_id.to_string());
    assert_eq!(body["buyer_id"], "buyer@example.com");
  }

  #[actix_web::test]
  async fn get_unknown_order_is_not_found() {
    let fx = test_app("http://127.0.0.1:1/orders");

    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(fx.state.clone()))
        .configure(crate::web::routes::configure_app_routes),
    )
    .await;

    let req = test::TestRequest::get()
      .uri(&format!("/api/v1/orders/{}", Uuid::new_v4()))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
