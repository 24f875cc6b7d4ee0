// app/src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Checkout Route
      .service(web::scope("/checkout").route(
        "",
        web::post().to(crate::web::handlers::order_handlers::checkout_handler),
      ))
      // Order Routes
      .service(web::scope("/orders").route(
        "/{order_id}",
        web::get().to(crate::web::handlers::order_handlers::get_order_handler),
      )),
  );
}
