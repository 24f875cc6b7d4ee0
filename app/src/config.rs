// app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Optional: when absent the app runs on seeded in-memory stores.
  pub database_url: Option<String>,

  /// Destination for order-details notifications. May be empty; the
  /// notifier surfaces that as a configuration error at notify time rather
  /// than silently defaulting to a reachable endpoint.
  pub order_processor_url: String,

  /// Base URL substituted into catalog picture URI templates.
  pub catalog_base_url: String,

  // Mock email config, used by the order-created subscriber
  pub mock_email_sender: String,

  // Optional: for seeding demo data on startup (in-memory runs)
  pub seed_demo_data: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL").ok();
    let order_processor_url = get_env("ORDER_PROCESSOR_URL").unwrap_or_default();
    let catalog_base_url =
      get_env("CATALOG_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}/images", server_host, server_port));
    let mock_email_sender = get_env("MOCK_EMAIL_SENDER").unwrap_or_else(|_| "noreply@example.com".to_string());

    let seed_demo_data = get_env("SEED_DEMO_DATA")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEMO_DATA value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      order_processor_url,
      catalog_base_url,
      mock_email_sender,
      seed_demo_data,
    })
  }
}
