// app/src/services/email_mock.rs
use crate::errors::Result as AppResult; // Using AppResult
use crate::models::Order;
use tracing::info;

#[derive(Debug)]
pub struct SentEmailInfo {
  pub to: String,
  pub subject: String,
  pub message_id: String,
}

/// Simulates sending the order confirmation email. Stands in for a real
/// provider integration; only used by the order-created subscriber.
pub async fn send_order_confirmation(to: &str, from: &str, order: &Order) -> AppResult<SentEmailInfo> {
  let subject = format!("Your order {} is confirmed", order.id);
  info!(
    "Simulating sending email: To='{}', From='{}', Subject='{}' ({} item lines, total {})",
    to,
    from,
    subject,
    order.items.len(),
    order.total()
  );
  tokio::time::sleep(std::time::Duration::from_millis(20)).await; // Simulate network latency

  let message_id = format!("mock_email_{}", uuid::Uuid::new_v4());
  info!("Mock email sent successfully. Message ID: {}", message_id);

  Ok(SentEmailInfo {
    to: to.to_string(),
    subject,
    message_id,
  })
}
