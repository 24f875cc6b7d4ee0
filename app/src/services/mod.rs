// app/src/services/mod.rs

//! Application services: the order builder, the order notifier, and their
//! small collaborators.

pub mod email_mock;
pub mod order_notifier;
pub mod order_service;
pub mod uri_composer;

pub use order_notifier::OrderNotifier;
pub use order_service::OrderService;
pub use uri_composer::UriComposer;
