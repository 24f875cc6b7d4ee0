// app/src/models/mod.rs

//! Data structures for the ordering domain.

// Declare child modules for each model
pub mod address;
pub mod basket;
pub mod catalog_item;
pub mod order;
pub mod order_item;

// Re-export the model structs for convenient access
pub use address::Address;
pub use basket::{Basket, BasketItem};
pub use catalog_item::CatalogItem;
pub use order::Order;
pub use order_item::{ItemOrdered, OrderItem};
