// app/src/db/mod.rs

//! Database-backed `Store` implementations. See `schema.sql` for the tables.

pub mod pg;

pub use pg::{PgBasketStore, PgCatalogItemStore, PgOrderStore};
