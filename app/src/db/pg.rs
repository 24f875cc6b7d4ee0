// app/src/db/pg.rs

use crate::models::{Address, Basket, BasketItem, CatalogItem, Order, OrderItem};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shopcore::{Entity, Store, StoreError, StoreResult};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

fn backend(operation: &'static str, e: sqlx::Error) -> StoreError {
  StoreError::backend(operation, e)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
  matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Reorders fetched rows to follow the requested id order; `ANY($1)` gives
/// no ordering guarantee.
fn sort_by_requested<T: Entity>(ids: &[T::Id], mut rows: Vec<T>) -> Vec<T> {
  let mut out = Vec::with_capacity(rows.len());
  for id in ids {
    if let Some(pos) = rows.iter().position(|row| &row.id() == id) {
      out.push(rows.swap_remove(pos));
    }
  }
  out
}

// --- Baskets ---

pub struct PgBasketStore {
  pool: PgPool,
}

impl PgBasketStore {
  pub fn new(pool: PgPool) -> Self {
    PgBasketStore { pool }
  }
}

#[derive(FromRow)]
struct BasketRow {
  id: Uuid,
  buyer_id: String,
  items: Json<Vec<BasketItem>>,
}

impl From<BasketRow> for Basket {
  fn from(row: BasketRow) -> Self {
    Basket {
      id: row.id,
      buyer_id: row.buyer_id,
      items: row.items.0,
    }
  }
}

#[async_trait]
impl Store<Basket> for PgBasketStore {
  async fn find(&self, id: &Uuid) -> StoreResult<Option<Basket>> {
    let row = sqlx::query_as::<_, BasketRow>("SELECT id, buyer_id, items FROM baskets WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| backend("baskets.find", e))?;
    Ok(row.map(Basket::from))
  }

  async fn query(&self, ids: &[Uuid]) -> StoreResult<Vec<Basket>> {
    let rows = sqlx::query_as::<_, BasketRow>("SELECT id, buyer_id, items FROM baskets WHERE id = ANY($1)")
      .bind(ids)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| backend("baskets.query", e))?;
    Ok(sort_by_requested(ids, rows.into_iter().map(Basket::from).collect()))
  }

  async fn add(&self, basket: Basket) -> StoreResult<Basket> {
    sqlx::query("INSERT INTO baskets (id, buyer_id, items) VALUES ($1, $2, $3)")
      .bind(basket.id)
      .bind(&basket.buyer_id)
      .bind(Json(&basket.items))
      .execute(&self.pool)
      .await
      .map_err(|e| {
        if is_unique_violation(&e) {
          StoreError::Duplicate {
            id: basket.id.to_string(),
          }
        } else {
          backend("baskets.add", e)
        }
      })?;
    Ok(basket)
  }
}

// --- Catalog items ---

pub struct PgCatalogItemStore {
  pool: PgPool,
}

impl PgCatalogItemStore {
  pub fn new(pool: PgPool) -> Self {
    PgCatalogItemStore { pool }
  }
}

#[derive(FromRow)]
struct CatalogItemRow {
  id: Uuid,
  name: String,
  picture_uri: String,
}

impl From<CatalogItemRow> for CatalogItem {
  fn from(row: CatalogItemRow) -> Self {
    CatalogItem {
      id: row.id,
      name: row.name,
      picture_uri: row.picture_uri,
    }
  }
}

#[async_trait]
impl Store<CatalogItem> for PgCatalogItemStore {
  async fn find(&self, id: &Uuid) -> StoreResult<Option<CatalogItem>> {
    let row = sqlx::query_as::<_, CatalogItemRow>("SELECT id, name, picture_uri FROM catalog_items WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| backend("catalog_items.find", e))?;
    Ok(row.map(CatalogItem::from))
  }

  async fn query(&self, ids: &[Uuid]) -> StoreResult<Vec<CatalogItem>> {
    let rows =
      sqlx::query_as::<_, CatalogItemRow>("SELECT id, name, picture_uri FROM catalog_items WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("catalog_items.query", e))?;
    Ok(sort_by_requested(ids, rows.into_iter().map(CatalogItem::from).collect()))
  }

  async fn add(&self, item: CatalogItem) -> StoreResult<CatalogItem> {
    sqlx::query("INSERT INTO catalog_items (id, name, picture_uri) VALUES ($1, $2, $3)")
      .bind(item.id)
      .bind(&item.name)
      .bind(&item.picture_uri)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        if is_unique_violation(&e) {
          StoreError::Duplicate { id: item.id.to_string() }
        } else {
          backend("catalog_items.add", e)
        }
      })?;
    Ok(item)
  }
}

// --- Orders ---

pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    PgOrderStore { pool }
  }
}

#[derive(FromRow)]
struct OrderRow {
  id: Uuid,
  buyer_id: String,
  ship_to_address: Json<Address>,
  items: Json<Vec<OrderItem>>,
  created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
  fn from(row: OrderRow) -> Self {
    Order {
      id: row.id,
      buyer_id: row.buyer_id,
      ship_to_address: row.ship_to_address.0,
      items: row.items.0,
      created_at: row.created_at,
    }
  }
}

#[async_trait]
impl Store<Order> for PgOrderStore {
  async fn find(&self, id: &Uuid) -> StoreResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(
      "SELECT id, buyer_id, ship_to_address, items, created_at FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| backend("orders.find", e))?;
    Ok(row.map(Order::from))
  }

  async fn query(&self, ids: &[Uuid]) -> StoreResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, OrderRow>(
      "SELECT id, buyer_id, ship_to_address, items, created_at FROM orders WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(&self.pool)
    .await
    .map_err(|e| backend("orders.query", e))?;
    Ok(sort_by_requested(ids, rows.into_iter().map(Order::from).collect()))
  }

  async fn add(&self, order: Order) -> StoreResult<Order> {
    sqlx::query("INSERT INTO orders (id, buyer_id, ship_to_address, items, created_at) VALUES ($1, $2, $3, $4, $5)")
      .bind(order.id)
      .bind(&order.buyer_id)
      .bind(Json(&order.ship_to_address))
      .bind(Json(&order.items))
      .bind(order.created_at)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        if is_unique_violation(&e) {
          StoreError::Duplicate { id: order.id.to_string() }
        } else {
          backend("orders.add", e)
        }
      })?;
    Ok(order)
  }
}
