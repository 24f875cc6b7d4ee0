// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use shopcore::Entity;
use tracing::Level;

// --- Common Entity for Store/Bus Tests ---
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
  pub id: u32,
  pub label: String,
}

impl Widget {
  pub fn new(id: u32, label: &str) -> Self {
    Widget {
      id,
      label: label.to_string(),
    }
  }
}

impl Entity for Widget {
  type Id = u32;

  fn id(&self) -> u32 {
    self.id
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
