#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use inventory_tracker::{
    config::AppConfig,
    db::{self, DbPool},
    services::InventoryService,
};

/// Helper harness for an inventory store backed by SQLite.
pub struct TestInventory {
    pub service: InventoryService,
    pool: Arc<DbPool>,
}

impl TestInventory {
    /// Fresh in-memory store with the product table already created.
    pub async fn in_memory() -> Self {
        Self::open(AppConfig::new("sqlite::memory:", "test")).await
    }

    /// In-memory store whose product table was never created, so every
    /// operation fails at the storage layer.
    pub async fn without_schema() -> Self {
        let mut cfg = AppConfig::new("sqlite::memory:", "test");
        cfg.auto_migrate = false;
        Self::open(cfg).await
    }

    /// Store backed by a database file inside `dir`, created on first use.
    pub async fn on_disk(dir: &Path) -> Self {
        let url = format!("sqlite://{}?mode=rwc", dir.join("inventory.db").display());
        Self::open(AppConfig::new(url, "test")).await
    }

    async fn open(cfg: AppConfig) -> Self {
        let pool = Arc::new(db::open(&cfg).await.expect("failed to open test database"));
        Self {
            service: InventoryService::new(pool.clone()),
            pool,
        }
    }

    /// Drops the service and closes the pool, as the binary does on exit.
    pub async fn close(self) {
        let Self { service, pool } = self;
        drop(service);
        let pool = Arc::try_unwrap(pool).expect("pool should not be shared at close");
        db::close_pool(pool).await.expect("failed to close pool");
    }
}
