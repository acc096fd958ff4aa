pub mod error;
pub mod models;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shelf_kernel::{InitCtx, Module};

pub use error::CatalogError;
pub use models::{Book, Price, Purchaser};
pub use service::Catalog;

/// Shared, lock-guarded catalog for hosts that call in from several tasks.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// Catalog module: owns the book catalog for the lifetime of the host.
pub struct CatalogModule {
    catalog: SharedCatalog,
}

impl CatalogModule {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog::new())),
        }
    }

    /// Handle to the catalog this module manages.
    pub fn handle(&self) -> SharedCatalog {
        Arc::clone(&self.catalog)
    }
}

impl Default for CatalogModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let seeded = Catalog::with_settings(&ctx.settings.catalog);
        let books = seeded.len();
        *self.catalog.write() = seeded;

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books,
            case_insensitive_search = ctx.settings.catalog.case_insensitive_search,
            "catalog module initialized"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            books = self.catalog.read().len(),
            "catalog module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the catalog module
pub fn create_module() -> Arc<CatalogModule> {
    Arc::new(CatalogModule::new())
}
