pub mod error;
pub mod models;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shelf_kernel::{InitCtx, Module};

pub use error::DirectoryError;
pub use models::{User, UserHandle};
pub use service::Directory;

/// Shared, lock-guarded directory for hosts that call in from several tasks.
pub type SharedDirectory = Arc<RwLock<Directory>>;

/// Directory module: owns the user registry for the lifetime of the host.
pub struct DirectoryModule {
    directory: SharedDirectory,
}

impl DirectoryModule {
    pub fn new() -> Self {
        Self {
            directory: Arc::new(RwLock::new(Directory::new())),
        }
    }

    pub fn handle(&self) -> SharedDirectory {
        Arc::clone(&self.directory)
    }
}

impl Default for DirectoryModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for DirectoryModule {
    fn name(&self) -> &'static str {
        "directory"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "directory module initialized"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            users = self.directory.read().len(),
            "directory module stopped"
        );
        Ok(())
    }
}

pub fn create_module() -> Arc<DirectoryModule> {
    Arc::new(DirectoryModule::new())
}
