use anyhow::Context;
use shelf_kernel::settings::Settings;
use shelf_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load shelf settings")?;
    shelf_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        seed_books = settings.catalog.seed.len(),
        "shelf-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    let services = shelf_app::register_all(&mut registry);
    let ctx = InitCtx {
        settings: &settings,
    };
    registry.boot(&ctx).await?;

    tracing::info!(
        books = services.catalog.read().len(),
        users = services.directory.read().len(),
        "shelf-app bootstrap complete"
    );

    tokio::signal::ctrl_c()
        .await
        .with_context(|| "failed to listen for shutdown signal")?;

    registry.shutdown().await
}
