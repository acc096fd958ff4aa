pub mod catalog;
pub mod directory;

use std::sync::Arc;

use shelf_kernel::ModuleRegistry;

/// Services wired into a registry by [`register_all`].
pub struct Services {
    pub catalog: catalog::SharedCatalog,
    pub directory: directory::SharedDirectory,
}

/// Register the catalog and directory modules and return handles to their services.
pub fn register_all(registry: &mut ModuleRegistry) -> Services {
    let catalog = catalog::create_module();
    let directory = directory::create_module();

    let services = Services {
        catalog: catalog.handle(),
        directory: directory.handle(),
    };

    registry.register_core(directory);
    registry.register_core(catalog);
    services
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::{Book, Price};
    use crate::modules::directory::User;
    use shelf_kernel::settings::Settings;
    use shelf_kernel::InitCtx;

    #[tokio::test]
    async fn registered_services_share_state_across_tasks() {
        let mut registry = ModuleRegistry::new();
        let services = register_all(&mut registry);
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };
        registry.boot(&ctx).await.unwrap();

        let windows = Book::new(
            "Windows",
            "Harley Jarvis",
            "Fiction",
            Price::from_cents(1000),
        );
        services.catalog.write().add_book(windows.clone()).unwrap();
        let user = services
            .directory
            .write()
            .register_user(User::new("user1", "password1", "user1@example.com"))
            .unwrap();

        let catalog = Arc::clone(&services.catalog);
        let buyer = user.clone();
        let book = windows.clone();
        tokio::spawn(async move {
            let purchased = catalog.read().purchase_book(&buyer, &book);
            purchased
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(user.snapshot().purchased_books(), &[windows]);
        assert_eq!(registry.core_module_count(), 2);
        registry.shutdown().await.unwrap();
    }
}
