//! CLI commands.

pub mod cart;
pub mod catalog;

use std::sync::Arc;

use cartwheel_storefront::{CartStore, CatalogClient, FileStorage, StorefrontConfig};

/// Shared handles for one CLI invocation: the cart store over file-backed
/// storage plus the catalog client, built from environment configuration.
pub struct Session {
    pub store: CartStore,
    pub catalog: CatalogClient,
}

impl Session {
    /// Build a session from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the storage
    /// directory cannot be created.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let config = StorefrontConfig::from_env()?;

        let storage = Arc::new(FileStorage::new(&config.storage_dir)?);
        let store = CartStore::new(storage, config.cart_key.clone());
        let catalog = CatalogClient::new(config.catalog_source.clone(), config.catalog_ttl);

        Ok(Self { store, catalog })
    }
}
