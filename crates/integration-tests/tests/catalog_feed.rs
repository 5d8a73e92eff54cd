//! Catalog loading wired into cart operations.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use cartwheel_core::ProductId;
use cartwheel_integration_tests::fixtures;
use cartwheel_storefront::{CartStore, CatalogClient, CatalogSource, MemoryStorage};

#[tokio::test]
async fn test_feed_to_cart_add() {
    let feed = fixtures::feed_file("to-cart");
    let client = CatalogClient::new(CatalogSource::File(feed), Duration::from_secs(300));
    let store = CartStore::new(Arc::new(MemoryStorage::new()), "cart");

    let products = client.load().await.unwrap();
    let update = store.add(ProductId::new(2), &products).unwrap();

    assert_eq!(update.cart.items()[0].name, "Wool Socks");
    assert_eq!(update.totals.subtotal, dec!(4.50));
}

#[tokio::test]
async fn test_failed_load_leaves_cart_unchanged() {
    let feed = fixtures::feed_file("failed-load");
    let client = CatalogClient::new(CatalogSource::File(feed.clone()), Duration::from_secs(300));
    let store = CartStore::new(Arc::new(MemoryStorage::new()), "cart");

    let products = client.load().await.unwrap();
    store.add(ProductId::new(1), &products).unwrap();

    // A fresh session against a missing feed fails its load, and no cart
    // operation runs - exactly as when the renderer cannot resolve
    // products for an add.
    std::fs::remove_file(&feed).unwrap();
    let fresh = CatalogClient::new(CatalogSource::File(feed.clone()), Duration::from_secs(300));
    assert!(fresh.load().await.is_err());
    assert_eq!(store.state().len(), 1);

    // A restored feed makes adds available again
    std::fs::write(&feed, fixtures::FEED).unwrap();
    let products = fresh.load().await.unwrap();
    let update = store.add(ProductId::new(1), &products).unwrap();
    assert_eq!(update.cart.items()[0].quantity, 2);
}

#[tokio::test]
async fn test_cached_feed_serves_without_refetch() {
    let feed = fixtures::feed_file("cached");
    let client = CatalogClient::new(CatalogSource::File(feed.clone()), Duration::from_secs(300));

    let first = client.load().await.unwrap();
    std::fs::remove_file(&feed).unwrap();

    // Within the TTL the deleted file is never touched
    let second = client.load().await.unwrap();
    assert_eq!(first.len(), second.len());
}
