//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cartwheel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Full cart lifecycle against file-backed storage
//! - `catalog_feed` - Catalog loading wired into cart operations
//!
//! The shared [`fixtures`] module provides a sample catalog feed and
//! temp-directory helpers used across the test binaries.

pub mod fixtures {
    use std::path::PathBuf;

    /// A two-product feed in the wire shape the loader expects.
    pub const FEED: &str = r#"{
        "products": [
            {
                "id": 1,
                "name": "Enamel Mug",
                "description": "A 12oz camp mug.",
                "price": 10.00,
                "image": "images/mug.png"
            },
            {
                "id": 2,
                "name": "Wool Socks",
                "description": "Warm merino socks.",
                "price": 4.50,
                "image": "images/socks.png"
            }
        ]
    }"#;

    /// A unique temp directory path for one test's storage root.
    #[must_use]
    pub fn temp_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cartwheel-it-{label}-{}", uuid::Uuid::new_v4()))
    }

    /// Write the sample feed to a unique temp file and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the temp file cannot be written (test environment only).
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn feed_file(label: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cartwheel-it-feed-{label}-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, FEED).unwrap();
        path
    }
}
