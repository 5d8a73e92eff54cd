//! Cartwheel Storefront library.
//!
//! This crate provides the storefront engine as a library: the cart store
//! and its persistence contract, the storage backends, the catalog loader,
//! and the display types the renderer draws from.
//!
//! # Architecture
//!
//! The cart store is the sole mutator of cart state. Every mutation is a
//! read-modify-write against a single storage slot, and every mutation
//! returns the new state together with freshly computed totals so the
//! renderer can redraw without touching the catalog again. The catalog is
//! only consulted for the id-to-product lookup when adding an item.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod storage;
pub mod view;

pub use cart::{CartError, CartStore, CartUpdate, Receipt};
pub use catalog::{CatalogClient, CatalogError, CatalogSource};
pub use config::{ConfigError, StorefrontConfig};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
