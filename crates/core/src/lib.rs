//! Cartwheel Core - Shared types library.
//!
//! This crate provides the common types used across all Cartwheel components:
//! - `storefront` - Cart store, storage backends, and catalog loader
//! - `cli` - Command-line storefront surface
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, products, cart state, and derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
