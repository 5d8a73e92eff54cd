//! Core types for Cartwheel.
//!
//! This module provides type-safe wrappers for the storefront domain.

pub mod cart;
pub mod id;
pub mod money;
pub mod product;

pub use cart::{CartState, LineItem, TAX_RATE, Totals, compute_totals};
pub use id::*;
pub use money::format_usd;
pub use product::Product;
