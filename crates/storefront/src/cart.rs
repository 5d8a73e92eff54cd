//! The cart store: sole mutator and persister of cart state.
//!
//! Persistence contract: the whole cart lives in one string-keyed storage
//! slot as serialized JSON. Reads of a missing or corrupt slot yield an
//! empty cart and never surface an error to the caller; writes always
//! overwrite the entire slot. Reads are read-through - there is no
//! in-memory copy independent of storage, so an external write to the slot
//! is observable on the next call.
//!
//! Every mutation completes its read-modify-write before returning, which
//! serializes rapid triggers in issuing order, and returns the new state
//! with freshly computed totals so the renderer can redraw without
//! consulting the catalog.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use cartwheel_core::{CartState, Product, ProductId, Totals, compute_totals};

use crate::storage::{StorageBackend, StorageError};

/// Errors from cart store operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected a write or removal.
    #[error("cart persistence failed: {0}")]
    Storage(#[from] StorageError),

    /// The cart state could not be serialized for persistence.
    #[error("cart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Quantity input at the renderer boundary was not a non-negative
    /// integer.
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

/// The new cart state plus derived totals, returned by every mutation.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    /// The cart after the mutation.
    pub cart: CartState,
    /// Totals recomputed from that state.
    pub totals: Totals,
}

impl CartUpdate {
    fn of(cart: CartState) -> Self {
        let totals = compute_totals(&cart);
        Self { cart, totals }
    }
}

/// Confirmation of a checkout: the totals that were charged (nominally)
/// and the number of units in the order.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Totals at the moment of checkout.
    pub totals: Totals,
    /// Units across all line items at checkout.
    pub unit_count: u32,
}

/// Owns the persisted cart slot.
///
/// Constructed once per session with an injected storage handle and passed
/// by reference to the renderer; nothing else touches the slot.
pub struct CartStore {
    storage: Arc<dyn StorageBackend>,
    key: String,
}

impl CartStore {
    /// Create a cart store over `storage`, using `key` as the slot key.
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The live cart state, re-read from storage.
    ///
    /// A missing slot, an unreadable backend, or a corrupt payload all
    /// yield an empty cart; corruption is logged but never surfaced.
    #[must_use]
    pub fn state(&self) -> CartState {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CartState::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart slot unreadable, treating as empty");
                return CartState::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "cart slot corrupt, treating as empty");
            CartState::new()
        })
    }

    /// Add one unit of `product_id` to the cart.
    ///
    /// The product is looked up in the caller-supplied catalog; an unknown
    /// id is a silent no-op so a malformed entry can never reach the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated cart cannot be persisted.
    #[instrument(skip(self, catalog))]
    pub fn add(&self, product_id: ProductId, catalog: &[Product]) -> Result<CartUpdate, CartError> {
        let Some(product) = catalog.iter().find(|p| p.id == product_id) else {
            debug!(%product_id, "product not in catalog, ignoring add");
            return Ok(CartUpdate::of(self.state()));
        };

        let mut cart = self.state();
        cart.add(product);
        self.persist(&cart)?;
        Ok(CartUpdate::of(cart))
    }

    /// Remove the line item for `product_id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&self, product_id: ProductId) -> Result<CartUpdate, CartError> {
        let mut cart = self.state();
        if cart.remove(product_id) {
            self.persist(&cart)?;
        }
        Ok(CartUpdate::of(cart))
    }

    /// Set the quantity of the line item for `product_id`.
    ///
    /// Zero behaves exactly like [`Self::remove`]; unknown ids are a
    /// no-op. Quantity is typed, so unvalidated text input never reaches
    /// this method - see [`crate::view::parse_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the updated cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn set_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartUpdate, CartError> {
        let mut cart = self.state();
        if cart.set_quantity(product_id, quantity) {
            self.persist(&cart)?;
        }
        Ok(CartUpdate::of(cart))
    }

    /// Empty the cart and remove the persisted slot entirely.
    ///
    /// A removed slot and a persisted empty sequence both read back as an
    /// empty cart; clearing prefers removal so an abandoned session leaves
    /// nothing behind.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the slot cannot be removed.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<CartUpdate, CartError> {
        self.storage.remove(&self.key)?;
        Ok(CartUpdate::of(CartState::new()))
    }

    /// Check out: capture the current totals, clear the cart, and return a
    /// receipt for the confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the slot cannot be removed.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> Result<Receipt, CartError> {
        let cart = self.state();
        let receipt = Receipt {
            totals: compute_totals(&cart),
            unit_count: cart.unit_count(),
        };
        self.storage.remove(&self.key)?;
        Ok(receipt)
    }

    fn persist(&self, cart: &CartState) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart)?;
        self.storage.write(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use cartwheel_core::ProductId;

    use super::*;
    use crate::storage::MemoryStorage;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::new(1),
                name: "Enamel Mug".to_string(),
                description: "A 12oz camp mug.".to_string(),
                price: dec!(10.00),
                image: "images/mug.png".to_string(),
            },
            Product {
                id: ProductId::new(2),
                name: "Wool Socks".to_string(),
                description: "Warm.".to_string(),
                price: dec!(4.50),
                image: "images/socks.png".to_string(),
            },
        ]
    }

    fn store() -> (CartStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (CartStore::new(storage.clone(), "cart"), storage)
    }

    #[test]
    fn test_add_twice_single_line_with_expected_totals() {
        let (store, _) = store();
        let catalog = catalog();

        store.add(ProductId::new(1), &catalog).unwrap();
        let update = store.add(ProductId::new(1), &catalog).unwrap();

        assert_eq!(update.cart.len(), 1);
        assert_eq!(update.cart.items()[0].quantity, 2);
        assert_eq!(update.totals.subtotal, dec!(20.00));
        assert_eq!(update.totals.tax, dec!(2.60));
        assert_eq!(update.totals.total, dec!(22.60));
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let (store, storage) = store();
        let catalog = catalog();

        store.add(ProductId::new(1), &catalog).unwrap();
        let update = store.add(ProductId::new(999), &catalog).unwrap();

        assert_eq!(update.cart.len(), 1);
        assert_eq!(update.cart.items()[0].id, ProductId::new(1));
        // The no-op did not rewrite the slot with anything new
        let raw = storage.read("cart").unwrap().unwrap();
        let persisted: CartState = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, update.cart);
    }

    #[test]
    fn test_add_then_remove_leaves_empty_cart() {
        let (store, _) = store();
        let catalog = catalog();

        store.add(ProductId::new(1), &catalog).unwrap();
        let update = store.remove(ProductId::new(1)).unwrap();

        assert!(update.cart.is_empty());
        assert_eq!(update.totals.subtotal, dec!(0));
    }

    #[test]
    fn test_set_quantity_zero_matches_remove() {
        let catalog = catalog();

        let (store_a, _) = store();
        store_a.add(ProductId::new(1), &catalog).unwrap();
        let via_set = store_a.set_quantity(ProductId::new(1), 0).unwrap();

        let (store_b, _) = store();
        store_b.add(ProductId::new(1), &catalog).unwrap();
        let via_remove = store_b.remove(ProductId::new(1)).unwrap();

        assert_eq!(via_set.cart, via_remove.cart);
    }

    #[test]
    fn test_set_quantity_updates_totals() {
        let (store, _) = store();
        let catalog = catalog();

        store.add(ProductId::new(1), &catalog).unwrap();
        let update = store.set_quantity(ProductId::new(1), 3).unwrap();

        assert_eq!(update.cart.items()[0].quantity, 3);
        assert_eq!(update.totals.subtotal, dec!(30.00));
    }

    #[test]
    fn test_clear_removes_slot_entirely() {
        let (store, storage) = store();
        store.add(ProductId::new(1), &catalog()).unwrap();

        let update = store.clear().unwrap();

        assert!(update.cart.is_empty());
        assert_eq!(storage.read("cart").unwrap(), None);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_missing_and_empty_slots_read_the_same() {
        let (store, storage) = store();
        assert!(store.state().is_empty());

        storage.write("cart", "[]").unwrap();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_corrupt_slot_reads_as_empty() {
        let (store, storage) = store();
        storage.write("cart", "{not json").unwrap();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_state_is_read_through() {
        let (store, storage) = store();
        let catalog = catalog();
        store.add(ProductId::new(1), &catalog).unwrap();

        // Simulate another process mutating the shared slot
        storage.write("cart", "[]").unwrap();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_checkout_returns_receipt_and_clears() {
        let (store, _) = store();
        let catalog = catalog();
        store.add(ProductId::new(1), &catalog).unwrap();
        store.add(ProductId::new(2), &catalog).unwrap();

        let receipt = store.checkout().unwrap();

        assert_eq!(receipt.unit_count, 2);
        assert_eq!(receipt.totals.subtotal, dec!(14.50));
        assert!(store.state().is_empty());
    }
}
