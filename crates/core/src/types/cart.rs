//! Cart state and derived totals.
//!
//! [`CartState`] is the authoritative cart model: an ordered sequence of
//! line items, one per product, in insertion order. The mutation methods
//! here are pure in-memory reducers; persistence wraps them in the
//! storefront crate.
//!
//! Invariant: every stored line item has `quantity >= 1`. A quantity driven
//! to zero removes the item rather than storing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::money::format_usd;
use crate::types::product::Product;

/// Fixed sales tax rate applied to every cart (13%).
pub const TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// A product snapshot plus quantity, as stored in the cart.
///
/// The product fields are copied at add-time so a later catalog change does
/// not retroactively alter a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product this line refers to. Unique within a cart.
    pub id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Product description at add-time.
    pub description: String,
    /// Unit price at add-time.
    pub price: Decimal,
    /// Product image URL at add-time.
    pub image: String,
    /// Number of units. Always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Snapshot a product into a new line item with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The ordered cart contents. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented; otherwise a new line item is appended with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::from_product(product));
        }
    }

    /// Remove the line item for `product_id`, if present.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != before
    }

    /// Set the quantity of the line item for `product_id`.
    ///
    /// A quantity of zero removes the item, identical to [`Self::remove`].
    /// Unknown ids are a no-op. Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }
}

/// Derived cart totals. Never persisted; recomputed from [`CartState`] on
/// every redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of `price * quantity` over all line items.
    pub subtotal: Decimal,
    /// `subtotal * TAX_RATE`.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub total: Decimal,
}

impl Totals {
    /// Zeroed totals for an empty cart.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Subtotal formatted for display (e.g., `$20.00`).
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        format_usd(self.subtotal)
    }

    /// Tax formatted for display.
    #[must_use]
    pub fn tax_display(&self) -> String {
        format_usd(self.tax)
    }

    /// Total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_usd(self.total)
    }
}

/// Compute subtotal, tax, and total for a cart.
///
/// Pure and deterministic: no I/O, no side effects, and calling it twice on
/// the same state yields identical results. Arithmetic is exact decimal;
/// rounding happens only in the display formatters.
#[must_use]
pub fn compute_totals(cart: &CartState) -> Totals {
    let subtotal: Decimal = cart.items().iter().map(LineItem::line_total).sum();
    let tax = subtotal * TAX_RATE;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
