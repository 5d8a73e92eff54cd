//! Display types for the renderer.
//!
//! The renderer draws from these views and forwards user intents back into
//! [`CartStore`](crate::cart::CartStore) operations; it never mutates cart
//! state directly. Prices are formatted here, at the display boundary, with
//! two-decimal rounding - the underlying state keeps exact decimals.

use cartwheel_core::{CartState, LineItem, Product, Totals, format_usd};

use crate::cart::{CartError, CartUpdate};

/// Line item display data.
#[derive(Debug, Clone)]
pub struct LineItemView {
    /// Product id, for remove / set-quantity triggers.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Units of this product.
    pub quantity: u32,
    /// Unit price, formatted (e.g., `$10.00`).
    pub price: String,
    /// Price times quantity, formatted.
    pub line_total: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_usd(item.price),
            line_total: format_usd(item.line_total()),
        }
    }
}

/// Cart display data: line items plus formatted totals.
#[derive(Debug, Clone)]
pub struct CartView {
    /// Line items in display order.
    pub items: Vec<LineItemView>,
    /// Units across all line items.
    pub unit_count: u32,
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted tax (13% of subtotal).
    pub tax: String,
    /// Formatted total.
    pub total: String,
}

impl CartView {
    /// Build a view from cart state and its totals.
    #[must_use]
    pub fn render(cart: &CartState, totals: &Totals) -> Self {
        Self {
            items: cart.items().iter().map(LineItemView::from).collect(),
            unit_count: cart.unit_count(),
            subtotal: totals.subtotal_display(),
            tax: totals.tax_display(),
            total: totals.total_display(),
        }
    }

    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::render(&CartState::new(), &Totals::zero())
    }
}

impl From<&CartUpdate> for CartView {
    fn from(update: &CartUpdate) -> Self {
        Self::render(&update.cart, &update.totals)
    }
}

/// Product display data for the catalog listing.
#[derive(Debug, Clone)]
pub struct ProductView {
    /// Product id, for the add-to-cart trigger.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Formatted unit price.
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_usd(product.price),
        }
    }
}

/// Parse quantity text input at the renderer boundary.
///
/// The quantity-edit trigger delivers raw text; naive numeric parsing there
/// is how not-a-number values corrupt totals, so anything that is not a
/// plain non-negative integer is rejected with a defined error instead.
///
/// # Errors
///
/// Returns [`CartError::InvalidQuantity`] for empty, non-numeric, negative,
/// or out-of-range input.
pub fn parse_quantity(input: &str) -> Result<u32, CartError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| CartError::InvalidQuantity(input.to_string()))
}
