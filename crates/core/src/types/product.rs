//! Catalog product entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// An immutable catalog entry.
///
/// Products come from the catalog feed and are never mutated by the cart
/// layer; adding to the cart copies the fields into a
/// [`LineItem`](crate::types::cart::LineItem) snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description shown on the product card.
    pub description: String,
    /// Unit price in USD. Non-negative.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_product_deserializes_from_feed_shape() {
        let json = r#"{
            "id": 1,
            "name": "Enamel Mug",
            "description": "A 12oz camp mug.",
            "price": 10.00,
            "image": "images/mug.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Enamel Mug");
        assert_eq!(product.price, dec!(10.00));
    }
}
