//! Cart commands: show, add, remove, set-qty, and checkout.
//!
//! Each mutation redraws from the state the cart store returns; only `add`
//! needs the catalog, for the id-to-product lookup.

use cartwheel_core::{ProductId, compute_totals};
use cartwheel_storefront::view::{CartView, parse_quantity};

use super::Session;

/// Print the current cart with totals.
///
/// # Errors
///
/// This command reads only; storage problems surface as an empty cart, so
/// it currently cannot fail.
#[allow(clippy::unnecessary_wraps)]
pub fn show(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let cart = session.store.state();
    let totals = compute_totals(&cart);
    draw(&CartView::render(&cart, &totals));
    Ok(())
}

/// Add one unit of a product to the cart.
///
/// A failed catalog load leaves the cart unchanged: the error is logged and
/// reported, and the add is unavailable until a later load succeeds.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the cart cannot be
/// persisted.
pub async fn add(session: &Session, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let products = match session.catalog.load().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Catalog unavailable, cart unchanged: {e}");
            return Err(e.into());
        }
    };

    let update = session.store.add(ProductId::new(id), &products)?;
    draw(&CartView::from(&update));
    Ok(())
}

/// Remove a line item from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be persisted.
pub fn remove(session: &Session, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    let update = session.store.remove(ProductId::new(id))?;
    draw(&CartView::from(&update));
    Ok(())
}

/// Set a line item's quantity. Zero removes the item.
///
/// The quantity arrives as raw text and is validated here, at the renderer
/// boundary, before it can reach the cart.
///
/// # Errors
///
/// Returns an error if the quantity is not a non-negative integer or the
/// cart cannot be persisted.
pub fn set_quantity(
    session: &Session,
    id: i64,
    quantity: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let quantity = parse_quantity(quantity)?;
    let update = session.store.set_quantity(ProductId::new(id), quantity)?;
    draw(&CartView::from(&update));
    Ok(())
}

/// Check out: print the confirmation with the charged total, then clear
/// the cart.
///
/// # Errors
///
/// Returns an error if the cart slot cannot be cleared.
#[allow(clippy::print_stdout)]
pub fn checkout(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let receipt = session.store.checkout()?;
    println!(
        "Thank you for your purchase! {} item(s), total: {}",
        receipt.unit_count,
        receipt.totals.total_display()
    );
    Ok(())
}

#[allow(clippy::print_stdout)]
fn draw(view: &CartView) {
    if view.items.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in &view.items {
        println!(
            "[{}] {} x{} @ {} = {}",
            item.id, item.name, item.quantity, item.price, item.line_total
        );
    }
    println!("Subtotal: {}", view.subtotal);
    println!("Tax:      {}", view.tax);
    println!("Total:    {}", view.total);
}
