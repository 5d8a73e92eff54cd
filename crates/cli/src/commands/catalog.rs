//! Catalog listing command.

use cartwheel_storefront::view::ProductView;

use super::Session;

/// Print the product catalog.
///
/// # Errors
///
/// Returns an error if the catalog feed cannot be loaded.
#[allow(clippy::print_stdout)]
pub async fn list(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let products = session.catalog.load().await?;

    if products.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    for view in products.iter().map(ProductView::from) {
        println!("[{}] {} - {}", view.id, view.name, view.price);
        if !view.description.is_empty() {
            println!("    {}", view.description);
        }
    }
    Ok(())
}
