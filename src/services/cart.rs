use crate::domain::models::{CartItem, SessionState};
use crate::page::PageError;
use crate::services::notify::Level;
use crate::services::storage::audit;

/// Appends an item to the session cart, queues the acknowledgment notice,
/// and logs the full cart snapshot. Name and price are accepted as given.
pub fn add_to_cart(state: &mut SessionState, product_name: &str, price: f64) {
    state.cart.push(CartItem {
        product_name: product_name.to_string(),
        price,
    });
    state
        .notices
        .post(Level::Success, format!("{} added to cart!", product_name));
    audit(
        "add_to_cart",
        serde_json::json!({ "cart": state.cart }),
    );
}

/// Resolves a catalog slug to its product before touching the cart; an
/// unknown slug leaves the cart unchanged.
pub fn add_from_catalog(state: &mut SessionState, slug: &str) -> Result<CartItem, PageError> {
    let product = state.page.product(slug)?.clone();
    add_to_cart(state, &product.name, product.price);
    Ok(CartItem {
        product_name: product.name,
        price: product.price,
    })
}
