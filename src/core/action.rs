//! # Actions
//!
//! Everything a component can ask the shop to do becomes an `Action`.
//! Hovering a swatch is `Action::SelectVariant(i)`. Pressing `a` on an
//! in-stock variant is `Action::AddToCart(id)` — the product widget emits
//! the id, the shop owns the cart mutation.
//!
//! The `update()` function takes the current state and an action and applies
//! the transition. No I/O here; rendering happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  mutated State (+ Effect for the loop)
//! ```

use log::info;

use crate::core::catalog::VariantId;
use crate::core::state::Shop;

/// A state transition requested by a component or the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the variant at this index. The index must be in range — input
    /// handling clamps, and `select_variant` asserts.
    SelectVariant(usize),
    /// Append this variant id to the cart.
    AddToCart(VariantId),
    /// Remove every cart entry with this variant id.
    DeleteFromCart(VariantId),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(shop: &mut Shop, action: Action) -> Effect {
    match action {
        Action::SelectVariant(index) => {
            shop.product.select_variant(index);
            Effect::None
        }
        Action::AddToCart(id) => {
            shop.cart.add(id);
            shop.status_message = format!("Added variant {id} to cart");
            info!("Cart add: variant {id} (cart size {})", shop.cart.len());
            Effect::None
        }
        Action::DeleteFromCart(id) => {
            shop.cart.remove_all(id);
            shop.status_message = format!("Removed variant {id} from cart");
            info!("Cart delete: variant {id} (cart size {})", shop.cart.len());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_shop;

    #[test]
    fn test_add_then_delete_clears_duplicates() {
        let mut shop = test_shop();
        let id = shop.product.selected_variant_id();

        update(&mut shop, Action::AddToCart(id));
        update(&mut shop, Action::AddToCart(id));
        assert_eq!(shop.cart.len(), 2);

        update(&mut shop, Action::DeleteFromCart(id));
        assert!(shop.cart.is_empty());
    }

    #[test]
    fn test_select_variant_updates_product() {
        let mut shop = test_shop();
        update(&mut shop, Action::SelectVariant(1));
        assert_eq!(shop.product.selected_index(), 1);
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut shop = test_shop();
        assert_eq!(update(&mut shop, Action::Quit), Effect::Quit);
        assert_eq!(update(&mut shop, Action::SelectVariant(0)), Effect::None);
    }
}
