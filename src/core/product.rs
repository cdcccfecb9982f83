//! # Product Widget
//!
//! Core state for the product card: the product itself, which variant is
//! selected, and the reviews received over the bus. Derived display fields
//! (title, image, stock) are plain functions of current state, recomputed on
//! demand — nothing here caches or tracks dependencies.
//!
//! The widget never touches the cart. Cart operations are emitted as
//! [`Action`]s carrying the selected variant's id and handled by the owning
//! [`Shop`](crate::core::state::Shop) through the reducer.

use log::debug;

use crate::core::action::Action;
use crate::core::bus::{EventBus, Subscription};
use crate::core::catalog::{Product, Variant, VariantId};
use crate::core::review::Review;

/// Fixed shipping charge for non-premium customers, in cents.
pub const STANDARD_SHIPPING_CENTS: u32 = 299;

/// Shipping quote shown on the product card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shipping {
    Free,
    Flat(u32),
}

impl std::fmt::Display for Shipping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shipping::Free => write!(f, "Free"),
            Shipping::Flat(cents) => write!(f, "{}.{:02}", cents / 100, cents % 100),
        }
    }
}

/// Quote shipping for a customer. Premium members ship free; everyone else
/// pays the fixed charge. A pure function of the flag — product state plays
/// no part.
pub fn shipping_quote(premium: bool) -> Shipping {
    if premium {
        Shipping::Free
    } else {
        Shipping::Flat(STANDARD_SHIPPING_CENTS)
    }
}

/// The product card's state.
pub struct ProductWidget {
    product: Product,
    selected: usize,
    reviews: Vec<Review>,
    subscription: Subscription<Review>,
}

impl ProductWidget {
    /// Build the widget and subscribe it to `bus` for submitted reviews.
    /// The subscription lives as long as the widget does.
    ///
    /// # Panics
    ///
    /// If `product` has no variants. Catalog loading rejects that case, so
    /// hitting this is a wiring bug, not bad user input.
    pub fn new(product: Product, bus: &EventBus<Review>) -> Self {
        assert!(
            !product.variants.is_empty(),
            "product must have at least one variant"
        );
        Self {
            product,
            selected: 0,
            reviews: Vec::new(),
            subscription: bus.subscribe(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Select the variant at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range. Out-of-range selection is a programmer
    /// error; input handling clamps every user-derived index.
    pub fn select_variant(&mut self, index: usize) {
        assert!(
            index < self.product.variants.len(),
            "variant index {index} out of range ({} variants)",
            self.product.variants.len()
        );
        self.selected = index;
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> &Variant {
        &self.product.variants[self.selected]
    }

    /// `"{brand} {name}"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.product.brand, self.product.name)
    }

    /// Image path of the selected variant.
    pub fn image(&self) -> &str {
        &self.selected_variant().image
    }

    /// Whether the selected variant has any stock left.
    pub fn in_stock(&self) -> bool {
        self.selected_variant().quantity > 0
    }

    pub fn selected_variant_id(&self) -> VariantId {
        self.selected_variant().id
    }

    /// Notify the parent to add the selected variant to the cart.
    pub fn add_to_cart(&self) -> Action {
        Action::AddToCart(self.selected_variant_id())
    }

    /// Notify the parent to delete the selected variant from the cart.
    pub fn delete_from_cart(&self) -> Action {
        Action::DeleteFromCart(self.selected_variant_id())
    }

    /// Drain the bus subscription, appending received reviews in publish
    /// order. Returns how many arrived. Called once per event-loop turn.
    pub fn pump_reviews(&mut self) -> usize {
        let before = self.reviews.len();
        self.reviews.extend(self.subscription.drain());
        let arrived = self.reviews.len() - before;
        if arrived > 0 {
            debug!("Received {arrived} review(s) from the bus");
        }
        arrived
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}
