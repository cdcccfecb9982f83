//! # Shop State
//!
//! The composition root. Constructed once at startup, it owns every piece of
//! business state and wires the bus between the review form (publisher) and
//! the product widget (subscriber). This module contains domain logic only —
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Shop
//! ├── bus: EventBus<Review>       // injected into form + product
//! ├── product: ProductWidget      // variant selection, reviews
//! ├── review_form: ReviewForm     // draft fields + errors
//! ├── cart: Cart                  // ordered variant ids
//! ├── premium: bool               // free shipping flag
//! └── status_message: String      // title bar text
//! ```
//!
//! State changes go through `update(shop, action)` in action.rs, except for
//! the two flows that are component-local by design: form submission (the
//! form publishes on the bus) and review arrival (the product drains its
//! subscription).

use std::path::Path;

use crate::core::bus::EventBus;
use crate::core::catalog::{self, CatalogError, Product};
use crate::core::cart::Cart;
use crate::core::config::ResolvedConfig;
use crate::core::product::{ProductWidget, Shipping, shipping_quote};
use crate::core::review::{Review, ReviewForm};

pub struct Shop {
    pub bus: EventBus<Review>,
    pub product: ProductWidget,
    pub review_form: ReviewForm,
    pub cart: Cart,
    pub premium: bool,
    pub status_message: String,
}

impl Shop {
    pub fn new(product: Product, premium: bool) -> Self {
        let bus = EventBus::new();
        let product = ProductWidget::new(product, &bus);
        Self {
            bus,
            product,
            review_form: ReviewForm::new(),
            cart: Cart::new(),
            premium,
            status_message: String::from("Welcome to the shop!"),
        }
    }

    /// Build the shop from resolved configuration: catalog file if one is
    /// configured, the built-in seed otherwise.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, CatalogError> {
        let product = match &config.catalog_file {
            Some(path) => catalog::load_catalog(Path::new(path))?,
            None => Product::seed(),
        };
        Ok(Self::new(product, config.premium))
    }

    /// Shipping quote for the shop's customer.
    pub fn shipping(&self) -> Shipping {
        shipping_quote(self.premium)
    }
}
