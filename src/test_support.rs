//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Product;
use crate::core::state::Shop;

/// Creates a shop over the built-in seed product with a premium customer.
pub fn test_shop() -> Shop {
    Shop::new(Product::seed(), true)
}
