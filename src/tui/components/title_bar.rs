//! # TitleBar Component
//!
//! Top status bar showing the product title, the cart counter, and the
//! current status message.
//!
//! Purely presentational — it receives all three values as props and has no
//! internal state, which makes it trivial to test and reason about. The cart
//! counter lives here (not on the product card) because the cart belongs to
//! the shop, not to the product.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `title`: the computed product title (`"{brand} {name}"`)
/// - `cart_count`: number of entries in the cart
/// - `status_message`: transient status (e.g. "Added variant 2234 to cart")
pub struct TitleBar {
    pub title: String,
    pub cart_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, cart_count: usize, status_message: String) -> Self {
        Self {
            title,
            cart_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line:
    /// `"{title} | Cart ({n})"`, plus `" | {status}"` when a status is set.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!("{} | Cart ({})", self.title, self.cart_count)
        } else {
            format!(
                "{} | Cart ({}) | {}",
                self.title, self.cart_count, self.status_message
            )
        };
        frame.render_widget(Span::raw(text), area);
    }
}
