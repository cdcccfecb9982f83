//! # ProductCard Component
//!
//! The product pane: image label, description, stock status, shipping
//! quote, variant swatches, and the cart key hints.
//!
//! The card writes the screen rectangle of every swatch it draws into
//! `swatch_areas` during the render pass; the event loop hit-tests mouse
//! movement against that cache so hovering a swatch selects its variant,
//! like the reference widget's mouseover.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::product::{ProductWidget, Shipping};
use crate::tui::component::Component;

/// Row of the swatch line, relative to the card's inner area.
const SWATCH_ROW: u16 = 4;

pub struct ProductCard<'a> {
    pub product: &'a ProductWidget,
    pub shipping: Shipping,
    /// Swatch hit areas, refreshed on every render.
    pub swatch_areas: &'a mut Vec<Rect>,
}

/// Best-effort terminal color for a variant color name.
fn swatch_color(name: &str) -> Color {
    match name {
        "green" => Color::Green,
        "blue" | "navy" => Color::Blue,
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        "white" | "natural" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        _ => Color::Magenta,
    }
}

impl Component for ProductCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Product ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let product = self.product.product();
        let stock_line = if self.product.in_stock() {
            Line::styled("In Stock", Style::default().fg(Color::Green))
        } else {
            Line::styled(
                "Out of Stock",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        };

        // Swatch row: record one hit rect per variant as we lay it out.
        self.swatch_areas.clear();
        let mut swatch_spans: Vec<Span> = Vec::new();
        let mut x_offset: u16 = 0;
        for (i, variant) in product.variants.iter().enumerate() {
            let label = format!(" ■ {} ", variant.color);
            let width = label.chars().count() as u16;
            let selected = i == self.product.selected_index();
            let style = if selected {
                Style::default()
                    .fg(swatch_color(&variant.color))
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(swatch_color(&variant.color))
            };
            swatch_spans.push(Span::styled(label, style));
            swatch_spans.push(Span::raw(" "));

            self.swatch_areas.push(Rect {
                x: inner.x + x_offset,
                y: inner.y + SWATCH_ROW,
                width,
                height: 1,
            });
            x_offset += width + 1;
        }

        let add_hint = if self.product.in_stock() {
            Span::styled("[a] Add to cart", Style::default().fg(Color::White))
        } else {
            // Disabled affordance: dimmed, and the key is ignored upstream.
            Span::styled(
                "[a] Add to cart",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        };

        let lines = vec![
            Line::styled(
                format!("⬒ {}", self.product.image()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Line::from(product.description.as_str()),
            stock_line,
            Line::from(format!("Shipping: {}", self.shipping)),
            Line::from(swatch_spans),
            Line::from(""),
            Line::from(vec![
                add_hint,
                Span::raw("   "),
                Span::styled("[d] Delete from cart", Style::default().fg(Color::White)),
            ]),
        ];

        // No wrapping: every line must stay on its row so the cached swatch
        // rects line up with what is on screen.
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bus::EventBus;
    use crate::core::catalog::Product;
    use crate::core::product::shipping_quote;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_card(widget: &ProductWidget, premium: bool) -> (String, Vec<Rect>) {
        let backend = TestBackend::new(44, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut swatch_areas = Vec::new();
        terminal
            .draw(|f| {
                let mut card = ProductCard {
                    product: widget,
                    shipping: shipping_quote(premium),
                    swatch_areas: &mut swatch_areas,
                };
                card.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, swatch_areas)
    }

    #[test]
    fn test_card_shows_stock_and_shipping() {
        let bus = EventBus::new();
        let widget = ProductWidget::new(Product::seed(), &bus);
        let (text, _) = render_card(&widget, true);

        assert!(text.contains("In Stock"));
        assert!(text.contains("Shipping: Free"));
        assert!(text.contains("A pair of warm, fuzzy socks."));
    }

    #[test]
    fn test_out_of_stock_variant() {
        let bus = EventBus::new();
        let mut widget = ProductWidget::new(Product::seed(), &bus);
        widget.select_variant(1);
        let (text, _) = render_card(&widget, false);

        assert!(text.contains("Out of Stock"));
        assert!(text.contains("Shipping: 2.99"));
        assert!(text.contains("socks-blue"));
    }

    #[test]
    fn test_one_swatch_area_per_variant() {
        let bus = EventBus::new();
        let widget = ProductWidget::new(Product::seed(), &bus);
        let (text, areas) = render_card(&widget, true);

        assert_eq!(areas.len(), 2);
        assert!(text.contains("green"));
        assert!(text.contains("blue"));
        // Laid out left to right without overlap.
        assert!(areas[0].x + areas[0].width <= areas[1].x);
    }
}
