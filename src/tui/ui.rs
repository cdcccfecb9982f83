use crate::core::state::Shop;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{InfoPane, ProductCard, ReviewPane, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Compose the whole screen: title bar, product card, info pane, review
/// pane, help line.
pub fn draw_ui(frame: &mut Frame, shop: &Shop, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [card_area, right_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(main_area);
    let [info_area, review_area] = Layout::vertical([Length(7), Min(0)]).areas(right_area);

    TitleBar::new(
        shop.product.title(),
        shop.cart.len(),
        shop.status_message.clone(),
    )
    .render(frame, title_area);

    ProductCard {
        product: &shop.product,
        shipping: shop.shipping(),
        swatch_areas: &mut tui.swatch_areas,
    }
    .render(frame, card_area);

    InfoPane {
        tab: tui.info_tab,
        shipping: shop.shipping(),
        details: &shop.product.product().details,
    }
    .render(frame, info_area);

    ReviewPane {
        tab: tui.review_tab,
        reviews: shop.product.reviews(),
        form: &shop.review_form,
        form_focus: tui.form_focus,
        form_active: tui.form_is_active(),
        list_state: &mut tui.review_list,
    }
    .render(frame, review_area);

    let help = Span::styled(tui.help_line(), Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

/// Hit test: which swatch (if any) is under the given screen position.
/// `areas` is the cache written by the product card during the last render.
pub fn hit_test_swatch(column: u16, row: u16, areas: &[Rect]) -> Option<usize> {
    areas.iter().position(|rect| {
        column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Product;
    use crate::core::state::Shop;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let shop = Shop::new(Product::seed(), true);
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &shop, &mut tui)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Alpine Mills Wool Socks"));
        assert!(text.contains("Cart (0)"));
        assert!(text.contains("In Stock"));
        assert!(text.contains("There are no reviews yet."));
        // Swatch cache is ready for hover hit-testing.
        assert_eq!(tui.swatch_areas.len(), 2);
    }

    #[test]
    fn test_hit_test_swatch() {
        let areas = vec![Rect::new(2, 5, 8, 1), Rect::new(11, 5, 7, 1)];
        assert_eq!(hit_test_swatch(2, 5, &areas), Some(0));
        assert_eq!(hit_test_swatch(9, 5, &areas), Some(0));
        assert_eq!(hit_test_swatch(11, 5, &areas), Some(1));
        assert_eq!(hit_test_swatch(11, 6, &areas), None);
        assert_eq!(hit_test_swatch(30, 5, &areas), None);
        assert_eq!(hit_test_swatch(0, 0, &[]), None);
    }
}
