//! # ReviewList Component
//!
//! Scrollable list of submitted reviews, or the fixed placeholder when none
//! exist yet.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ReviewListState` (scroll position) lives in `TuiState`
//! - `ReviewList` is created each frame with borrowed reviews

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::review::{RATING_MAX, Review};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Fixed message shown when no reviews have been submitted.
pub const EMPTY_PLACEHOLDER: &str = "There are no reviews yet.";

/// Scroll state for the review list. Must be persisted in `TuiState`.
#[derive(Default)]
pub struct ReviewListState {
    pub scroll_state: ScrollViewState,
}

impl ReviewListState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Scroll handling lives on the state, not the wrapper: the wrapper is
/// recreated each frame and cannot hold the position.
impl EventHandler for ReviewListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct ReviewList<'a> {
    reviews: &'a [Review],
    state: &'a mut ReviewListState,
}

impl<'a> ReviewList<'a> {
    pub fn new(reviews: &'a [Review], state: &'a mut ReviewListState) -> Self {
        Self { reviews, state }
    }
}

/// `★★★☆☆` for a 3-star rating.
fn stars(rating: u8) -> String {
    let filled = rating.min(RATING_MAX) as usize;
    let mut s = "★".repeat(filled);
    s.push_str(&"☆".repeat(RATING_MAX as usize - filled));
    s
}

/// Build one review's paragraph and its rendered height for `width`.
fn review_paragraph(review: &Review, width: u16) -> (Paragraph<'_>, u16) {
    let meta = format!(
        "{}  would recommend: {}",
        stars(review.rating),
        review.recommend.label()
    );
    let lines = vec![
        Line::from(review.body.as_str()),
        Line::styled(meta, Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().title(review.author.as_str()))
        .wrap(Wrap { trim: true });

    let inner_width = width.saturating_sub(2);
    let height = paragraph.line_count(inner_width) as u16;
    (paragraph, height)
}

impl Component for ReviewList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.reviews.is_empty() {
            let placeholder =
                Paragraph::new(EMPTY_PLACEHOLDER).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, area);
            return;
        }

        // Reserve a column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        let rendered: Vec<_> = self
            .reviews
            .iter()
            .map(|review| review_paragraph(review, content_width))
            .collect();
        let total_height: u16 = rendered.iter().map(|(_, h)| h).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in rendered {
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(paragraph, rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::review::Recommend;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_reviews(reviews: &[Review]) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ReviewListState::new();
        terminal
            .draw(|f| {
                let mut list = ReviewList::new(reviews, &mut state);
                list.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn review(author: &str, body: &str, rating: u8) -> Review {
        Review {
            author: author.to_string(),
            body: body.to_string(),
            rating,
            recommend: Recommend::Yes,
        }
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let text = render_reviews(&[]);
        assert!(text.contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_reviews_render_author_and_recommendation() {
        let reviews = vec![
            review("Alice", "Great socks", 5),
            review("Bob", "Runs small", 3),
        ];
        let text = render_reviews(&reviews);
        assert!(!text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Alice"));
        assert!(text.contains("Great socks"));
        assert!(text.contains("Bob"));
        assert!(text.contains("would recommend: yes"));
    }

    #[test]
    fn test_reviews_keep_submission_order() {
        let reviews = vec![review("First", "earlier", 4), review("Second", "later", 2)];
        let text = render_reviews(&reviews);
        assert!(text.find("First").unwrap() < text.find("Second").unwrap());
    }

    #[test]
    fn test_stars_rendering() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(1), "★☆☆☆☆");
    }

    #[test]
    fn test_scroll_events_move_offset() {
        let mut state = ReviewListState::new();
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 1);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
