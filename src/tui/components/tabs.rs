//! Tab containers.
//!
//! Both panes are two-way switches over a fixed label set, defaulting to the
//! first entry. The enums carry the selection; `TabStrip` renders the header
//! line. Hidden tab content is retained, not torn down — the review form
//! draft survives switching away and back.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Tabs of the product info pane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Shipping,
    Details,
}

impl InfoTab {
    pub const LABELS: [&'static str; 2] = ["Shipping", "Details"];

    pub fn toggled(&self) -> Self {
        match self {
            InfoTab::Shipping => InfoTab::Details,
            InfoTab::Details => InfoTab::Shipping,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            InfoTab::Shipping => 0,
            InfoTab::Details => 1,
        }
    }
}

/// Tabs of the review pane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReviewTab {
    #[default]
    Reviews,
    MakeReview,
}

impl ReviewTab {
    pub const LABELS: [&'static str; 2] = ["Reviews", "Make a Review"];

    pub fn toggled(&self) -> Self {
        match self {
            ReviewTab::Reviews => ReviewTab::MakeReview,
            ReviewTab::MakeReview => ReviewTab::Reviews,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ReviewTab::Reviews => 0,
            ReviewTab::MakeReview => 1,
        }
    }
}

/// One-line tab header. The selected label is highlighted; the other is dim.
pub struct TabStrip {
    pub labels: [&'static str; 2],
    pub selected: usize,
}

impl TabStrip {
    pub fn new(labels: [&'static str; 2], selected: usize) -> Self {
        Self { labels, selected }
    }
}

impl Component for TabStrip {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(*label, style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
