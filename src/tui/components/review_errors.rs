//! Validation errors from the last submit attempt. Renders nothing for an
//! empty list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct ReviewErrors<'a> {
    pub errors: &'a [String],
}

impl<'a> ReviewErrors<'a> {
    pub fn new(errors: &'a [String]) -> Self {
        Self { errors }
    }
}

impl Component for ReviewErrors<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.errors.is_empty() {
            return;
        }
        let lines: Vec<Line> = self
            .errors
            .iter()
            .map(|error| Line::from(format!("• {error}")))
            .collect();
        let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
    }
}
