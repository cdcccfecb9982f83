//! Bullet list of product facts. Renders nothing for an empty list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct DetailsList<'a> {
    pub details: &'a [String],
}

impl<'a> DetailsList<'a> {
    pub fn new(details: &'a [String]) -> Self {
        Self { details }
    }
}

impl Component for DetailsList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.details.is_empty() {
            return;
        }
        let lines: Vec<Line> = self
            .details
            .iter()
            .map(|detail| Line::from(format!("• {detail}")))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_details(details: &[String]) -> String {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = DetailsList::new(details);
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_one_bullet_per_detail() {
        let details = vec!["80% cotton".to_string(), "Gender-neutral".to_string()];
        let text = render_details(&details);
        assert!(text.contains("• 80% cotton"));
        assert!(text.contains("• Gender-neutral"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let text = render_details(&[]);
        assert!(text.trim().is_empty());
    }
}
