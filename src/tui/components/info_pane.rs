//! Product info pane: a Shipping / Details tab pair. Only the selected
//! tab's content is drawn; the other is hidden, not torn down.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::product::Shipping;
use crate::tui::component::Component;
use crate::tui::components::details_list::DetailsList;
use crate::tui::components::tabs::{InfoTab, TabStrip};

pub struct InfoPane<'a> {
    pub tab: InfoTab,
    pub shipping: Shipping,
    pub details: &'a [String],
}

impl Component for InfoPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Info (s) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [strip_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        TabStrip::new(InfoTab::LABELS, self.tab.index()).render(frame, strip_area);

        match self.tab {
            InfoTab::Shipping => {
                let line = Line::from(format!("Shipping: {}", self.shipping));
                frame.render_widget(Paragraph::new(line), content_area);
            }
            InfoTab::Details => {
                DetailsList::new(self.details).render(frame, content_area);
            }
        }
    }
}
