//! Review pane: a Reviews / Make a Review tab pair over the list and the
//! form. Only the selected tab's content is drawn; the hidden form keeps
//! its draft.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::review::{Review, ReviewForm};
use crate::tui::component::Component;
use crate::tui::components::review_form::{FormField, ReviewFormView};
use crate::tui::components::review_list::{ReviewList, ReviewListState};
use crate::tui::components::tabs::{ReviewTab, TabStrip};

pub struct ReviewPane<'a> {
    pub tab: ReviewTab,
    pub reviews: &'a [Review],
    pub form: &'a ReviewForm,
    pub form_focus: FormField,
    /// True while keystrokes go to the form.
    pub form_active: bool,
    pub list_state: &'a mut ReviewListState,
}

impl Component for ReviewPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Reviews (Tab) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [strip_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        TabStrip::new(ReviewTab::LABELS, self.tab.index()).render(frame, strip_area);

        match self.tab {
            ReviewTab::Reviews => {
                ReviewList::new(self.reviews, self.list_state).render(frame, content_area);
            }
            ReviewTab::MakeReview => {
                ReviewFormView {
                    form: self.form,
                    focus: self.form_focus,
                    active: self.form_active,
                }
                .render(frame, content_area);
            }
        }
    }
}
