//! # ReviewForm Component
//!
//! Editing surface for the review draft. The draft itself (fields + errors)
//! is core state owned by the `Shop`; this module adds what only the
//! terminal cares about: which field has focus, how keys map onto field
//! edits, and how the draft is drawn.
//!
//! Split in two, mirroring the persistent state + transient wrapper pattern:
//! - `ReviewFormInput` handles events against `&mut ReviewForm` + `&mut
//!   FormField` and emits `FormEvent`s; the event loop performs the actual
//!   submit so the bus publish happens next to the rest of the wiring.
//! - `ReviewFormView` renders the draft read-only.
//!
//! Field editing is deliberately end-of-line only (append/backspace): the
//! four fields are short and the reference widget's inputs carry no cursor
//! state worth replicating.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::review::{RATING_MAX, RATING_MIN, Recommend, ReviewForm};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::review_errors::ReviewErrors;
use crate::tui::event::TuiEvent;

/// The four draft fields, in validation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Body,
    Rating,
    Recommend,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Body,
            FormField::Body => FormField::Rating,
            FormField::Rating => FormField::Recommend,
            FormField::Recommend => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Recommend,
            FormField::Body => FormField::Name,
            FormField::Rating => FormField::Body,
            FormField::Recommend => FormField::Rating,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Body => "Review",
            FormField::Rating => "Rating",
            FormField::Recommend => "Recommend",
        }
    }
}

/// High-level events emitted by the form input handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// User pressed Enter; the loop should run `ReviewForm::submit`.
    SubmitRequested,
    /// A field or the focus changed.
    Edited,
}

/// Event-handling wrapper over the core draft plus the focused field.
pub struct ReviewFormInput<'a> {
    pub form: &'a mut ReviewForm,
    pub focus: &'a mut FormField,
}

impl EventHandler for ReviewFormInput<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorDown => {
                *self.focus = self.focus.next();
                Some(FormEvent::Edited)
            }
            TuiEvent::CursorUp => {
                *self.focus = self.focus.prev();
                Some(FormEvent::Edited)
            }
            TuiEvent::Submit => Some(FormEvent::SubmitRequested),
            TuiEvent::InputChar(c) => self.input_char(*c),
            TuiEvent::Backspace => self.backspace(),
            TuiEvent::CursorLeft => self.adjust(-1),
            TuiEvent::CursorRight => self.adjust(1),
            _ => None,
        }
    }
}

impl ReviewFormInput<'_> {
    fn input_char(&mut self, c: char) -> Option<FormEvent> {
        match *self.focus {
            FormField::Name => {
                self.form.author.push(c);
                Some(FormEvent::Edited)
            }
            FormField::Body => {
                self.form.body.push(c);
                Some(FormEvent::Edited)
            }
            FormField::Rating => {
                let digit = c.to_digit(10)? as u8;
                if (RATING_MIN..=RATING_MAX).contains(&digit) {
                    self.form.rating = Some(digit);
                    Some(FormEvent::Edited)
                } else {
                    None
                }
            }
            FormField::Recommend => match c {
                'y' => {
                    self.form.recommend = Some(Recommend::Yes);
                    Some(FormEvent::Edited)
                }
                'n' => {
                    self.form.recommend = Some(Recommend::No);
                    Some(FormEvent::Edited)
                }
                _ => None,
            },
        }
    }

    fn backspace(&mut self) -> Option<FormEvent> {
        match *self.focus {
            FormField::Name => self.form.author.pop().map(|_| FormEvent::Edited),
            FormField::Body => self.form.body.pop().map(|_| FormEvent::Edited),
            FormField::Rating => self.form.rating.take().map(|_| FormEvent::Edited),
            FormField::Recommend => self.form.recommend.take().map(|_| FormEvent::Edited),
        }
    }

    /// Left/Right on the choice fields: step the rating, toggle the
    /// recommendation. Text fields ignore horizontal movement.
    fn adjust(&mut self, direction: i8) -> Option<FormEvent> {
        match *self.focus {
            FormField::Rating => {
                let next = match self.form.rating {
                    None => RATING_MIN,
                    Some(r) if direction > 0 => r.saturating_add(1).min(RATING_MAX),
                    Some(r) => r.saturating_sub(1).max(RATING_MIN),
                };
                self.form.rating = Some(next);
                Some(FormEvent::Edited)
            }
            FormField::Recommend => {
                self.form.recommend = Some(match self.form.recommend {
                    None => Recommend::Yes,
                    Some(current) => current.toggled(),
                });
                Some(FormEvent::Edited)
            }
            FormField::Name | FormField::Body => None,
        }
    }
}

/// Column where field values start ("Recommend: " is the widest label).
const VALUE_COLUMN: u16 = 11;

const UNSET: &str = "- not set -";

/// Read-only render of the draft.
pub struct ReviewFormView<'a> {
    pub form: &'a ReviewForm,
    pub focus: FormField,
    /// Whether the form currently receives keystrokes (dims when not).
    pub active: bool,
}

impl ReviewFormView<'_> {
    fn field_line(&self, field: FormField, value: String, present: bool) -> Line<'static> {
        let focused = self.active && field == self.focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if present {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let label = format!("{:<width$}", field.label(), width = VALUE_COLUMN as usize - 1);
        Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(" "),
            Span::styled(value, value_style),
        ])
    }
}

impl Component for ReviewFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let form = self.form;

        let rating_value = match form.rating {
            Some(r) => format!("{r} / {RATING_MAX}  (1-5, ←/→)"),
            None => UNSET.to_string(),
        };
        let recommend_value = match form.recommend {
            Some(r) => format!("{}  (y/n, ←/→)", r.label()),
            None => UNSET.to_string(),
        };

        let mut lines = vec![
            self.field_line(FormField::Name, form.author.clone(), !form.author.is_empty()),
            self.field_line(FormField::Body, form.body.clone(), !form.body.is_empty()),
            self.field_line(FormField::Rating, rating_value, form.rating.is_some()),
            self.field_line(
                FormField::Recommend,
                recommend_value,
                form.recommend.is_some(),
            ),
            Line::from(""),
            Line::styled(
                "↑/↓ field   Enter submit   Esc done",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let error_offset = lines.len() as u16;
        lines.push(Line::from(""));
        frame.render_widget(Paragraph::new(lines), area);

        let errors_area = Rect {
            y: area.y.saturating_add(error_offset + 1),
            height: area.height.saturating_sub(error_offset + 1),
            ..area
        };
        ReviewErrors::new(&form.errors).render(frame, errors_area);

        // Terminal cursor sits at the end of the focused text field.
        if self.active {
            let content = match self.focus {
                FormField::Name => Some(&form.author),
                FormField::Body => Some(&form.body),
                _ => None,
            };
            if let Some(content) = content {
                let row = match self.focus {
                    FormField::Name => 0,
                    _ => 1,
                };
                let x = area.x + VALUE_COLUMN + content.width() as u16;
                frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y + row));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn handle(form: &mut ReviewForm, focus: &mut FormField, event: TuiEvent) -> Option<FormEvent> {
        ReviewFormInput { form, focus }.handle_event(&event)
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Name;

        for expected in [
            FormField::Body,
            FormField::Rating,
            FormField::Recommend,
            FormField::Name,
        ] {
            handle(&mut form, &mut focus, TuiEvent::CursorDown);
            assert_eq!(focus, expected);
        }

        handle(&mut form, &mut focus, TuiEvent::CursorUp);
        assert_eq!(focus, FormField::Recommend);
    }

    #[test]
    fn test_typing_edits_the_focused_text_field() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Name;

        for c in "Al".chars() {
            handle(&mut form, &mut focus, TuiEvent::InputChar(c));
        }
        assert_eq!(form.author, "Al");

        handle(&mut form, &mut focus, TuiEvent::Backspace);
        assert_eq!(form.author, "A");
        assert!(form.body.is_empty());
    }

    #[test]
    fn test_digits_set_rating_and_out_of_range_is_ignored() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Rating;

        assert!(handle(&mut form, &mut focus, TuiEvent::InputChar('0')).is_none());
        assert_eq!(form.rating, None);

        handle(&mut form, &mut focus, TuiEvent::InputChar('4'));
        assert_eq!(form.rating, Some(4));

        assert!(handle(&mut form, &mut focus, TuiEvent::InputChar('9')).is_none());
        assert_eq!(form.rating, Some(4));
    }

    #[test]
    fn test_arrows_step_rating_within_bounds() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Rating;

        handle(&mut form, &mut focus, TuiEvent::CursorRight);
        assert_eq!(form.rating, Some(RATING_MIN));

        handle(&mut form, &mut focus, TuiEvent::CursorRight);
        assert_eq!(form.rating, Some(2));

        form.rating = Some(RATING_MAX);
        handle(&mut form, &mut focus, TuiEvent::CursorRight);
        assert_eq!(form.rating, Some(RATING_MAX));

        handle(&mut form, &mut focus, TuiEvent::CursorLeft);
        assert_eq!(form.rating, Some(RATING_MAX - 1));
    }

    #[test]
    fn test_recommend_keys_and_toggle() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Recommend;

        handle(&mut form, &mut focus, TuiEvent::InputChar('n'));
        assert_eq!(form.recommend, Some(Recommend::No));

        handle(&mut form, &mut focus, TuiEvent::CursorLeft);
        assert_eq!(form.recommend, Some(Recommend::Yes));

        handle(&mut form, &mut focus, TuiEvent::Backspace);
        assert_eq!(form.recommend, None);
    }

    #[test]
    fn test_enter_requests_submit() {
        let mut form = ReviewForm::new();
        let mut focus = FormField::Body;
        assert_eq!(
            handle(&mut form, &mut focus, TuiEvent::Submit),
            Some(FormEvent::SubmitRequested)
        );
    }

    fn render_view(form: &ReviewForm) -> String {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut view = ReviewFormView {
                    form,
                    focus: FormField::Name,
                    active: true,
                };
                view.render(f, f.area());
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

    #[test]
    fn test_view_shows_unset_markers_for_empty_choices() {
        let form = ReviewForm::new();
        let text = render_view(&form);
        assert!(text.contains("Name"));
        assert!(text.contains("Review"));
        assert!(text.contains(UNSET));
    }

    #[test]
    fn test_view_shows_errors_after_failed_submit() {
        let mut form = ReviewForm::new();
        form.errors = vec!["Name required.".to_string(), "Review required.".to_string()];
        let text = render_view(&form);
        assert!(text.contains("Name required."));
        assert!(text.contains("Review required."));
    }

    #[test]
    fn test_view_shows_current_values() {
        let form = ReviewForm {
            author: "Alice".to_string(),
            body: "Great socks".to_string(),
            rating: Some(5),
            recommend: Some(Recommend::Yes),
            errors: Vec::new(),
        };
        let text = render_view(&form);
        assert!(text.contains("Alice"));
        assert!(text.contains("Great socks"));
        assert!(text.contains("5 / 5"));
        assert!(text.contains("yes"));
    }
}
