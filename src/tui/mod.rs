//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! widget state could be re-hosted on a different adapter without changes.
//!
//! ## Event routing
//!
//! Input is modal, switched by which review tab is active:
//!
//! - **Browse** (default): `q`/Esc quit, `←`/`→` and mouse hover select
//!   variants, `a`/`d` add/delete cart entries, `s` flips the info tab,
//!   Tab flips the review tab.
//! - **Form** (the Make a Review tab has focus): keystrokes edit the draft,
//!   `↑`/`↓` move between fields, Enter submits, Esc returns to Browse
//!   without losing the draft.
//!
//! Ctrl+C force-quits in either mode. After every batch of events the loop
//! drains the product's bus subscription, so a review submitted by the form
//! is visible in the Reviews tab within the same turn.
//!
//! ## Redraw strategy
//!
//! Purely event-driven: the loop sleeps in `poll_event_timeout` and only
//! redraws after an event or a bus delivery changed something.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::state::Shop;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FormEvent, FormField, InfoTab, ReviewFormInput, ReviewListState, ReviewTab,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Shop-level keys (variants, cart, tabs, quit).
    Browse,
    /// Keystrokes edit the review form.
    Form,
}

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub info_tab: InfoTab,
    pub review_tab: ReviewTab,
    pub focus: FocusMode,
    pub form_focus: FormField,
    pub review_list: ReviewListState,
    /// Swatch hit areas cached by the product card on each render.
    pub swatch_areas: Vec<Rect>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            info_tab: InfoTab::default(),
            review_tab: ReviewTab::default(),
            focus: FocusMode::Browse,
            form_focus: FormField::default(),
            review_list: ReviewListState::new(),
            swatch_areas: Vec::new(),
        }
    }

    /// The form receives keystrokes only when its tab is visible and focused.
    pub fn form_is_active(&self) -> bool {
        self.focus == FocusMode::Form && self.review_tab == ReviewTab::MakeReview
    }

    /// Context-sensitive key hints for the bottom line.
    pub fn help_line(&self) -> &'static str {
        match self.focus {
            FocusMode::Form => "Esc browse · ↑/↓ field · Enter submit · Tab reviews",
            FocusMode::Browse if self.review_tab == ReviewTab::MakeReview => {
                "q quit · Enter edit form · Tab reviews · a add · d delete · s info"
            }
            FocusMode::Browse => {
                "q quit · ←/→ or hover color · a add · d delete · s info · Tab review form"
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture enables the hover-to-select swatch behavior. The
        // steady block avoids the blink-timer reset caused by continuous
        // cursor repositioning.
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Hide);
    }
}

pub fn run(mut shop: Shop) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &shop, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut shop, &mut tui, &event) == Effect::Quit {
                should_quit = true;
            }
        }

        // Drain the bus so reviews published this turn reach the product.
        if shop.product.pump_reviews() > 0 {
            needs_redraw = true;
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one event. Mode-independent handling first (force quit, hover,
/// scrolling, tab switching), then the modal dispatch.
fn handle_event(shop: &mut Shop, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(shop, Action::Quit),
        // Resize only needs the redraw the caller already flagged.
        TuiEvent::Resize => return Effect::None,
        // Mouse hover — selects swatches in either mode.
        TuiEvent::MouseMove(column, row) => {
            if let Some(index) = ui::hit_test_swatch(*column, *row, &tui.swatch_areas)
                && index != shop.product.selected_index()
            {
                return update(shop, Action::SelectVariant(index));
            }
            return Effect::None;
        }
        // Scrolling always goes to the review list.
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.review_list.handle_event(event);
            return Effect::None;
        }
        // Tab flips the review pane and moves focus with it.
        TuiEvent::Tab => {
            tui.review_tab = tui.review_tab.toggled();
            tui.focus = match tui.review_tab {
                ReviewTab::MakeReview => FocusMode::Form,
                ReviewTab::Reviews => FocusMode::Browse,
            };
            return Effect::None;
        }
        _ => {}
    }

    match tui.focus {
        FocusMode::Form => {
            // Esc hands keys back to Browse; the draft stays.
            if matches!(event, TuiEvent::Escape) {
                tui.focus = FocusMode::Browse;
                return Effect::None;
            }

            let form_event = ReviewFormInput {
                form: &mut shop.review_form,
                focus: &mut tui.form_focus,
            }
            .handle_event(event);

            if form_event == Some(FormEvent::SubmitRequested) {
                match shop.review_form.submit(&shop.bus) {
                    Some(review) => {
                        shop.status_message = format!("Thanks for your review, {}!", review.author);
                        info!("Review submitted by {}", review.author);
                    }
                    None => {
                        shop.status_message = "Review is missing required fields".to_string();
                    }
                }
            }
            Effect::None
        }
        FocusMode::Browse => match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => update(shop, Action::Quit),
            TuiEvent::CursorLeft => {
                let index = shop.product.selected_index().saturating_sub(1);
                update(shop, Action::SelectVariant(index))
            }
            TuiEvent::CursorRight => {
                let last = shop.product.product().variants.len() - 1;
                let index = (shop.product.selected_index() + 1).min(last);
                update(shop, Action::SelectVariant(index))
            }
            TuiEvent::InputChar('a') => {
                // Disabled affordance: out-of-stock variants can't be added.
                if shop.product.in_stock() {
                    let action = shop.product.add_to_cart();
                    update(shop, action)
                } else {
                    shop.status_message = "Out of stock".to_string();
                    Effect::None
                }
            }
            TuiEvent::InputChar('d') => {
                let action = shop.product.delete_from_cart();
                update(shop, action)
            }
            TuiEvent::InputChar('s') => {
                tui.info_tab = tui.info_tab.toggled();
                Effect::None
            }
            // Enter re-enters the form when its tab is already visible.
            TuiEvent::Submit if tui.review_tab == ReviewTab::MakeReview => {
                tui.focus = FocusMode::Form;
                Effect::None
            }
            _ => Effect::None,
        },
    }
}
