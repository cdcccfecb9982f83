//! # TUI Components
//!
//! All UI components for the terminal storefront.
//!
//! ## Component Architecture
//!
//! Two patterns, following the core/adapter split:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as borrows:
//! - `TitleBar`: product title, cart counter, status message
//! - `DetailsList`: bullet list of product facts
//! - `ReviewErrors`: validation messages from the last submit attempt
//! - `TabStrip`: the two-entry tab header shared by both panes
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose state must survive between frames keep that state in
//! `TuiState` (or in the core `Shop`) and are wrapped each frame:
//! - `ProductCard`: caches swatch rectangles for hover hit-testing
//! - `ReviewList`: scroll position (`ReviewListState`)
//! - `ReviewFormInput`/`ReviewFormView`: field focus plus the core draft
//!
//! Components receive external data as props, never by reaching into global
//! state, so dependencies stay explicit and each file is testable on its
//! own with `TestBackend`.

pub mod details_list;
pub mod info_pane;
pub mod product_card;
pub mod review_errors;
pub mod review_form;
pub mod review_list;
pub mod review_pane;
pub mod tabs;
pub mod title_bar;

pub use details_list::DetailsList;
pub use info_pane::InfoPane;
pub use product_card::ProductCard;
pub use review_errors::ReviewErrors;
pub use review_form::{FormEvent, FormField, ReviewFormInput, ReviewFormView};
pub use review_list::{ReviewList, ReviewListState};
pub use review_pane::ReviewPane;
pub use tabs::{InfoTab, ReviewTab, TabStrip};
pub use title_bar::TitleBar;
