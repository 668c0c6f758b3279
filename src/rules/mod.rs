//! Klondike rules.
//!
//! - `validator`: pure placement predicates
//! - `executor`: the selection protocol and stock draw, as pure transitions
//! - `win`: terminal-state detection
//!
//! The session calls into these but never interprets card placement
//! directly.

pub mod executor;
pub mod validator;
pub mod win;

pub use executor::{click_card, click_pile, draw_stock, moving_run, Run, Transition};
pub use validator::{can_place_on_foundation, can_place_on_tableau};
pub use win::{detect_win, is_won};
