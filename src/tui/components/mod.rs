//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and keep nothing between frames:
//! - `TitleBar`: round progress, score and best score
//! - `Prompt`: the country to find
//! - `HelpBar`: key hints and scoring rule
//! - `DialogView`: feedback / score modal
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `FlagBoard`: the three flags; `FlagBoardState` keeps the selection and
//!   where each card was drawn so clicks can be mapped back to a choice
//!
//! Components receive external data as "props", never by reaching into
//! `App` themselves:
//!
//! ```rust,ignore
//! TitleBar::new(round, SET_LENGTH, score, best, status).render(frame, area);
//! ```

mod dialog;
mod flag_board;
mod help_bar;
mod prompt;
mod title_bar;

pub use dialog::DialogView;
pub use flag_board::{BoardEvent, FlagBoard, FlagBoardState};
pub use help_bar::HelpBar;
pub use prompt::Prompt;
pub use title_bar::TitleBar;
