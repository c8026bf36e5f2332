//! TUI Module - Side-by-side comparison of markdown and generated mini-apps
//!
//! - event_loop: Entry point and terminal lifecycle
//! - render: Frame layout, panels and the mini-app error boundary
//! - apps: One view per mini-app engine
//! - input: Key routing
//! - state: Orchestrator plus view cursors
//! - layout, markdown, utils: Helpers

mod apps;
mod event_loop;
mod input;
pub mod layout;
mod markdown;
mod render;
mod state;
mod utils;

pub use event_loop::{run, TuiOptions};
pub use input::{handle_key, KeyAction};
pub use render::{draw_ui, GENERATING_MESSAGE, RENDER_ERROR_NOTICE};
pub use state::TuiState;
