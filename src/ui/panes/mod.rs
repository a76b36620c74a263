//! TUI pane rendering modules
//!
//! Each pane is a stateless render function fed from the playback
//! controller's current step.
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, colored by resolved highlight
//! - [`details`]: algorithm metadata, current step message and counters, legend
//! - [`status`]: status bar with position, speed, keybindings and playback state

pub mod bars;
pub mod details;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use details::render_details_pane;
pub use status::render_status_bar;
