//! nwish-tui - Terminal UI for nwish
//!
//! Owns everything that touches the terminal: crossterm event polling, the
//! tick timer, color theme and painting the frames composed by `nwish-app`.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod tick;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
pub use theme::Theme;
