//! nwish-app - Application state and orchestration for nwish
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! loading spinner and the document screen: [`Message`] in, [`update`] mutates
//! [`AppState`], and [`frame::view`] composes the next frame. It knows nothing
//! about the terminal library; `nwish-tui` adapts crossterm events into
//! messages and paints the composed frame.

pub mod config;
pub mod decorations;
pub mod frame;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pages;
pub mod process;
pub mod screen;
pub mod signals;
pub mod spinner;
pub mod state;
mod text;
pub mod viewport;

// Re-export primary types
pub use decorations::DecorationStyle;
pub use frame::{view, FrameLine, FrameView, NavSegment};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, MouseScroll};
pub use pages::Pages;
pub use screen::ScreenState;
pub use spinner::SpinnerState;
pub use state::{AppState, Phase};
pub use viewport::Viewport;
