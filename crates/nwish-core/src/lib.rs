//! # nwish-core - Core Domain Types
//!
//! Foundation crate for nwish. Provides the error taxonomy, logging setup and
//! the immutable [`Document`] shown by the screen.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Documents (`document`)
//! - [`Document`] - Read-only text loaded once at startup
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nwish_core::prelude::*;
//! ```

pub mod document;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all nwish crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use document::Document;
pub use error::{Error, Result, ResultExt};
