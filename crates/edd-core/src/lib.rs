//! # edd-core
//!
//! Error types and the `ensure!` macro shared across the
//! estimated-delivery workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` convenience macro.
pub mod errors;

pub use errors::{Error, Result};
