//! Error types for the estimated-delivery workspace.
//!
//! All fallible operations across the workspace return the single
//! `thiserror`-derived [`Error`] enum. Configuration invariants are
//! checked with the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date construction or arithmetic produced an out-of-range result.
    #[error("date error: {0}")]
    Date(String),

    /// Time-of-day component out of range.
    #[error("time error: {0}")]
    Time(String),

    /// An estimator configuration invariant was violated.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The working-day walk exhausted its horizon without finding
    /// enough working days.
    #[error("no working day found within {horizon} days")]
    NoWorkingDay {
        /// Maximum number of single-day steps that were allowed.
        horizon: u32,
    },
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a configuration invariant.
///
/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use edd_core::{ensure, errors::Result};
/// fn at_least_one(days: u32) -> Result<u32> {
///     ensure!(days >= 1, "days must be at least 1, got {days}");
///     Ok(days)
/// }
/// assert!(at_least_one(1).is_ok());
/// assert!(at_least_one(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}
