//! # edd-estimate
//!
//! Delivery-date estimation: given a store configuration (daily cutoff,
//! working-day counts, weekend-work flags, holiday list) and an order
//! instant, compute the next valid delivery date by walking forward one
//! calendar day at a time and counting only working days.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `EstimateConfig` — caller-owned estimator configuration.
pub mod config;

/// `DeliveryEstimator` and `DeliveryEstimate`.
pub mod estimator;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::EstimateConfig;
pub use estimator::{DeliveryEstimate, DeliveryEstimator, MAX_HORIZON_DAYS};
