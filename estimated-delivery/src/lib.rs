//! # estimated-delivery
//!
//! Business-day delivery date estimation for e-commerce storefronts.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `edd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! estimated-delivery = "0.1"
//! ```
//!
//! ```rust
//! use estimated_delivery::{
//!     Date, DeliveryEstimator, EstimateConfig, LocalDateTime, TimeOfDay,
//! };
//!
//! // 14:00 cutoff, 1–2 working days, weekends off, Christmas excluded.
//! let config = EstimateConfig {
//!     holidays_raw: "2025-12-25".into(),
//!     ..Default::default()
//! };
//! let estimator = DeliveryEstimator::new(config).unwrap();
//!
//! // An order on Wednesday 2025-09-03 at 10:00, before the cutoff.
//! let now = LocalDateTime::new(
//!     Date::from_ymd(2025, 9, 3).unwrap(),
//!     TimeOfDay::hm(10, 0).unwrap(),
//! );
//! let estimate = estimator.estimate(now).unwrap();
//! assert!(estimate.is_before_cutoff);
//! assert_eq!(estimate.delivery_date.to_string(), "2025-09-04");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub use edd_core as core;

/// Date, weekday, holiday-set, and calendar types.
pub use edd_time as time;

/// The delivery-date estimator.
pub use edd_estimate as estimate;

pub use edd_core::{Error, Result};
pub use edd_estimate::{DeliveryEstimate, DeliveryEstimator, EstimateConfig, MAX_HORIZON_DAYS};
pub use edd_time::{
    Date, Everyday, HolidaySet, LocalDateTime, ShippingCalendar, TimeOfDay, Weekday,
    WorkdayCalendar,
};
