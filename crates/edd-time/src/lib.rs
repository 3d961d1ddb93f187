//! # edd-time
//!
//! Date, weekday, time-of-day, holiday-set, and working-day calendar
//! types for the estimated-delivery workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `WorkdayCalendar` trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `TimeOfDay` and `LocalDateTime`.
pub mod datetime;

/// `HolidaySet` — canonicalized holiday lists.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Everyday, ShippingCalendar, WorkdayCalendar};
pub use date::Date;
pub use datetime::{LocalDateTime, TimeOfDay};
pub use holiday::HolidaySet;
pub use weekday::Weekday;
