//! Estimator configuration.

use edd_core::ensure;
use edd_core::errors::Result;
use edd_time::TimeOfDay;

/// Configuration for a [`DeliveryEstimator`](crate::DeliveryEstimator).
///
/// Owned by the caller and immutable per calculation. The settings
/// layer that produces it is expected to have collected the values from
/// the shop administrator; [`validate`](Self::validate) re-checks the
/// invariants the estimator relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateConfig {
    /// Daily time-of-day boundary separating `min_days` from `max_days`
    /// commitments, in the store's timezone.
    pub cutoff: TimeOfDay,
    /// Working days to add when the order lands strictly before the
    /// cutoff. Must be at least 1.
    pub min_days: u32,
    /// Working days to add at or after the cutoff. Must be at least
    /// `min_days`.
    pub max_days: u32,
    /// Whether Saturdays are delivery days.
    pub work_saturday: bool,
    /// Whether Sundays are delivery days.
    pub work_sunday: bool,
    /// Free-text holiday list, one date per line (see
    /// [`HolidaySet::parse`](edd_time::HolidaySet::parse)).
    pub holidays_raw: String,
}

impl EstimateConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_days >= 1,
            "min_days must be at least 1, got {}",
            self.min_days
        );
        ensure!(
            self.max_days >= self.min_days,
            "max_days ({}) must not be less than min_days ({})",
            self.max_days,
            self.min_days
        );
        Ok(())
    }
}

impl Default for EstimateConfig {
    /// The defaults the original storefront plugin shipped with:
    /// 14:00 cutoff, 1–2 working days, weekends off, no holidays.
    fn default() -> Self {
        Self {
            cutoff: TimeOfDay::hm(14, 0).expect("14:00 is a valid time"),
            min_days: 1,
            max_days: 2,
            work_saturday: false,
            work_sunday: false,
            holidays_raw: String::new(),
        }
    }
}
