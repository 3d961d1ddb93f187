//! The delivery-date estimator.

use crate::config::EstimateConfig;
use edd_core::errors::Result;
use edd_time::{Date, HolidaySet, LocalDateTime, ShippingCalendar, WorkdayCalendar};
use tracing::debug;

/// Maximum number of single-day steps the working-day walk may take
/// before giving up with [`Error::NoWorkingDay`](edd_core::Error).
pub const MAX_HORIZON_DAYS: u32 = 3650;

/// The outcome of a delivery-date estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryEstimate {
    /// The estimated delivery date.
    pub delivery_date: Date,
    /// Whether the order instant fell strictly before the daily cutoff.
    pub is_before_cutoff: bool,
}

/// Computes delivery dates for a fixed configuration.
///
/// Construction validates the configuration and parses the holiday list
/// once; every subsequent [`estimate`](Self::estimate) call reuses the
/// derived [`ShippingCalendar`]. Rebuild the estimator when the
/// configuration changes.
#[derive(Debug, Clone)]
pub struct DeliveryEstimator {
    config: EstimateConfig,
    calendar: ShippingCalendar,
}

impl DeliveryEstimator {
    /// Build an estimator from a configuration.
    ///
    /// # Errors
    /// Returns `Error::Configuration` if the configuration invariants
    /// do not hold.
    pub fn new(config: EstimateConfig) -> Result<Self> {
        config.validate()?;
        let holidays = HolidaySet::parse(&config.holidays_raw);
        debug!(holidays = holidays.len(), "parsed holiday list");
        let calendar =
            ShippingCalendar::new(config.work_saturday, config.work_sunday, holidays);
        Ok(Self { config, calendar })
    }

    /// Return the configuration this estimator was built from.
    pub fn config(&self) -> &EstimateConfig {
        &self.config
    }

    /// Estimate the delivery date for an order placed at `now`.
    ///
    /// Orders strictly before the day's cutoff get `min_days` working
    /// days; orders at or after it get `max_days`. The walk starts from
    /// `now`'s calendar date and advances one day at a time, counting
    /// only working days.
    ///
    /// Pure with respect to `(configuration, now)`: identical inputs
    /// always produce identical estimates.
    ///
    /// # Errors
    /// Returns `Error::NoWorkingDay` if no delivery date exists within
    /// [`MAX_HORIZON_DAYS`], and `Error::Date` if the walk runs off the
    /// end of the supported date range.
    pub fn estimate(&self, now: LocalDateTime) -> Result<DeliveryEstimate> {
        let cutoff = LocalDateTime::new(now.date(), self.config.cutoff);
        let is_before_cutoff = now < cutoff;
        let days_to_add = if is_before_cutoff {
            self.config.min_days
        } else {
            self.config.max_days
        };

        let delivery_date =
            self.calendar
                .advance_working_days(now.date(), days_to_add, MAX_HORIZON_DAYS)?;

        debug!(%delivery_date, is_before_cutoff, days_to_add, "estimated delivery date");
        Ok(DeliveryEstimate {
            delivery_date,
            is_before_cutoff,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edd_time::TimeOfDay;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn at(y: u16, m: u8, d: u8, h: u8, min: u8, s: u8) -> LocalDateTime {
        LocalDateTime::new(date(y, m, d), TimeOfDay::new(h, min, s).unwrap())
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = EstimateConfig {
            min_days: 0,
            max_days: 0,
            ..Default::default()
        };
        assert!(DeliveryEstimator::new(config).is_err());
    }

    #[test]
    fn cutoff_boundary_is_strict() {
        let estimator = DeliveryEstimator::new(EstimateConfig {
            work_saturday: true,
            work_sunday: true,
            ..Default::default()
        })
        .unwrap();

        // 2025-09-03 is a Wednesday; default cutoff is 14:00.
        let before = estimator.estimate(at(2025, 9, 3, 13, 59, 59)).unwrap();
        assert!(before.is_before_cutoff);
        assert_eq!(before.delivery_date, date(2025, 9, 4));

        let at_cutoff = estimator.estimate(at(2025, 9, 3, 14, 0, 0)).unwrap();
        assert!(!at_cutoff.is_before_cutoff);
        assert_eq!(at_cutoff.delivery_date, date(2025, 9, 5));
    }

    #[test]
    fn estimate_is_idempotent() {
        let estimator = DeliveryEstimator::new(EstimateConfig {
            holidays_raw: "2025-09-04".into(),
            ..Default::default()
        })
        .unwrap();
        let now = at(2025, 9, 3, 10, 0, 0);
        assert_eq!(
            estimator.estimate(now).unwrap(),
            estimator.estimate(now).unwrap()
        );
    }

    #[test]
    fn config_accessor_reflects_input() {
        let config = EstimateConfig::default();
        let estimator = DeliveryEstimator::new(config.clone()).unwrap();
        assert_eq!(estimator.config(), &config);
    }
}
