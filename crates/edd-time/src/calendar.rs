//! `WorkdayCalendar` trait and the shipping calendar.
//!
//! A calendar knows which dates are working days and can advance a date
//! by a number of working days, one calendar day at a time.

use crate::date::Date;
use crate::holiday::HolidaySet;
use crate::weekday::Weekday;
use edd_core::errors::{Error, Result};

/// A calendar of working days.
pub trait WorkdayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_working_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-working day.
    fn is_non_working_day(&self, date: Date) -> bool {
        !self.is_working_day(date)
    }

    /// Advance `from` by `n` working days.
    ///
    /// Steps forward one calendar day at a time; only working days count
    /// toward `n`. At most `horizon_days` single-day steps are taken —
    /// a degenerate calendar (every remaining day excluded) surfaces
    /// [`Error::NoWorkingDay`] instead of walking forever.
    fn advance_working_days(&self, from: Date, n: u32, horizon_days: u32) -> Result<Date> {
        let mut date = from;
        let mut remaining = n;
        let mut stepped = 0u32;
        while remaining > 0 {
            if stepped == horizon_days {
                return Err(Error::NoWorkingDay {
                    horizon: horizon_days,
                });
            }
            date = date.add_days(1)?;
            stepped += 1;
            if self.is_working_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }
}

/// A store's shipping calendar: weekend-work flags plus a holiday set.
///
/// Sunday and Saturday are non-working unless the corresponding flag is
/// set; dates in the holiday set are never working days.
#[derive(Debug, Clone)]
pub struct ShippingCalendar {
    work_saturday: bool,
    work_sunday: bool,
    holidays: HolidaySet,
}

impl ShippingCalendar {
    /// Create a shipping calendar from weekend-work flags and a holiday
    /// set.
    pub fn new(work_saturday: bool, work_sunday: bool, holidays: HolidaySet) -> Self {
        Self {
            work_saturday,
            work_sunday,
            holidays,
        }
    }

    /// Return the holiday set.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl WorkdayCalendar for ShippingCalendar {
    fn name(&self) -> &str {
        "Shipping"
    }

    fn is_working_day(&self, date: Date) -> bool {
        match date.weekday() {
            Weekday::Sunday if !self.work_sunday => false,
            Weekday::Saturday if !self.work_saturday => false,
            _ => !self.holidays.contains(date),
        }
    }
}

/// A calendar where every day is a working day.
#[derive(Debug, Clone, Copy, Default)]
pub struct Everyday;

impl WorkdayCalendar for Everyday {
    fn name(&self) -> &str {
        "Everyday"
    }

    fn is_working_day(&self, _date: Date) -> bool {
        true
    }
}
