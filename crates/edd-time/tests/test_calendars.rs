//! Integration tests exercising `ShippingCalendar` against parsed
//! holiday lists, the way the estimator uses them together.

use edd_time::{Date, HolidaySet, ShippingCalendar, WorkdayCalendar};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect the non-working days in the inclusive range `[from, to]`.
fn non_working_days(cal: &dyn WorkdayCalendar, from: Date, to: Date) -> Vec<Date> {
    let mut days = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_non_working_day(d) {
            days.push(d);
        }
        d += 1;
    }
    days
}

#[test]
fn christmas_week_2025() {
    // Mixed-format list covering Christmas and the New Year.
    let holidays = HolidaySet::parse("2025-12-25\n26.12.2025\n01/01/2026");
    let cal = ShippingCalendar::new(false, false, holidays);

    // 2025-12-22 is a Monday.
    let excluded = non_working_days(&cal, date(2025, 12, 22), date(2026, 1, 2));
    assert_eq!(
        excluded,
        vec![
            date(2025, 12, 25), // Christmas (Thursday)
            date(2025, 12, 26), // Boxing Day (Friday)
            date(2025, 12, 27), // Saturday
            date(2025, 12, 28), // Sunday
            date(2026, 1, 1),   // New Year's Day (Thursday)
        ]
    );
}

#[test]
fn saturday_work_shrinks_exclusions() {
    let weekends_off = ShippingCalendar::new(false, false, HolidaySet::empty());
    let saturdays_on = ShippingCalendar::new(true, false, HolidaySet::empty());

    let from = date(2025, 9, 1);
    let to = date(2025, 9, 14);
    assert_eq!(non_working_days(&weekends_off, from, to).len(), 4);
    assert_eq!(
        non_working_days(&saturdays_on, from, to),
        vec![date(2025, 9, 7), date(2025, 9, 14)]
    );
}

#[test]
fn walk_through_a_holiday_bridge() {
    // Thursday and Friday are holidays; Friday evening orders cross the
    // whole bridge to the next Monday.
    let holidays = HolidaySet::parse("2025-09-04\n2025-09-05");
    let cal = ShippingCalendar::new(false, false, holidays);
    let wed = date(2025, 9, 3);
    assert_eq!(cal.advance_working_days(wed, 1, 3650).unwrap(), date(2025, 9, 8));
    assert_eq!(cal.advance_working_days(wed, 2, 3650).unwrap(), date(2025, 9, 9));
}

#[test]
fn trait_object_usable() {
    let cal: Box<dyn WorkdayCalendar> = Box::new(ShippingCalendar::new(
        true,
        true,
        HolidaySet::parse("2025-09-06"),
    ));
    assert_eq!(cal.name(), "Shipping");
    assert!(!cal.is_working_day(date(2025, 9, 6)));
    assert!(cal.is_working_day(date(2025, 9, 7)));
}
