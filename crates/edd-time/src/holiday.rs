//! `HolidaySet` — canonicalization of free-text holiday lists.
//!
//! Shop administrators (or an upstream holiday feed) supply one date per
//! line in a handful of formats. Parsing is a pure function of the raw
//! text, so callers may derive the set once per configuration change and
//! reuse it.

use crate::date::Date;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn iso_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
}

fn dotted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("valid regex"))
}

fn slash_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").expect("valid regex"))
}

/// A set of dates excluded from delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<Date>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a free-text holiday list, one date per line.
    ///
    /// Each trimmed, non-empty line is tested against three shapes, in
    /// priority order:
    ///
    /// 1. `YYYY-MM-DD`
    /// 2. `DD.MM.YYYY`
    /// 3. `MM/DD/YYYY` — slash-separated dates are always read
    ///    month-first, regardless of locale.
    ///
    /// Lines matching none of the shapes, and lines whose components do
    /// not form a real calendar date, are dropped without error.
    /// Duplicates collapse.
    pub fn parse(raw: &str) -> Self {
        let dates = raw.lines().filter_map(parse_line).collect();
        Self { dates }
    }

    /// Add a single date to the set.
    pub fn insert(&mut self, date: Date) {
        self.dates.insert(date);
    }

    /// Return `true` if `date` is in the set.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Return the number of dates in the set.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Canonicalize a single holiday line, or `None` to drop it.
fn parse_line(line: &str) -> Option<Date> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if iso_re().is_match(line) {
        return line.parse().ok();
    }
    if let Some(caps) = dotted_re().captures(line) {
        let day: u8 = caps[1].parse().ok()?;
        let month: u8 = caps[2].parse().ok()?;
        let year: u16 = caps[3].parse().ok()?;
        return Date::from_ymd(year, month, day).ok();
    }
    if let Some(caps) = slash_re().captures(line) {
        // Month-first, matching how the stored lists were written.
        let month: u8 = caps[1].parse().ok()?;
        let day: u8 = caps[2].parse().ok()?;
        let year: u16 = caps[3].parse().ok()?;
        return Date::from_ymd(year, month, day).ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn iso_passes_through() {
        let set = HolidaySet::parse("2025-12-25");
        assert_eq!(set.len(), 1);
        assert!(set.contains(date(2025, 12, 25)));
    }

    #[test]
    fn dotted_is_day_first() {
        let set = HolidaySet::parse("25.12.2025");
        assert!(set.contains(date(2025, 12, 25)));
    }

    #[test]
    fn slash_is_month_first() {
        let set = HolidaySet::parse("12/25/2025");
        assert!(set.contains(date(2025, 12, 25)));
        // 01/02 reads as January 2, not February 1.
        let set = HolidaySet::parse("01/02/2025");
        assert!(set.contains(date(2025, 1, 2)));
        assert!(!set.contains(date(2025, 2, 1)));
    }

    #[test]
    fn formats_are_equivalent() {
        let expected = HolidaySet::parse("2025-12-25");
        assert_eq!(HolidaySet::parse("25.12.2025"), expected);
        assert_eq!(HolidaySet::parse("12/25/2025"), expected);
    }

    #[test]
    fn garbage_and_blanks_dropped() {
        let set = HolidaySet::parse("not a date\n\n   \n2025/12/25\n12-25-2025");
        assert!(set.is_empty());
    }

    #[test]
    fn impossible_dates_dropped() {
        // Well-shaped lines that are not real calendar dates.
        let set = HolidaySet::parse("2025-13-40\n30.02.2025\n13/01/2025");
        assert!(set.is_empty());
    }

    #[test]
    fn mixed_list_with_duplicates() {
        let raw = "2025-12-25\n25.12.2025\n  2026-01-01  \njunk\n12/31/2025";
        let set = HolidaySet::parse(raw);
        assert_eq!(set.len(), 3);
        assert!(set.contains(date(2025, 12, 25)));
        assert!(set.contains(date(2025, 12, 31)));
        assert!(set.contains(date(2026, 1, 1)));
    }

    #[test]
    fn parse_is_pure() {
        let raw = "2025-12-25\n01.05.2026";
        assert_eq!(HolidaySet::parse(raw), HolidaySet::parse(raw));
    }

    #[test]
    fn insert_adds() {
        let mut set = HolidaySet::empty();
        assert!(set.is_empty());
        set.insert(date(2025, 3, 14));
        set.insert(date(2025, 3, 14));
        assert_eq!(set.len(), 1);
        assert!(set.contains(date(2025, 3, 14)));
    }
}
