use chrono::{
    Duration,
    NaiveDate
};

use super::recurringholiday::{
    HolidayCategory,
    RecurringHoliday
};

pub const CARNIVAL_SHIFT_DAYS: i64 = -47;
pub const CARNIVAL_MONDAY_SHIFT_DAYS: i64 = -48;
pub const GOOD_FRIDAY_SHIFT_DAYS: i64 = -2;
pub const CORPUS_CHRISTI_SHIFT_DAYS: i64 = 60;

/// Western (Gregorian) Easter Sunday of `year`, by the anonymous Gregorian
/// algorithm.
///
/// The algorithm belongs to the Gregorian reform, so results before 1583 are
/// proleptic values with no historical meaning. Returns `None` only when the
/// year is outside what `NaiveDate` can represent.
pub fn easter_date(year: i32) -> Option<NaiveDate> {
    // Euclidean division equals truncation for non-negative years and keeps
    // every intermediate in range for negative ones.
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (1 + n % 31) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn shifted_easter(year: i32, shift_days: i64) -> Option<NaiveDate> {
    easter_date(year)?.checked_add_signed(Duration::days(shift_days))
}

/// Carnival Tuesday, 47 days before Easter.
pub fn carnival_date(year: i32) -> Option<NaiveDate> {
    shifted_easter(year, CARNIVAL_SHIFT_DAYS)
}

/// The Monday before Carnival Tuesday.
pub fn carnival_monday_date(year: i32) -> Option<NaiveDate> {
    shifted_easter(year, CARNIVAL_MONDAY_SHIFT_DAYS)
}

pub fn good_friday_date(year: i32) -> Option<NaiveDate> {
    shifted_easter(year, GOOD_FRIDAY_SHIFT_DAYS)
}

pub fn corpus_christi_date(year: i32) -> Option<NaiveDate> {
    shifted_easter(year, CORPUS_CHRISTI_SHIFT_DAYS)
}

/// A holiday at a fixed number of days from Easter Sunday.
#[derive(Debug, Clone, Copy)]
pub struct EasterRelatedHoliday {
    name: &'static str,
    category: HolidayCategory,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub(crate) const fn new(name: &'static str, category: HolidayCategory, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { name, category, shift_days }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> HolidayCategory {
        self.category
    }

    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        shifted_easter(year, self.shift_days)
    }
}

/// Easter-related days observed in Brazil. Only Good Friday is a federal
/// holiday; the others are traditional bank closures.
pub static MOBILE_HOLIDAYS: [EasterRelatedHoliday; 4] = [
    EasterRelatedHoliday::new("Carnival Monday", HolidayCategory::Banking, CARNIVAL_MONDAY_SHIFT_DAYS),
    EasterRelatedHoliday::new("Carnival", HolidayCategory::Banking, CARNIVAL_SHIFT_DAYS),
    EasterRelatedHoliday::new("Good Friday", HolidayCategory::National, GOOD_FRIDAY_SHIFT_DAYS),
    EasterRelatedHoliday::new("Corpus Christi", HolidayCategory::Banking, CORPUS_CHRISTI_SHIFT_DAYS)
];

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_sundays() {
        assert_eq!(easter_date(1962), Some(date(1962, 4, 22)));
        assert_eq!(easter_date(2000), Some(date(2000, 4, 23)));
        assert_eq!(easter_date(2021), Some(date(2021, 4, 4)));
        assert_eq!(easter_date(2022), Some(date(2022, 4, 17)));
        assert_eq!(easter_date(2023), Some(date(2023, 4, 9)));
        assert_eq!(easter_date(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_date(2025), Some(date(2025, 4, 20)));
    }

    #[test]
    fn extreme_easter_dates() {
        // earliest and latest possible dates
        assert_eq!(easter_date(1818), Some(date(1818, 3, 22)));
        assert_eq!(easter_date(1943), Some(date(1943, 4, 25)));
        assert_eq!(easter_date(2285), Some(date(2285, 3, 22)));
    }

    #[test]
    fn mobile_days_for_2023() {
        assert_eq!(carnival_date(2023), Some(date(2023, 2, 21)));
        assert_eq!(carnival_monday_date(2023), Some(date(2023, 2, 20)));
        assert_eq!(good_friday_date(2023), Some(date(2023, 4, 7)));
        assert_eq!(corpus_christi_date(2023), Some(date(2023, 6, 8)));
    }

    #[test]
    fn mobile_days_fall_on_expected_weekdays() {
        for year in 1900..=2100 {
            assert_eq!(carnival_date(year).unwrap().weekday(), Weekday::Tue);
            assert_eq!(carnival_monday_date(year).unwrap().weekday(), Weekday::Mon);
            assert_eq!(good_friday_date(year).unwrap().weekday(), Weekday::Fri);
            assert_eq!(corpus_christi_date(year).unwrap().weekday(), Weekday::Thu);
        }
    }

    #[test]
    fn pre_reform_years_still_yield_dates() {
        let easter = easter_date(1000).unwrap();
        assert_eq!(easter.weekday(), Weekday::Sun);
        assert!(easter_date(-500).is_some());
    }

    #[test]
    fn unrepresentable_year_yields_none() {
        assert_eq!(easter_date(i32::MAX), None);
    }

    #[test]
    fn recurring_holiday_uses_its_shift() {
        let good_friday = &MOBILE_HOLIDAYS[2];
        assert_eq!(good_friday.name(), "Good Friday");
        assert_eq!(good_friday.date_in(1962), Some(date(1962, 4, 20)));
        assert!(good_friday.is_holiday(date(1962, 4, 20)));
        assert!(!good_friday.is_holiday(date(1962, 4, 22)));
    }
}
