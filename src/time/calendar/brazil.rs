//! Brazilian holidays and business days as plain functions over `NaiveDate`.
//!
//! National holidays are the eight fixed federal dates plus Good Friday.
//! Banking holidays add Carnival, the Monday before it and Corpus Christi,
//! which are not legal holidays but on which banks close.
//!
//! Wherever a function takes `include_saturday`, `false` is the usual choice:
//! Saturday is not a business day unless explicitly included.

use chrono::NaiveDate;

use crate::time::calendar::braziliancalendar::BrazilianCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarError;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::recurringholiday::{
    Holiday,
    HolidayCategory
};

pub use crate::time::recurringholiday::easterrelatedholiday::{
    carnival_date,
    carnival_monday_date,
    corpus_christi_date,
    easter_date,
    good_friday_date
};

static NATIONAL: BrazilianCalendar = BrazilianCalendar::national();
static NATIONAL_INCLUDING_SATURDAY: BrazilianCalendar = BrazilianCalendar::national_including_saturday();
static BANKING: BrazilianCalendar = BrazilianCalendar::banking();

fn national_calendar(include_saturday: bool) -> &'static BrazilianCalendar {
    if include_saturday {
        &NATIONAL_INCLUDING_SATURDAY
    } else {
        &NATIONAL
    }
}

/// Fixed federal holiday or Good Friday. Carnival and Corpus Christi are
/// optional days off, not national holidays.
pub fn is_national_holiday(d: NaiveDate) -> bool {
    NATIONAL.is_holiday(d)
}

/// National holiday, Carnival, Carnival Monday or Corpus Christi.
pub fn is_banking_holiday(d: NaiveDate) -> bool {
    BANKING.is_holiday(d)
}

/// Not Sunday, not Saturday unless `include_saturday`, not a national holiday.
pub fn is_business_day(d: NaiveDate, include_saturday: bool) -> bool {
    national_calendar(include_saturday).is_business_day(d)
}

/// Monday to Friday and not a banking holiday. Saturday never qualifies.
pub fn is_banking_business_day(d: NaiveDate) -> bool {
    BANKING.is_business_day(d)
}

/// Signed number of days from `start` to `end_inclusive`; negative when the
/// bounds are reversed.
pub fn calendar_days(start: NaiveDate, end_inclusive: NaiveDate) -> i64 {
    (end_inclusive - start).num_days()
}

/// Business days between the bounds, both included.
pub fn count_business_days(
    start: NaiveDate,
    end_inclusive: NaiveDate,
    include_saturday: bool
) -> Result<usize, CalendarError> {
    let range = RangeOfDates::new(start, end_inclusive)?;
    Ok(national_calendar(include_saturday).count_business_days(&range))
}

/// Banking business days between the bounds, both included.
pub fn count_banking_business_days(start: NaiveDate, end_inclusive: NaiveDate) -> Result<usize, CalendarError> {
    let range = RangeOfDates::new(start, end_inclusive)?;
    Ok(BANKING.count_business_days(&range))
}

/// First business day strictly after `d`.
///
/// # Panics
/// If the scan runs past `NaiveDate::MAX`.
pub fn next_business_day(d: NaiveDate, include_saturday: bool) -> NaiveDate {
    national_calendar(include_saturday).next_business_day(d)
}

/// First banking business day strictly after `d`.
///
/// # Panics
/// If the scan runs past `NaiveDate::MAX`.
pub fn next_banking_business_day(d: NaiveDate) -> NaiveDate {
    BANKING.next_business_day(d)
}

/// Named holidays of `year` for the given category, sorted by date.
pub fn holidays_of_year(year: i32, category: HolidayCategory) -> Vec<Holiday> {
    BrazilianCalendar::new(category, false).holidays(year)
}
