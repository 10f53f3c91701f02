use std::fmt;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendarerror::CalendarError;
use crate::time::utility::max_days_of_month;

/// A day of the year without the year, e.g. `12-25`.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "MonthDayJsonProp")]
pub struct MonthDay {
    month: u32,
    day: u32
}

#[derive(Deserialize)]
struct MonthDayJsonProp {
    month: u32,
    day: u32
}

impl TryFrom<MonthDayJsonProp> for MonthDay {
    type Error = CalendarError;

    fn try_from(prop: MonthDayJsonProp) -> Result<Self, Self::Error> {
        MonthDay::new(prop.month, prop.day)
    }
}

impl MonthDay {
    /// February 29 is accepted; it simply has no date in common years.
    pub fn new(month: u32, day: u32) -> Result<MonthDay, CalendarError> {
        if day >= 1 && day <= max_days_of_month(month) {
            Ok(MonthDay { month, day })
        } else {
            Err(CalendarError::InvalidMonthDay { month, day })
        }
    }

    /// Unchecked constructor for compile-time tables. Callers guarantee validity.
    pub(crate) const fn of(month: u32, day: u32) -> MonthDay {
        MonthDay { month, day }
    }

    pub fn from_date(d: NaiveDate) -> MonthDay {
        MonthDay { month: d.month(), day: d.day() }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(d: NaiveDate) -> Self {
        MonthDay::from_date(d)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_year() {
        let d1 = NaiveDate::from_ymd_opt(1990, 12, 25).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2031, 12, 25).unwrap();
        assert_eq!(MonthDay::from_date(d1), MonthDay::from(d2));
        assert_eq!(MonthDay::from_date(d1), MonthDay::new(12, 25).unwrap());
    }

    #[test]
    fn rejects_impossible_days() {
        assert_eq!(
            MonthDay::new(4, 31),
            Err(CalendarError::InvalidMonthDay { month: 4, day: 31 })
        );
        assert!(MonthDay::new(0, 1).is_err());
        assert!(MonthDay::new(13, 1).is_err());
        assert!(MonthDay::new(1, 0).is_err());
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        let leap_day = MonthDay::new(2, 29).unwrap();
        assert_eq!(leap_day.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(leap_day.in_year(2023), None);
    }

    #[test]
    fn display_uses_iso_month_day_form() {
        assert_eq!(MonthDay::new(4, 21).unwrap().to_string(), "--04-21");
    }

    #[test]
    fn deserialization_validates() {
        let md: MonthDay = serde_json::from_str(r#"{"month": 9, "day": 7}"#).unwrap();
        assert_eq!(md, MonthDay::new(9, 7).unwrap());
        assert!(serde_json::from_str::<MonthDay>(r#"{"month": 2, "day": 30}"#).is_err());
    }
}
