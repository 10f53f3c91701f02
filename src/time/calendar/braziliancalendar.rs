use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::easterrelatedholiday::{
    MOBILE_HOLIDAYS,
    easter_date
};
use crate::time::recurringholiday::fixeddateholiday::{
    FIXED_HOLIDAYS,
    is_fixed_holiday
};
use crate::time::recurringholiday::recurringholiday::{
    Holiday,
    HolidayCategory,
    RecurringHoliday
};

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct WeekendMask(u8);

impl WeekendMask {
    const SATURDAY: u8 = 1 << 5;
    const SUNDAY: u8 = 1 << 6;

    const fn new(include_saturday: bool) -> Self {
        if include_saturday {
            WeekendMask(Self::SUNDAY)
        } else {
            WeekendMask(Self::SATURDAY | Self::SUNDAY)
        }
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

/// Brazilian holiday calendar for one [`HolidayCategory`].
///
/// Sunday is always a weekend day. Saturday is a weekend day unless a national
/// calendar is built with `include_saturday`; banking calendars never treat
/// Saturday as a business day.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BrazilianCalendar {
    category: HolidayCategory,
    weekends: WeekendMask
}

impl BrazilianCalendar {
    pub const fn national() -> BrazilianCalendar {
        BrazilianCalendar {
            category: HolidayCategory::National,
            weekends: WeekendMask::new(false)
        }
    }

    pub const fn national_including_saturday() -> BrazilianCalendar {
        BrazilianCalendar {
            category: HolidayCategory::National,
            weekends: WeekendMask::new(true)
        }
    }

    pub const fn banking() -> BrazilianCalendar {
        BrazilianCalendar {
            category: HolidayCategory::Banking,
            weekends: WeekendMask::new(false)
        }
    }

    /// `include_saturday` only applies to national calendars.
    pub const fn new(category: HolidayCategory, include_saturday: bool) -> BrazilianCalendar {
        match category {
            HolidayCategory::National if include_saturday => BrazilianCalendar::national_including_saturday(),
            HolidayCategory::National => BrazilianCalendar::national(),
            HolidayCategory::Banking => BrazilianCalendar::banking()
        }
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn includes_saturday(&self) -> bool {
        !self.weekends.is_weekend(Weekday::Sat)
    }

    fn is_mobile_holiday(&self, d: NaiveDate) -> bool {
        let Some(easter) = easter_date(d.year()) else {
            return false;
        };
        let shift_days = (d - easter).num_days();
        MOBILE_HOLIDAYS.iter().any(|h| {
            h.shift_days() == shift_days && self.category.includes(h.category())
        })
    }
}

impl Default for BrazilianCalendar {
    fn default() -> Self {
        BrazilianCalendar::national()
    }
}

impl HolidayCalendar for BrazilianCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        is_fixed_holiday(d) || self.is_mobile_holiday(d)
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let fixed = FIXED_HOLIDAYS
            .iter()
            .filter_map(|h| h.occurrence(year));
        let mobile = MOBILE_HOLIDAYS
            .iter()
            .filter(|h| self.category.includes(h.category()))
            .filter_map(|h| h.occurrence(year));

        let mut holidays: Vec<Holiday> = fixed.chain(mobile).collect();
        holidays.sort_by_key(|h| h.date());
        holidays
    }
}
