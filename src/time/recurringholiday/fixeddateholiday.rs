use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::time::monthday::MonthDay;
use super::recurringholiday::{
    HolidayCategory,
    RecurringHoliday
};

/// A holiday falling on the same month and day every year, never moved off
/// weekends.
#[derive(Debug, Clone, Copy)]
pub struct FixedDateHoliday {
    name: &'static str,
    month_day: MonthDay
}

impl FixedDateHoliday {
    pub(crate) const fn new(name: &'static str, month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday {
            name,
            month_day: MonthDay::of(month, day)
        }
    }

    pub fn month_day(&self) -> MonthDay {
        self.month_day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> HolidayCategory {
        HolidayCategory::National
    }

    fn date_in(&self, year: i32) -> Option<NaiveDate> {
        self.month_day.in_year(year)
    }
}

/// Brazilian federal holidays with a fixed date.
pub static FIXED_HOLIDAYS: [FixedDateHoliday; 8] = [
    FixedDateHoliday::new("Universal Fraternization Day", 1, 1),
    FixedDateHoliday::new("Tiradentes", 4, 21),
    FixedDateHoliday::new("Labour Day", 5, 1),
    FixedDateHoliday::new("Independence Day", 9, 7),
    FixedDateHoliday::new("Our Lady of Aparecida", 10, 12),
    FixedDateHoliday::new("All Souls' Day", 11, 2),
    FixedDateHoliday::new("Proclamation of the Republic", 11, 15),
    FixedDateHoliday::new("Christmas Day", 12, 25)
];

static FIXED_HOLIDAY_SET: LazyLock<HashSet<MonthDay>> = LazyLock::new(|| {
    FIXED_HOLIDAYS.iter().map(|h| h.month_day()).collect()
});

#[inline]
pub fn is_fixed_holiday(d: NaiveDate) -> bool {
    FIXED_HOLIDAY_SET.contains(&MonthDay::from_date(d))
}
