use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::time::rangeofdates::RangeOfDates;
use crate::time::recurringholiday::recurringholiday::Holiday;

const ONE_DAY: Days = Days::new(1);

pub trait HolidayCalendar: Send + Sync {
    /// True on a named holiday, whatever the weekday.
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// Named holidays observed in `year`, sorted by date.
    fn holidays(&self, year: i32) -> Vec<Holiday>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }

    /// Moves `n` business days away from `horizon`, forwards for positive `n`
    /// and backwards for negative `n`. `horizon` itself is never counted.
    ///
    /// # Panics
    /// If the walk leaves the range `NaiveDate` can represent.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day: fn(NaiveDate) -> NaiveDate = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            let business = self.is_business_day(d);
            trace!(date = %d, business, "scanning for business day");
            m -= business as u32;
        }
        d
    }

    /// Smallest business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, 1)
    }

    /// Largest business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, -1)
    }

    /// Business days in the range, both bounds included.
    fn count_business_days(&self, range: &RangeOfDates) -> usize {
        range.iter()
            .filter(|d| self.is_business_day(*d))
            .count()
    }
}
