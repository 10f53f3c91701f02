use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Deserialize};

/// Which calendar observes a holiday.
///
/// Banking calendars observe every national holiday plus the traditional bank
/// closures, so `Banking` includes `National`.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayCategory {
    National,
    Banking
}

impl HolidayCategory {
    /// True if a calendar of category `self` observes holidays of category `other`.
    #[inline]
    pub fn includes(&self, other: HolidayCategory) -> bool {
        other <= *self
    }
}

/// A concrete occurrence of a recurring holiday.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Holiday {
    date: NaiveDate,
    name: &'static str,
    category: HolidayCategory
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &'static str, category: HolidayCategory) -> Holiday {
        Holiday { date, name, category }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }
}

pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &'static str;

    fn category(&self) -> HolidayCategory;

    /// The holiday's date in `year`, if it has one.
    fn date_in(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.date_in(d.year()) == Some(d)
    }

    fn occurrence(&self, year: i32) -> Option<Holiday> {
        self.date_in(year)
            .map(|d| Holiday::new(d, self.name(), self.category()))
    }
}
