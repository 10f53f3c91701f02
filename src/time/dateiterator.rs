use std::fmt;
use std::iter::Skip;

use chrono::{
    Days,
    NaiveDate
};

use crate::time::calendarerror::CalendarError;
use crate::time::rangeofdates::{
    RangeOfDates,
    RangeOfDatesIterator
};

/// Successor view over a [`RangeOfDates`].
///
/// The cursor starts on `start` and moves one day before each yield, so the
/// dates produced are `start + 1` through `end_inclusive`. A single-day range
/// yields nothing. This is the enumeration view with its first element
/// skipped; use [`RangeOfDates::iter`] when `start` itself must be counted.
#[derive(Debug, Clone)]
pub struct DateIterator {
    range_of_dates: RangeOfDates,
    dates: Skip<RangeOfDatesIterator>
}

impl DateIterator {
    pub fn new(start: NaiveDate, end_inclusive: NaiveDate) -> Result<DateIterator, CalendarError> {
        RangeOfDates::new(start, end_inclusive).map(DateIterator::from_range)
    }

    pub(crate) fn from_range(range_of_dates: RangeOfDates) -> DateIterator {
        DateIterator {
            range_of_dates,
            dates: range_of_dates.iter().skip(1)
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.range_of_dates.start()
    }

    pub fn end_inclusive(&self) -> NaiveDate {
        self.range_of_dates.end_inclusive()
    }

    pub fn has_next(&self) -> bool {
        self.dates.len() > 0
    }

    /// Date the cursor currently sits on: `start` before the first advance,
    /// then the last date yielded.
    pub fn current(&self) -> NaiveDate {
        self.end_inclusive() - Days::new(self.dates.len() as u64)
    }

    /// Like `next`, but exhaustion is an error rather than `None`.
    pub fn next_date(&mut self) -> Result<NaiveDate, CalendarError> {
        self.dates.next().ok_or(CalendarError::NoMoreElements)
    }
}

impl Iterator for DateIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        self.dates.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dates.size_hint()
    }
}

impl ExactSizeIterator for DateIterator {}

impl PartialEq for DateIterator {
    fn eq(&self, other: &Self) -> bool {
        self.range_of_dates == other.range_of_dates && self.current() == other.current()
    }
}

impl Eq for DateIterator {}

impl fmt::Display for DateIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.range_of_dates, self.current())
    }
}
