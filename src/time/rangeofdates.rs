use std::fmt;
use std::ops::RangeInclusive;

use chrono::{
    Days,
    NaiveDate
};
use tracing::debug;

use crate::time::calendarerror::CalendarError;
use crate::time::dateiterator::DateIterator;

/// Inclusive span of consecutive dates, `start <= end_inclusive`.
///
/// Two ways to walk it:
/// - [`RangeOfDates::iter`] enumerates every date from `start` to
///   `end_inclusive`, both included. Counting utilities use this view.
/// - [`RangeOfDates::successors`] is a [`DateIterator`], whose cursor sits on
///   `start` and advances before yielding, so its first date is `start + 1`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RangeOfDates {
    start: NaiveDate,
    end_inclusive: NaiveDate
}

impl RangeOfDates {
    pub fn new(start: NaiveDate, end_inclusive: NaiveDate) -> Result<RangeOfDates, CalendarError> {
        if end_inclusive < start {
            debug!(%start, %end_inclusive, "rejected reversed date range");
            return Err(CalendarError::InvalidRange { start, end_inclusive });
        }
        Ok(RangeOfDates { start, end_inclusive })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end_inclusive(&self) -> NaiveDate {
        self.end_inclusive
    }

    /// Signed day count `end_inclusive - start`; a one-day range has zero.
    pub fn calendar_days(&self) -> i64 {
        (self.end_inclusive - self.start).num_days()
    }

    /// Number of dates the enumeration view yields.
    pub fn len(&self) -> usize {
        (self.calendar_days() + 1) as usize
    }

    /// Always false, a valid range holds at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        (d >= self.start) && (d <= self.end_inclusive)
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            range_of_dates: *self,
            index: 0,
        }
    }

    pub fn successors(&self) -> DateIterator {
        DateIterator::from_range(*self)
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl TryFrom<RangeInclusive<NaiveDate>> for RangeOfDates {
    type Error = CalendarError;

    fn try_from(range: RangeInclusive<NaiveDate>) -> Result<Self, Self::Error> {
        RangeOfDates::new(*range.start(), *range.end())
    }
}

impl<'a> IntoIterator for &'a RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RangeOfDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end_inclusive)
    }
}

/// Enumeration view: `start`, `start + 1`, ..., `end_inclusive`.
#[derive(Debug, Clone)]
pub struct RangeOfDatesIterator {
    range_of_dates: RangeOfDates,
    index: usize,
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates.start() + Days::new(self.index as u64);
            self.index += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeOfDatesIterator {}
