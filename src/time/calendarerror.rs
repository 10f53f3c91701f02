use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("The 'endInclusive' parameter must be greater than or equal to the start parameter. Parameters: start = '{start}' - endInclusive = '{end_inclusive}'")]
    InvalidRange {
        start: NaiveDate,
        end_inclusive: NaiveDate
    },

    #[error("no more dates to iterate")]
    NoMoreElements,

    #[error("invalid month/day pair: month = {month}, day = {day}")]
    InvalidMonthDay {
        month: u32,
        day: u32
    }
}
