pub mod configuration;
pub mod configurationerror;

pub mod time {
    pub mod utility;
    pub mod calendarerror;
    pub mod monthday;
    pub mod rangeofdates;
    pub mod dateiterator;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod braziliancalendar;
        pub mod brazil;
    }
}
