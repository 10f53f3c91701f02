use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' is already registered")]
    DuplicateNameError(String),

    #[error("calendar '{0}': banking calendars never include Saturday")]
    SaturdayOnBankingCalendar(String)
}
