use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("sqlx error: {0}")]
    DbError(sqlx::Error),

    #[error("Failed to read configuration file")]
    ConfigReadError,

    #[error("Failed to parse configuration file")]
    ConfigParseError,

    #[error("Reservation name must not be blank")]
    InvalidName,

    #[error("Reservation date is required")]
    InvalidDate,

    #[error("Reservation time is required")]
    InvalidTime,

    #[error("Theme name must not be blank")]
    InvalidThemeName,

    #[error("Invalid reservation time id {0}")]
    InvalidTimeId(i64),

    #[error("Invalid theme id {0}")]
    InvalidThemeId(i64),

    #[error("Reservation has no theme")]
    MissingTheme,

    #[error("No reservation found by the given condition")]
    NotFound,
}

impl Error {
    /// errors raised while building a value, before any storage is touched
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidName
                | Error::InvalidDate
                | Error::InvalidTime
                | Error::InvalidThemeName
                | Error::InvalidTimeId(_)
                | Error::InvalidThemeId(_)
                | Error::MissingTheme
        )
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // sqlx errors carry no comparable payload
            (Self::DbError(_), Self::DbError(_)) => true,
            (Self::ConfigReadError, Self::ConfigReadError) => true,
            (Self::ConfigParseError, Self::ConfigParseError) => true,
            (Self::InvalidName, Self::InvalidName) => true,
            (Self::InvalidDate, Self::InvalidDate) => true,
            (Self::InvalidTime, Self::InvalidTime) => true,
            (Self::InvalidThemeName, Self::InvalidThemeName) => true,
            (Self::InvalidTimeId(v1), Self::InvalidTimeId(v2)) => v1 == v2,
            (Self::InvalidThemeId(v1), Self::InvalidThemeId(v2)) => v1 == v2,
            (Self::MissingTheme, Self::MissingTheme) => true,
            (Self::NotFound, Self::NotFound) => true,
            _ => false,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Error::NotFound,
            _ => Error::DbError(e),
        }
    }
}
