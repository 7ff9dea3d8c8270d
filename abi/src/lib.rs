mod config;
mod error;
mod types;

pub use config::{Config, DbConfig};
pub use error::Error;
pub use types::*;

pub type ReservationId = i64;
pub type TimeId = i64;
pub type ThemeId = i64;

/// validate the data structure, raise error if invalid
pub trait Validator {
    fn validate(&self) -> Result<(), Error>;
}
