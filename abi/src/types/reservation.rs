use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, Row};

use crate::{types::is_blank, Error, ReservationId, ReservationTime, Theme, Validator};

/// A booking of a theme at a given date and time slot.
///
/// Values are immutable once built. Use [`Reservation::new`] or
/// [`ReservationBuilder`]; both reject a blank name, a missing date or a
/// missing time.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(private, name = "private_build"))]
#[serde(try_from = "ReservationFields")]
pub struct Reservation {
    #[builder(default)]
    id: ReservationId,
    #[builder(setter(into))]
    name: String,
    date: NaiveDate,
    time: ReservationTime,
    #[builder(setter(strip_option), default)]
    theme: Option<Theme>,
}

#[derive(Deserialize)]
struct ReservationFields {
    #[serde(default)]
    id: ReservationId,
    name: String,
    date: NaiveDate,
    time: ReservationTime,
    #[serde(default)]
    theme: Option<Theme>,
}

impl TryFrom<ReservationFields> for Reservation {
    type Error = Error;

    fn try_from(f: ReservationFields) -> Result<Self, Self::Error> {
        let mut builder = ReservationBuilder::default();
        builder.id(f.id).name(f.name).date(f.date).time(f.time);
        if let Some(theme) = f.theme {
            builder.theme(theme);
        }
        builder.build()
    }
}

impl ReservationBuilder {
    pub fn build(&self) -> Result<Reservation, Error> {
        let rsvp = self.private_build().map_err(|e| match e {
            ReservationBuilderError::UninitializedField("date") => Error::InvalidDate,
            ReservationBuilderError::UninitializedField("time") => Error::InvalidTime,
            // the only other required field is the name
            _ => Error::InvalidName,
        })?;
        rsvp.validate()?;
        Ok(rsvp)
    }
}

impl Reservation {
    /// a reservation that is not bound to a theme yet
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: ReservationTime,
    ) -> Result<Self, Error> {
        ReservationBuilder::default()
            .name(name)
            .date(date)
            .time(time)
            .build()
    }

    /// copy of this reservation carrying the identifier assigned by storage
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &ReservationTime {
        &self.time
    }

    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }
}

impl Validator for Reservation {
    fn validate(&self) -> Result<(), Error> {
        if is_blank(&self.name) {
            return Err(Error::InvalidName);
        }
        Ok(())
    }
}

impl FromRow<'_, PgRow> for Reservation {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let time = ReservationTime::with_id(row.try_get("time_id")?, row.try_get("time_value")?);
        let theme = Theme::with_id(
            row.try_get("theme_id")?,
            row.try_get::<String, _>("theme_name")?,
            row.try_get::<String, _>("theme_description")?,
            row.try_get::<String, _>("theme_thumbnail")?,
        )
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            date: row.try_get("date")?,
            time,
            theme: Some(theme),
        })
    }
}
