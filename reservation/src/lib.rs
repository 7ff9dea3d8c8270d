mod manager;

use abi::{Error, Reservation, ReservationId, ReservationTime, ThemeId, TimeId};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

/// Postgres-backed gateway for the `reservation` table.
#[derive(Debug, Clone)]
pub struct ReservationDao {
    pool: PgPool,
}

/// Every operation is a single statement. Existence checks are not atomic
/// with the writes that follow them.
#[async_trait]
pub trait ReservationStore {
    /// store a reservation, return it with the id assigned by the database
    async fn insert(&self, rsvp: Reservation) -> Result<Reservation, Error>;
    /// all reservations joined with their time slot and theme
    async fn select_all(&self) -> Result<Vec<Reservation>, Error>;
    /// get a reservation by id
    async fn get(&self, id: ReservationId) -> Result<Reservation, Error>;
    /// delete a reservation, absent ids are ignored
    async fn delete_by_id(&self, id: ReservationId) -> Result<(), Error>;
    /// whether any reservation uses the given time slot
    async fn exist_reservation_time(&self, time_id: TimeId) -> Result<bool, Error>;
    /// whether any reservation uses the given theme
    async fn exist_theme(&self, theme_id: ThemeId) -> Result<bool, Error>;
    /// whether the slot is already booked on that date
    async fn exist_reservation_of(
        &self,
        date: NaiveDate,
        time: &ReservationTime,
    ) -> Result<bool, Error>;
}
