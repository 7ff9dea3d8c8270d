use crate::{ReservationDao, ReservationStore};
use abi::{DbConfig, Error, Reservation, ReservationId, ReservationTime, ThemeId, TimeId};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use tracing::{debug, info, instrument};

const SELECT_JOINED: &str = r#"
    SELECT
        r.id,
        r.name,
        r.date,
        rt.id AS time_id,
        rt.start_at AS time_value,
        t.id AS theme_id,
        t.name AS theme_name,
        t.description AS theme_description,
        t.thumbnail AS theme_thumbnail
    FROM reservation AS r
    INNER JOIN reservation_time AS rt ON r.time_id = rt.id
    INNER JOIN theme AS t ON r.theme_id = t.id
"#;

#[async_trait]
impl ReservationStore for ReservationDao {
    #[instrument(skip(self, rsvp), fields(date = %rsvp.date(), time_id = rsvp.time().id))]
    async fn insert(&self, rsvp: Reservation) -> Result<Reservation, Error> {
        let theme = rsvp.theme().ok_or(Error::MissingTheme)?;
        if !rsvp.time().is_persisted() {
            return Err(Error::InvalidTimeId(rsvp.time().id));
        }
        if !theme.is_persisted() {
            return Err(Error::InvalidThemeId(theme.id()));
        }

        let id: ReservationId = sqlx::query(
            r#"
            INSERT INTO reservation (name, date, time_id, theme_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(rsvp.name())
        .bind(rsvp.date())
        .bind(rsvp.time().id)
        .bind(theme.id())
        .fetch_one(&self.pool)
        .await?
        .try_get(0)?;

        info!(id, "reservation inserted");
        Ok(rsvp.with_id(id))
    }

    #[instrument(skip(self))]
    async fn select_all(&self) -> Result<Vec<Reservation>, Error> {
        let sql = format!("{} ORDER BY r.id", SELECT_JOINED);
        let rsvps: Vec<Reservation> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        debug!(count = rsvps.len(), "reservations loaded");
        Ok(rsvps)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: ReservationId) -> Result<Reservation, Error> {
        let sql = format!("{} WHERE r.id = $1", SELECT_JOINED);
        let rsvp = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(rsvp)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ReservationId) -> Result<(), Error> {
        let ret = sqlx::query("DELETE FROM reservation WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(rows = ret.rows_affected(), "reservation deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn exist_reservation_time(&self, time_id: TimeId) -> Result<bool, Error> {
        let exists =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM reservation WHERE time_id = $1)")
                .bind(time_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn exist_theme(&self, theme_id: ThemeId) -> Result<bool, Error> {
        let exists =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM reservation WHERE theme_id = $1)")
                .bind(theme_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn exist_reservation_of(
        &self,
        date: NaiveDate,
        time: &ReservationTime,
    ) -> Result<bool, Error> {
        let exists = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM reservation WHERE date = $1 AND time_id = $2)",
        )
        .bind(date)
        .bind(time.id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}

impl ReservationDao {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn from_config(config: &DbConfig) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;
        info!(
            host = %config.host,
            dbname = %config.dbname,
            "connected to reservation database"
        );
        Ok(Self::new(pool))
    }
}
