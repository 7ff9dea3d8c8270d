use abi::Config;
use reservation::{ReservationDao, ReservationStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let filename =
        std::env::var("RESERVATION_CONFIG").unwrap_or_else(|_| "./reservation.yml".to_string());
    info!("config file: {}", filename);
    let config = Config::load(&filename)?;

    let dao = ReservationDao::from_config(&config.db).await?;
    for rsvp in dao.select_all().await? {
        info!(
            id = rsvp.id(),
            name = rsvp.name(),
            date = %rsvp.date(),
            start_at = %rsvp.time().start_at,
            theme = rsvp.theme().map(|t| t.name()).unwrap_or_default(),
            "reservation"
        );
    }
    Ok(())
}
