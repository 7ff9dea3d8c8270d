mod reservation;
mod reservation_time;
mod theme;

pub use reservation::{Reservation, ReservationBuilder};
pub use reservation_time::ReservationTime;
pub use theme::Theme;

/// a name is valid when it has at least one non-whitespace character
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
