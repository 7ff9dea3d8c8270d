use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::TimeId;

/// a bookable time slot, owned by the `reservation_time` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationTime {
    pub id: TimeId,
    pub start_at: NaiveTime,
}

impl ReservationTime {
    /// a slot that has not been stored yet
    pub fn new(start_at: NaiveTime) -> Self {
        Self { id: 0, start_at }
    }

    pub fn with_id(id: TimeId, start_at: NaiveTime) -> Self {
        Self { id, start_at }
    }

    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
