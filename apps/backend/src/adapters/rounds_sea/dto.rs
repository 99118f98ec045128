//! DTOs for rounds_sea adapter.

use time::OffsetDateTime;

/// A state change applied to a room's round row at `at`.
#[derive(Debug, Clone, Copy)]
pub struct RoundTransition {
    pub room_id: i64,
    pub at: OffsetDateTime,
}

impl RoundTransition {
    pub fn now(room_id: i64) -> Self {
        Self {
            room_id,
            at: OffsetDateTime::now_utc(),
        }
    }
}
