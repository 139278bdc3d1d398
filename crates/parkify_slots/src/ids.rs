// --- File: crates/parkify_slots/src/ids.rs ---
use chrono::Utc;

/// Issues time-based booking ids: epoch milliseconds as a decimal string.
///
/// Ids from one generator strictly increase, even within one millisecond.
#[derive(Debug, Default)]
pub struct BookingIdGenerator {
    last: i64,
}

impl BookingIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    pub fn next_id_at(&mut self, now_millis: i64) -> String {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}
