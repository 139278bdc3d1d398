// --- File: crates/parkify_slots/src/logic.rs ---
use chrono::NaiveDateTime;
use serde::Serialize;

pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Derived cost of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingTotals {
    pub hours: i64,
    pub amount: i64,
}

/// Counts shown above the slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotSummary {
    pub total: usize,
    pub allocated: usize,
    pub empty: usize,
}

/// Every started hour is charged in full: `hours = ceil(elapsed_ms / 1h)`,
/// `amount = hours * rate`.
///
/// Returns `None` unless `check_out` is strictly after `check_in`.
pub fn calculate_total(
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
    rate_per_hour: i64,
) -> Option<BookingTotals> {
    if check_out <= check_in {
        return None;
    }
    let elapsed_ms = (check_out - check_in).num_milliseconds();
    // elapsed_ms > 0 here, so this is the ceiling without float rounding.
    let hours = (elapsed_ms + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR;
    Some(BookingTotals {
        hours,
        amount: hours * rate_per_hour,
    })
}

/// The remote collection may hold more records than the grid has cells, so
/// the empty count saturates at zero.
pub fn slot_summary(total: usize, allocated: usize) -> SlotSummary {
    SlotSummary {
        total,
        allocated,
        empty: total.saturating_sub(allocated),
    }
}
