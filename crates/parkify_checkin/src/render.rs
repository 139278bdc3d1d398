// --- File: crates/parkify_checkin/src/render.rs ---
use parkify_slots::{BookingStore, CheckinForm, FormField, SlotSummary};
use std::fmt::Write;

/// Cells per grid row.
const GRID_COLUMNS: usize = 5;

pub fn render_header(rate_per_hour: i64, currency: &str) -> String {
    format!("Total Hour Rate: {} {} per Hour\n", rate_per_hour, currency)
}

pub fn render_summary(summary: &SlotSummary) -> String {
    format!(
        "Total Slots: {}   Allocated Slots: {}   Empty Slots: {}\n",
        summary.total, summary.allocated, summary.empty
    )
}

/// The slot grid followed by one detail line per occupied cell.
pub fn render_grid(store: &BookingStore) -> String {
    let mut out = String::new();
    let mut details = Vec::new();

    for row_start in (0..store.total_slots()).step_by(GRID_COLUMNS) {
        let row_end = (row_start + GRID_COLUMNS).min(store.total_slots());
        let cells: Vec<String> = (row_start..row_end)
            .map(|index| {
                let state = match store.find_by_slot(index) {
                    Some(booking) => {
                        details.push(format!(
                            "  slot {}: Booked by: {} ({})",
                            index, booking.user_name, booking.car_number
                        ));
                        "Booked"
                    }
                    None => "Empty",
                };
                format!("[{:>2}] {:<6}", index, state)
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }

    if !details.is_empty() {
        out.push('\n');
        for line in details {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

pub fn render_dialog(form: &CheckinForm, currency: &str, selected_slot: Option<usize>) -> String {
    let mut out = String::new();
    match selected_slot {
        Some(index) => {
            let _ = writeln!(out, "Check-in Details (slot {})", index);
        }
        None => {
            let _ = writeln!(out, "Check-in Details");
        }
    }
    for field in FormField::ALL {
        let _ = writeln!(out, "  {:<15} {}", format!("{}:", field.label()), form.value(field));
    }
    let _ = writeln!(out, "  Total Hours: {}", form.total_hours);
    let _ = writeln!(out, "  Total Amount: {} {}", form.total_amount, currency);
    out
}
