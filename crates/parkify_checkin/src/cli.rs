// --- File: crates/parkify_checkin/src/cli.rs ---
use clap::{ArgAction, Parser, Subcommand};
use parkify_common::{external_service_error, validation_error, ParkifyError};
use parkify_slots::datetime::parse_local;
use parkify_slots::{calculate_total, BookedSlotsApi, FormField};
use std::fmt::Write;
use tracing::{warn, Level};

use crate::page::{CheckinPage, SlotClick, SubmitOutcome, CAPACITY_WARNING};

#[derive(Debug, Parser)]
#[command(name = "parkify-checkin", version, about = "Parking slot check-in")]
pub struct Cli {
    /// Base URL of the booked-slots service (overrides `api.base_url`)
    #[arg(long, env = "PARKIFY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the rate, slot counts and the slot grid
    Status,
    /// Price a stay without booking it
    Quote {
        /// Check-in time, e.g. 2025-03-14T10:00
        #[arg(long)]
        check_in: String,
        /// Check-out time, e.g. 2025-03-14T12:30
        #[arg(long)]
        check_out: String,
    },
    /// Check a car in
    Checkin {
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        car_number: String,
        #[arg(long)]
        check_in: String,
        #[arg(long)]
        check_out: String,
        /// Preferred slot; the lowest free slot is used when taken or omitted
        #[arg(long)]
        slot: Option<usize>,
    },
    /// Click a slot: clears it when occupied
    Click { index: usize },
    /// Interactive session on the check-in page
    Interactive,
}

/// Prices a stay offline.
pub fn quote(
    check_in: &str,
    check_out: &str,
    rate_per_hour: i64,
    currency: &str,
) -> Result<String, ParkifyError> {
    let check_in_at = parse_local(check_in)
        .ok_or_else(|| validation_error(format!("invalid check-in time: {}", check_in)))?;
    let check_out_at = parse_local(check_out)
        .ok_or_else(|| validation_error(format!("invalid check-out time: {}", check_out)))?;
    let totals = calculate_total(check_in_at, check_out_at, rate_per_hour)
        .ok_or_else(|| validation_error("check-out must be after check-in"))?;

    Ok(format!(
        "Total Hours: {}\nTotal Amount: {} {}\n",
        totals.hours, totals.amount, currency
    ))
}

/// Runs a one-shot command against a page and returns what to print.
///
/// `Quote` never touches the network; the other commands mount the page
/// first. `Interactive` is driven by the binary, not here.
pub async fn execute<A: BookedSlotsApi>(
    command: Command,
    page: &mut CheckinPage<A>,
) -> Result<String, ParkifyError> {
    if !matches!(command, Command::Quote { .. }) && !page.mount().await {
        return Err(external_service_error(
            "bookedSlots",
            "could not fetch booked slots",
        ));
    }

    let mut out = String::new();
    match command {
        Command::Quote {
            check_in,
            check_out,
        } => return quote(&check_in, &check_out, page.rate_per_hour(), page.currency()),
        Command::Status | Command::Interactive => {}
        Command::Checkin {
            user_name,
            car_number,
            check_in,
            check_out,
            slot,
        } => {
            page.open_dialog(slot);
            page.change(FormField::UserName, user_name);
            page.change(FormField::CarNumber, car_number);
            page.change(FormField::CheckInTime, check_in.as_str());
            page.change(FormField::CheckOutTime, check_out.as_str());

            let stay = parse_local(&check_in)
                .zip(parse_local(&check_out))
                .and_then(|(at, until)| calculate_total(at, until, page.rate_per_hour()));
            if stay.is_none() {
                warn!(
                    "Check-out {:?} is not after check-in {:?}; recording {} hour(s)",
                    check_out,
                    check_in,
                    page.form().total_hours
                );
                let _ = writeln!(
                    out,
                    "Warning: check-out is not after check-in; the stay is recorded as {} hour(s)",
                    page.form().total_hours
                );
            }

            match page.submit().await {
                SubmitOutcome::CheckedIn(booking) => {
                    let _ = writeln!(
                        out,
                        "Checked in {} on slot {}: {} hour(s), {} {}",
                        booking.car_number,
                        booking
                            .slot_index
                            .map(|i| i.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                        booking.total_hours,
                        booking.total_amount,
                        page.currency()
                    );
                }
                SubmitOutcome::NoSlotsAvailable => {
                    let _ = writeln!(out, "{}", CAPACITY_WARNING);
                }
                SubmitOutcome::Failed => {
                    return Err(external_service_error("bookedSlots", "check-in failed"));
                }
            }
        }
        Command::Click { index } => match page.click_slot(index).await {
            SlotClick::Cleared(booking) => {
                let _ = writeln!(out, "Cleared slot {} ({})", index, booking.car_number);
            }
            SlotClick::FormOpened(index) => {
                let _ = writeln!(
                    out,
                    "Slot {} is empty; use `checkin --slot {}` to book it",
                    index, index
                );
            }
            SlotClick::Failed => {
                return Err(external_service_error("bookedSlots", "clearing the slot failed"));
            }
            SlotClick::OutOfRange => {
                return Err(validation_error(format!(
                    "there is no slot {} (slots are 0..{})",
                    index,
                    page.store().total_slots()
                )));
            }
        },
    }

    page.close_dialog();
    out.push_str(&page.render());
    Ok(out)
}
