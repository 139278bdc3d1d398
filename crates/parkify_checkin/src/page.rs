//! State behind the check-in page.
//!
//! [`CheckinPage`] owns the booked slots, the dialog and the in-progress form.
//! Every UI event is one `&mut self` method, so mutations are serialized.
//! Remote failures are logged and leave local state as it was; the capacity
//! warning is the only failure the user is shown.

use parkify_common::log_error;
use parkify_config::ParkingConfig;
use parkify_slots::{
    BookedSlotsApi, Booking, BookingIdGenerator, BookingStore, CheckinForm, FormField, SlotSummary,
};
use tracing::{info, warn};

use crate::render;

pub const CAPACITY_WARNING: &str = "No parking slots available!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    CheckedIn(Booking),
    /// Every slot is taken; nothing was sent.
    NoSlotsAvailable,
    /// The remote create failed. The error has been logged and the dialog stays open.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotClick {
    /// The slot was occupied and its booking is now gone, remotely and locally.
    Cleared(Booking),
    /// The slot was free; the check-in dialog is open for it.
    FormOpened(usize),
    /// The remote delete failed. Local state is unchanged.
    Failed,
    OutOfRange,
}

pub struct CheckinPage<A: BookedSlotsApi> {
    api: A,
    store: BookingStore,
    form: CheckinForm,
    dialog_open: bool,
    selected_slot: Option<usize>,
    rate_per_hour: i64,
    currency: String,
    ids: BookingIdGenerator,
}

impl<A: BookedSlotsApi> CheckinPage<A> {
    pub fn new(api: A, parking: &ParkingConfig) -> Self {
        Self {
            api,
            store: BookingStore::new(parking.total_slots),
            form: CheckinForm::default(),
            dialog_open: false,
            selected_slot: None,
            rate_per_hour: parking.rate_per_hour,
            currency: parking.currency.clone(),
            ids: BookingIdGenerator::new(),
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn form(&self) -> &CheckinForm {
        &self.form
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected_slot
    }

    pub fn rate_per_hour(&self) -> i64 {
        self.rate_per_hour
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn summary(&self) -> SlotSummary {
        self.store.summary()
    }

    /// Loads the booked slots. On failure the error is logged and the page
    /// keeps whatever it had.
    pub async fn mount(&mut self) -> bool {
        match self.api.list().await {
            Ok(bookings) => {
                info!("Fetched {} booked slot(s)", bookings.len());
                self.store.replace_all(bookings);
                true
            }
            Err(e) => {
                log_error(e, "Error fetching booked slots");
                false
            }
        }
    }

    /// Opens the dialog, optionally aimed at a particular cell.
    pub fn open_dialog(&mut self, slot: Option<usize>) {
        self.dialog_open = true;
        self.selected_slot = slot;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.selected_slot = None;
    }

    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.form.apply_change(field, value, self.rate_per_hour);
    }

    /// Checks in the current form.
    ///
    /// Refused without a network call once every slot is taken. Otherwise the
    /// booking goes to the selected cell if it is still free, else the lowest
    /// free cell.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.store.has_capacity() {
            warn!("{}", CAPACITY_WARNING);
            return SubmitOutcome::NoSlotsAvailable;
        }

        let slot_index = self.store.free_slot(self.selected_slot);
        let booking = Booking::from_form(&self.form, self.ids.next_id(), slot_index);

        match self.api.create(&booking).await {
            Ok(created) => {
                if let Err(e) = self.store.push(created.clone()) {
                    log_error(e, "Error recording check-in locally");
                }
                info!(
                    "Checked in {} on slot {:?} ({} hour(s), {} {})",
                    created.car_number,
                    created.slot_index,
                    created.total_hours,
                    created.total_amount,
                    self.currency
                );
                self.form = CheckinForm::default();
                self.close_dialog();
                SubmitOutcome::CheckedIn(created)
            }
            Err(e) => {
                log_error(e, "Error during check-in");
                SubmitOutcome::Failed
            }
        }
    }

    /// Clears an occupied slot or opens the form for a free one.
    pub async fn click_slot(&mut self, index: usize) -> SlotClick {
        if index >= self.store.total_slots() {
            warn!(
                "Ignoring click on slot {} (grid has {})",
                index,
                self.store.total_slots()
            );
            return SlotClick::OutOfRange;
        }

        let Some(booking) = self.store.find_by_slot(index).cloned() else {
            self.open_dialog(Some(index));
            return SlotClick::FormOpened(index);
        };

        match self.api.delete(&booking.id).await {
            Ok(()) => {
                self.store.remove_by_id(&booking.id);
                info!("Cleared slot {} ({})", index, booking.car_number);
                SlotClick::Cleared(booking)
            }
            Err(e) => {
                log_error(e, "Error clearing slot");
                SlotClick::Failed
            }
        }
    }

    /// The whole page as text: header, counts, grid and, when open, the dialog.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&render::render_header(self.rate_per_hour, &self.currency));
        out.push('\n');
        out.push_str(&render::render_summary(&self.summary()));
        out.push('\n');
        out.push_str(&render::render_grid(&self.store));
        if self.dialog_open {
            out.push('\n');
            out.push_str(&render::render_dialog(
                &self.form,
                &self.currency,
                self.selected_slot,
            ));
        }
        out
    }
}
