// --- File: crates/parkify_slots/src/store.rs ---
use tracing::debug;

use crate::error::SlotsError;
use crate::logic::{slot_summary, SlotSummary};
use crate::models::Booking;

/// The client's in-memory view of the booked slots.
///
/// Ordered as received / appended. Lookups are linear scans; the grid is small.
#[derive(Debug, Clone)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    total_slots: usize,
}

impl BookingStore {
    pub fn new(total_slots: usize) -> Self {
        Self {
            bookings: Vec::new(),
            total_slots,
        }
    }

    pub fn total_slots(&self) -> usize {
        self.total_slots
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn has_capacity(&self) -> bool {
        self.bookings.len() < self.total_slots
    }

    pub fn summary(&self) -> SlotSummary {
        slot_summary(self.total_slots, self.bookings.len())
    }

    /// Replaces the whole sequence with a freshly fetched list.
    ///
    /// Records without a usable `slot_index` (missing, outside the grid, or a
    /// cell an earlier record already holds) are given the lowest free cell,
    /// in list order, so every booking that counts toward capacity is on the
    /// grid and can be cleared.
    pub fn replace_all(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.place_unslotted();
    }

    fn place_unslotted(&mut self) {
        let mut taken = vec![false; self.total_slots];
        let mut unplaced = Vec::new();
        for (position, booking) in self.bookings.iter().enumerate() {
            match booking.slot_index {
                Some(index) if index < self.total_slots && !taken[index] => taken[index] = true,
                _ => unplaced.push(position),
            }
        }

        for position in unplaced {
            let Some(free) = taken.iter().position(|t| !t) else {
                break;
            };
            taken[free] = true;
            let booking = &mut self.bookings[position];
            debug!(
                "Placing booking {} (slot {:?}) in free slot {}",
                booking.id, booking.slot_index, free
            );
            booking.slot_index = Some(free);
        }
    }

    pub fn find_by_slot(&self, slot_index: usize) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.slot_index == Some(slot_index))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// The `preferred` cell if it is inside the grid and free, else the lowest free cell.
    pub fn free_slot(&self, preferred: Option<usize>) -> Option<usize> {
        if let Some(index) = preferred {
            if index < self.total_slots && self.find_by_slot(index).is_none() {
                return Some(index);
            }
        }
        (0..self.total_slots).find(|index| self.find_by_slot(*index).is_none())
    }

    /// Appends a booking, refusing once every slot is taken.
    pub fn push(&mut self, booking: Booking) -> Result<(), SlotsError> {
        if !self.has_capacity() {
            return Err(SlotsError::NoSlotsAvailable {
                total: self.total_slots,
            });
        }
        self.bookings.push(booking);
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<Booking> {
        let position = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(position))
    }
}
