//! Test doubles for the booked-slots API.

use async_trait::async_trait;
use mockall::mock;
use parkify_config::ParkingConfig;
use parkify_slots::{BookedSlotsApi, Booking, SlotsError};

use crate::page::CheckinPage;

mock! {
    pub BookedSlots {}

    #[async_trait]
    impl BookedSlotsApi for BookedSlots {
        async fn list(&self) -> Result<Vec<Booking>, SlotsError>;
        async fn fetch(&self, id: &str) -> Result<Booking, SlotsError>;
        async fn create(&self, booking: &Booking) -> Result<Booking, SlotsError>;
        async fn delete(&self, id: &str) -> Result<(), SlotsError>;
    }
}

pub fn booking(id: &str, slot: usize) -> Booking {
    Booking {
        id: id.to_string(),
        user_name: format!("user-{}", id),
        car_number: format!("CAR-{}", id),
        check_in_time: None,
        check_out_time: None,
        total_hours: 1,
        total_amount: 10,
        slot_index: Some(slot),
    }
}

/// Bookings filling slots `0..count`.
pub fn bookings(count: usize) -> Vec<Booking> {
    (0..count).map(|i| booking(&format!("b{}", i), i)).collect()
}

pub fn api_listing(existing: Vec<Booking>) -> MockBookedSlots {
    let mut api = MockBookedSlots::new();
    api.expect_list().returning(move || Ok(existing.clone()));
    api
}

pub async fn mounted_page(api: MockBookedSlots) -> CheckinPage<MockBookedSlots> {
    let mut page = CheckinPage::new(api, &ParkingConfig::default());
    assert!(page.mount().await);
    page
}

pub fn upstream_down() -> SlotsError {
    SlotsError::Api {
        status: 503,
        message: "unavailable".to_string(),
    }
}
