// Drives the check-in page against a real bookedSlots service on a local port.

use parkify_api::{routes, BookingRepository};
use parkify_checkin::{CheckinPage, SlotClick, SubmitOutcome};
use parkify_config::{ApiConfig, ParkingConfig};
use parkify_slots::{BookedSlotsApi, FormField, HttpBookedSlotsClient};
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = routes(Arc::new(BookingRepository::in_memory()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("backend stopped");
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> HttpBookedSlotsClient {
    HttpBookedSlotsClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .expect("client")
}

fn fill_form(page: &mut CheckinPage<HttpBookedSlotsClient>, car: &str) {
    page.change(FormField::UserName, "Asha");
    page.change(FormField::CarNumber, car);
    page.change(FormField::CheckInTime, "2025-03-14T10:00");
    page.change(FormField::CheckOutTime, "2025-03-14T12:30");
}

#[tokio::test]
async fn test_check_in_then_clear_round_trips_through_the_service() {
    let base_url = spawn_backend().await;
    let remote = client_for(&base_url);
    let mut page = CheckinPage::new(client_for(&base_url), &ParkingConfig::default());

    assert!(page.mount().await);
    assert!(page.store().is_empty());

    page.open_dialog(Some(4));
    fill_form(&mut page, "KA-01-1234");
    let SubmitOutcome::CheckedIn(created) = page.submit().await else {
        panic!("check-in should succeed");
    };
    assert_eq!(created.slot_index, Some(4));
    assert_eq!(created.total_hours, 3);
    assert_eq!(created.total_amount, 30);

    let stored = remote.list().await.expect("list");
    assert_eq!(stored, vec![created.clone()]);
    assert_eq!(remote.fetch(&created.id).await.expect("fetch"), created);

    // A second page sees the same booking after mounting.
    let mut other = CheckinPage::new(client_for(&base_url), &ParkingConfig::default());
    assert!(other.mount().await);
    assert_eq!(other.summary().allocated, 1);

    let SlotClick::Cleared(cleared) = page.click_slot(4).await else {
        panic!("slot 4 should be cleared");
    };
    assert_eq!(cleared.id, created.id);
    assert!(remote.list().await.expect("list").is_empty());
    assert_eq!(page.summary().allocated, 0);
}

#[tokio::test]
async fn test_eleventh_check_in_is_refused() {
    let base_url = spawn_backend().await;
    let remote = client_for(&base_url);
    let mut page = CheckinPage::new(client_for(&base_url), &ParkingConfig::default());
    assert!(page.mount().await);

    for i in 0..10 {
        fill_form(&mut page, &format!("CAR-{}", i));
        assert!(matches!(page.submit().await, SubmitOutcome::CheckedIn(_)));
    }

    fill_form(&mut page, "CAR-10");
    assert_eq!(page.submit().await, SubmitOutcome::NoSlotsAvailable);
    assert_eq!(remote.list().await.expect("list").len(), 10);
    assert_eq!(page.summary().empty, 0);
}
