#[cfg(test)]
mod tests {
    use crate::page::{CheckinPage, SlotClick, SubmitOutcome};
    use crate::test_support::{
        api_listing, booking, bookings, mounted_page, upstream_down, MockBookedSlots,
    };
    use parkify_config::ParkingConfig;
    use parkify_slots::FormField;

    fn fill_form(page: &mut CheckinPage<MockBookedSlots>) {
        page.change(FormField::UserName, "Asha");
        page.change(FormField::CarNumber, "KA-01-1234");
        page.change(FormField::CheckInTime, "2025-03-14T10:00");
        page.change(FormField::CheckOutTime, "2025-03-14T12:30");
    }

    #[tokio::test]
    async fn test_mount_loads_booked_slots() {
        let page = mounted_page(api_listing(bookings(3))).await;

        let summary = page.summary();
        assert_eq!((summary.total, summary.allocated, summary.empty), (10, 3, 7));
        assert!(page.store().find_by_slot(2).is_some());
    }

    #[tokio::test]
    async fn test_mount_failure_is_logged_and_page_stays_empty() {
        let mut api = MockBookedSlots::new();
        api.expect_list().returning(|| Err(upstream_down()));

        let mut page = CheckinPage::new(api, &ParkingConfig::default());
        assert!(!page.mount().await);
        assert!(page.store().is_empty());
    }

    #[tokio::test]
    async fn test_form_change_updates_totals() {
        let mut page = mounted_page(api_listing(vec![])).await;
        fill_form(&mut page);

        assert_eq!(page.form().total_hours, 3);
        assert_eq!(page.form().total_amount, 30);
    }

    #[tokio::test]
    async fn test_submit_posts_and_appends() {
        let mut api = api_listing(bookings(2));
        api.expect_create()
            .times(1)
            .returning(|b| Ok(b.clone()));
        let mut page = mounted_page(api).await;

        page.open_dialog(None);
        fill_form(&mut page);

        let SubmitOutcome::CheckedIn(created) = page.submit().await else {
            panic!("expected a check-in");
        };
        assert_eq!(created.user_name, "Asha");
        assert_eq!(created.total_hours, 3);
        assert_eq!(created.total_amount, 30);
        // Slots 0 and 1 are taken.
        assert_eq!(created.slot_index, Some(2));
        assert!(!created.id.is_empty());

        assert_eq!(page.store().len(), 3);
        assert_eq!(page.store().bookings().last(), Some(&created));
        assert!(!page.is_dialog_open());
        assert_eq!(page.form().user_name, "");
    }

    #[tokio::test]
    async fn test_submit_uses_the_clicked_slot() {
        let mut api = api_listing(bookings(1));
        api.expect_create().returning(|b| Ok(b.clone()));
        let mut page = mounted_page(api).await;

        assert_eq!(page.click_slot(6).await, SlotClick::FormOpened(6));
        assert!(page.is_dialog_open());
        assert_eq!(page.selected_slot(), Some(6));

        fill_form(&mut page);
        let SubmitOutcome::CheckedIn(created) = page.submit().await else {
            panic!("expected a check-in");
        };
        assert_eq!(created.slot_index, Some(6));
        assert_eq!(page.selected_slot(), None);
    }

    #[tokio::test]
    async fn test_eleventh_check_in_is_refused_without_network_call() {
        let mut api = api_listing(bookings(10));
        api.expect_create().times(0);
        let mut page = mounted_page(api).await;

        page.open_dialog(None);
        fill_form(&mut page);

        assert_eq!(page.submit().await, SubmitOutcome::NoSlotsAvailable);
        assert_eq!(page.store().len(), 10);
        assert!(page.is_dialog_open());
    }

    #[tokio::test]
    async fn test_ten_check_ins_fill_the_grid_then_capacity_warning() {
        let mut api = api_listing(vec![]);
        api.expect_create()
            .times(10)
            .returning(|b| Ok(b.clone()));
        let mut page = mounted_page(api).await;

        for _ in 0..10 {
            fill_form(&mut page);
            assert!(matches!(
                page.submit().await,
                SubmitOutcome::CheckedIn(_)
            ));
        }
        assert_eq!(page.summary().empty, 0);
        assert_eq!(page.submit().await, SubmitOutcome::NoSlotsAvailable);

        let mut slots: Vec<usize> = page
            .store()
            .bookings()
            .iter()
            .filter_map(|b| b.slot_index)
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_dialog_and_state() {
        let mut api = api_listing(vec![]);
        api.expect_create().returning(|_| Err(upstream_down()));
        let mut page = mounted_page(api).await;

        page.open_dialog(None);
        fill_form(&mut page);

        assert_eq!(page.submit().await, SubmitOutcome::Failed);
        assert!(page.store().is_empty());
        assert!(page.is_dialog_open());
        assert_eq!(page.form().user_name, "Asha");
    }

    #[tokio::test]
    async fn test_click_on_occupied_slot_deletes_remote_then_local() {
        let mut api = api_listing(vec![booking("a", 0), booking("b", 4)]);
        api.expect_delete().times(1).returning(|id| {
            assert_eq!(id, "b");
            Ok(())
        });
        let mut page = mounted_page(api).await;

        let SlotClick::Cleared(cleared) = page.click_slot(4).await else {
            panic!("expected the slot to be cleared");
        };
        assert_eq!(cleared.id, "b");
        assert!(page.store().find_by_slot(4).is_none());
        assert!(page.store().find_by_id("b").is_none());
        assert_eq!(page.store().len(), 1);
        assert!(!page.is_dialog_open());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_local_state() {
        let mut api = api_listing(vec![booking("a", 0)]);
        api.expect_delete().returning(|_| Err(upstream_down()));
        let mut page = mounted_page(api).await;

        assert_eq!(page.click_slot(0).await, SlotClick::Failed);
        assert!(page.store().find_by_slot(0).is_some());
    }

    #[tokio::test]
    async fn test_click_outside_grid_is_ignored() {
        let mut api = api_listing(vec![]);
        api.expect_delete().times(0);
        let mut page = mounted_page(api).await;

        assert_eq!(page.click_slot(10).await, SlotClick::OutOfRange);
        assert!(!page.is_dialog_open());
    }

    #[tokio::test]
    async fn test_bookings_without_slot_index_fill_the_grid_and_can_be_cleared() {
        let unslotted: Vec<_> = bookings(10)
            .into_iter()
            .map(|mut b| {
                b.slot_index = None;
                b
            })
            .collect();
        let mut api = api_listing(unslotted);
        api.expect_delete().times(1).returning(|id| {
            assert_eq!(id, "b0");
            Ok(())
        });
        api.expect_create().times(1).returning(|b| Ok(b.clone()));
        let mut page = mounted_page(api).await;

        assert!((0..10).all(|i| page.store().find_by_slot(i).is_some()));
        assert!(!page.render().contains("Empty"));

        let SlotClick::Cleared(cleared) = page.click_slot(0).await else {
            panic!("slot 0 should hold the first listed booking");
        };
        assert_eq!(cleared.id, "b0");
        assert_eq!(page.summary().empty, 1);

        fill_form(&mut page);
        let SubmitOutcome::CheckedIn(created) = page.submit().await else {
            panic!("the freed slot should be bookable");
        };
        assert_eq!(created.slot_index, Some(0));
    }

    #[tokio::test]
    async fn test_render_shows_dialog_only_when_open() {
        let mut page = mounted_page(api_listing(vec![booking("a", 1)])).await;

        let closed = page.render();
        assert!(closed.starts_with("Total Hour Rate: 10 Rupees per Hour\n"));
        assert!(closed.contains("Total Slots: 10   Allocated Slots: 1   Empty Slots: 9"));
        assert!(closed.contains("[ 1] Booked"));
        assert!(!closed.contains("Check-in Details"));

        page.open_dialog(Some(3));
        assert!(page.render().contains("Check-in Details (slot 3)"));
    }
}
