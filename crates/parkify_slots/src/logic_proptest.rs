#[cfg(test)]
mod tests {
    use crate::logic::{calculate_total, MILLIS_PER_HOUR};
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    proptest! {
        // hours = ceil(elapsed / 1h) and amount = hours * rate
        #[test]
        fn test_totals_match_ceiling_formula(
            start_offset_ms in 0..(365 * 24 * MILLIS_PER_HOUR),
            elapsed_ms in 1..(30 * 24 * MILLIS_PER_HOUR),
            rate in 1..1_000i64,
        ) {
            let check_in = base_time() + Duration::milliseconds(start_offset_ms);
            let check_out = check_in + Duration::milliseconds(elapsed_ms);

            let totals = calculate_total(check_in, check_out, rate).unwrap();

            let expected_hours = (elapsed_ms as f64 / MILLIS_PER_HOUR as f64).ceil() as i64;
            prop_assert_eq!(totals.hours, expected_hours);
            prop_assert_eq!(totals.amount, totals.hours * rate);
        }

        // The charged hours always cover the stay and never overshoot by a full hour
        #[test]
        fn test_charged_hours_cover_stay(elapsed_ms in 1..(7 * 24 * MILLIS_PER_HOUR)) {
            let check_in = base_time();
            let check_out = check_in + Duration::milliseconds(elapsed_ms);

            let totals = calculate_total(check_in, check_out, 10).unwrap();

            prop_assert!(totals.hours * MILLIS_PER_HOUR >= elapsed_ms);
            prop_assert!((totals.hours - 1) * MILLIS_PER_HOUR < elapsed_ms);
            prop_assert_eq!(totals.amount, totals.hours * 10);
        }

        #[test]
        fn test_no_totals_for_non_positive_stays(back_ms in 0..(48 * MILLIS_PER_HOUR)) {
            let check_in = base_time() + Duration::hours(48);
            let check_out = check_in - Duration::milliseconds(back_ms);
            prop_assert!(calculate_total(check_in, check_out, 10).is_none());
        }
    }
}
