use chrono::TimeZone as _;

use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn empty_range_has_no_days_and_zero_percent() {
    let p = Progress::compute(d(2025, 3, 1), d(2025, 3, 1), d(2025, 3, 1));
    assert_eq!(p.total_days, 0);
    assert_eq!(p.percent, 0);
    assert_eq!(p.dot_count(), 0);
}

#[test]
fn counts_are_clamped_outside_the_range() {
    let start = d(2025, 1, 1);
    let end = d(2025, 4, 1);

    let before = Progress::compute(start, end, d(2024, 12, 1));
    assert_eq!(before.days_passed, 0);
    assert_eq!(before.days_remaining, 121);

    let after = Progress::compute(start, end, d(2025, 6, 1));
    assert_eq!(after.days_remaining, 0);
    assert_eq!(after.days_passed, 151);
    assert!(after.percent > 100);
}

#[test]
fn percent_rounds_half_up() {
    // 1 / 8 = 12.5% -> 13
    let p = Progress::compute(d(2025, 1, 1), d(2025, 1, 9), d(2025, 1, 2));
    assert_eq!(p.total_days, 8);
    assert_eq!(p.percent, 13);

    // 1 / 3 = 33.3% -> 33
    let p = Progress::compute(d(2025, 1, 1), d(2025, 1, 4), d(2025, 1, 2));
    assert_eq!(p.percent, 33);
}

#[test]
fn inverted_range_draws_nothing() {
    let p = Progress::compute(d(2025, 5, 1), d(2025, 4, 1), d(2025, 4, 15));
    assert_eq!(p.total_days, -30);
    assert_eq!(p.dot_count(), 0);
    assert_eq!(p.percent, 0);
}

#[test]
fn dot_states_partition_the_range() {
    let p = Progress::compute(d(2025, 1, 1), d(2025, 10, 28), d(2025, 2, 10));
    assert_eq!(p.total_days, 300);

    let mut completed = 0;
    let mut today = 0;
    let mut remaining = 0;
    for i in 0..p.dot_count() {
        match p.dot_state(i) {
            DotState::Completed => completed += 1,
            DotState::Today => today += 1,
            DotState::Remaining => remaining += 1,
        }
    }
    assert_eq!(completed, 40);
    assert_eq!(today, 1);
    assert_eq!(completed + today + remaining, 300);
    assert_eq!(p.dot_state(40), DotState::Today);
}

#[test]
fn today_policy_uses_fixed_offset() {
    let policy = TodayPolicy::default();
    assert_eq!(policy.offset().local_minus_utc(), 19_800);

    // 20:00 UTC is already the next day at +05:30.
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap();
    assert_eq!(policy.date_at(now), d(2025, 3, 11));

    let utc = TodayPolicy::from_offset_minutes(0).unwrap();
    assert_eq!(utc.date_at(now), d(2025, 3, 10));
}

#[test]
fn today_policy_rejects_out_of_range_offsets() {
    assert!(TodayPolicy::from_offset_minutes(24 * 60).is_err());
    assert!(TodayPolicy::from_offset_minutes(-24 * 60).is_err());
    assert!(TodayPolicy::from_offset_minutes(-8 * 60).is_ok());
}
