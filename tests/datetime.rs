use simplertc::{DateTime, TimeSpan, TimestampKind};

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Every calendar day from 2000-01-01 to 2099-12-31, with a time of day
/// that varies from day to day.
fn every_day() -> impl Iterator<Item = DateTime> {
    (2000u16..2100).flat_map(|y| {
        (1u8..=12).flat_map(move |m| {
            (1..=days_in_month(y, m)).map(move |d| {
                let n = y as u32 * 372 + m as u32 * 31 + d as u32;
                DateTime::new(y, m, d, (n % 24) as u8, (n * 7 % 60) as u8, (n * 13 % 60) as u8)
            })
        })
    })
}

#[test]
fn every_valid_day_round_trips() {
    let mut count = 0;
    for dt in every_day() {
        assert!(dt.is_valid(), "{}", dt);
        assert_eq!(DateTime::from_unixtime(dt.unixtime()), dt);
        assert_eq!(DateTime::from_secondstime(dt.secondstime()), dt);
        count += 1;
    }
    assert_eq!(count, 36_525);
}

#[test]
fn consecutive_days_are_one_day_apart() {
    let mut days = (2000u16..2100).flat_map(|y| {
        (1u8..=12).flat_map(move |m| {
            (1..=days_in_month(y, m)).map(move |d| DateTime::new(y, m, d, 0, 0, 0))
        })
    });
    let mut prev = days.next().unwrap();
    assert_eq!(prev.day_of_the_week(), 6);
    for dt in days {
        assert_eq!(dt.unixtime() - prev.unixtime(), 86_400, "{}", dt);
        assert_eq!(dt.day_of_the_week(), (prev.day_of_the_week() + 1) % 7, "{}", dt);
        assert!(prev < dt);
        assert_eq!(prev + TimeSpan::from_components(1, 0, 0, 0), dt);
        prev = dt;
    }
    assert_eq!(prev, DateTime::new(2099, 12, 31, 0, 0, 0));
}

#[test]
fn sampled_epoch_seconds_round_trip() {
    // 2000-01-01 up to 2100-01-01, odd stride to hit every time of day
    for t in (946_684_800u32..4_102_444_800).step_by(86_413 * 3 + 7) {
        let dt = DateTime::from_unixtime(t);
        assert!(dt.is_valid(), "{} -> {}", t, dt);
        assert_eq!(dt.unixtime(), t);
    }
    assert_eq!(DateTime::from_unixtime(4_102_444_799), DateTime::new(2099, 12, 31, 23, 59, 59));
}

#[test]
fn impossible_dates_are_invalid() {
    let invalid = [
        DateTime::new(2021, 2, 29, 0, 0, 0),
        DateTime::new(2021, 2, 30, 0, 0, 0),
        DateTime::new(2001, 2, 29, 0, 0, 0),
        DateTime::new(2020, 2, 30, 0, 0, 0),
        DateTime::new(2020, 4, 31, 0, 0, 0),
        DateTime::new(2020, 13, 1, 0, 0, 0),
        DateTime::new(2020, 0, 1, 0, 0, 0),
        DateTime::new(2020, 1, 0, 0, 0, 0),
        DateTime::new(2020, 1, 32, 0, 0, 0),
        DateTime::new(2020, 1, 1, 24, 0, 0),
        DateTime::new(2020, 1, 1, 0, 60, 0),
        DateTime::new(2020, 1, 1, 0, 0, 60),
        DateTime::new(2100, 1, 1, 0, 0, 0),
    ];
    for dt in invalid {
        assert!(!dt.is_valid(), "{}", dt);
    }
}

#[test]
fn unixtime_increases_with_every_field() {
    let base = DateTime::new(2019, 5, 14, 10, 20, 30);
    let bumped = [
        DateTime::new(2019, 5, 14, 10, 20, 31),
        DateTime::new(2019, 5, 14, 10, 21, 30),
        DateTime::new(2019, 5, 14, 11, 20, 30),
        DateTime::new(2019, 5, 15, 10, 20, 30),
        DateTime::new(2019, 6, 14, 10, 20, 30),
        DateTime::new(2020, 5, 14, 10, 20, 30),
    ];
    for dt in bumped {
        assert!(dt.unixtime() > base.unixtime(), "{}", dt);
        assert!(dt > base);
    }
    // coarser fields move it further
    let steps: Vec<u32> = bumped.iter().map(|dt| dt.unixtime() - base.unixtime()).collect();
    assert!(steps.windows(2).all(|w| w[0] < w[1]), "{:?}", steps);
}

#[test]
fn known_fixed_points() {
    assert_eq!(DateTime::new(2000, 1, 1, 0, 0, 0).unixtime(), 946_684_800);
    assert_eq!(DateTime::new(2000, 1, 1, 0, 0, 0).day_of_the_week(), 6);
    assert_eq!(DateTime::new(2020, 4, 16, 18, 34, 56).unixtime(), 1_587_062_096);

    // 1970 is below the representable range and wraps
    let wrapped = DateTime::from_unixtime(0);
    assert!(wrapped.year_offset() >= 100);
    assert!(!wrapped.is_valid());
    assert_eq!(wrapped.unixtime(), 0);
}

#[test]
fn formatting() {
    let dt = DateTime::new(2020, 4, 16, 18, 34, 56);
    assert_eq!(dt.format("YYYY-MM-DD hh:mm:ss"), "2020-04-16 18:34:56");
    assert_eq!(dt.format("YYYY-MM-DD hh:mm:ss AP"), "2020-04-16 06:34:56 PM");
    assert_eq!(dt.format("DDD, DD MMM YY"), "Thu, 16 Apr 20");
    assert_eq!(dt.timestamp(TimestampKind::Time), "18:34:56");
    assert_eq!(dt.timestamp(TimestampKind::Date), "2020-04-16");
    assert_eq!(dt.timestamp(TimestampKind::Full), "2020-04-16T18:34:56");
    assert_eq!(dt.to_string(), "2020-04-16T18:34:56");
}

#[test]
fn text_constructors_agree() {
    let build = DateTime::from_build_strings("Apr 16 2020", "18:34:56");
    let iso = DateTime::from_iso8601("2020-04-16T18:34:56");
    assert_eq!(build, iso);
    assert_eq!(iso.timestamp(TimestampKind::Full), "2020-04-16T18:34:56");

    let garbage = DateTime::from_iso8601("not a date at all!!");
    assert!(!garbage.is_valid());
}

#[test]
fn difference_of_instants() {
    let start = DateTime::new(2021, 3, 1, 0, 0, 0);
    let end = DateTime::new(2021, 3, 2, 3, 45, 10);
    let span = end - start;
    assert_eq!(span.days(), 1);
    assert_eq!(span.hours(), 3);
    assert_eq!(span.minutes(), 45);
    assert_eq!(span.seconds(), 10);
    assert_eq!(start + span, end);
    assert_eq!(end - span, start);
    assert_eq!((start - end).total_seconds(), -span.total_seconds());
}

#[cfg(feature = "chrono")]
#[test]
fn unixtime_matches_chrono() {
    use chrono::NaiveDateTime;

    for dt in every_day().step_by(17) {
        let naive = NaiveDateTime::try_from(dt).unwrap();
        assert_eq!(naive.and_utc().timestamp(), dt.unixtime() as i64, "{}", dt);
        assert_eq!(DateTime::try_from(naive).unwrap(), dt);
    }
}
