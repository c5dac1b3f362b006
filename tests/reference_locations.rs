//! Sun positions and day events checked against published almanac data
//! (timeanddate.com) for a handful of locations.

#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::{America, Asia, Europe};
use local_solar::{Event, LocalSolar, Moment, Phase};

const TIME_TOLERANCE_MILLIS: i64 = 2 * 60_000;
const ANGLE_TOLERANCE_DEGREES: f64 = 1.0;

/// Epoch millis of an almanac timestamp, given to the minute (`1980-07-09T12:28+09:00`).
fn millis(timestamp: &str) -> i64 {
    DateTime::<FixedOffset>::parse_from_str(timestamp, "%Y-%m-%dT%H:%M%:z")
        .unwrap()
        .timestamp_millis()
}

fn assert_moment(moment: &Moment, expected_time: &str, expected_degrees: f64, angle: &str) {
    let expected = millis(expected_time);
    assert!(
        (moment.time() - expected).abs() <= TIME_TOLERANCE_MILLIS,
        "expected {expected_time}, got {:?}",
        moment.datetime_utc()
    );

    let actual = if angle == "altitude" {
        moment.altitude()
    } else {
        moment.azimuth()
    };
    assert!(
        (actual - expected_degrees).abs() <= ANGLE_TOLERANCE_DEGREES,
        "expected {angle} {expected_degrees}°, got {actual}°"
    );
}

#[test]
fn test_minute_timestamps_parse() {
    assert_eq!(millis("1980-07-09T12:00+09:00"), 331_959_600_000);
    assert_eq!(millis("2014-08-29T12:00-07:00"), 1_409_338_800_000);
    assert_eq!(
        millis("2007-01-07T13:35+14:00") - millis("2007-01-07T12:00+14:00"),
        95 * 60_000
    );
}

#[test]
fn test_busan() {
    // 35°11'N 129°04'E
    let solar = LocalSolar::new(
        35.0 + 11.0 / 60.0,
        129.0 + 4.0 / 60.0,
        millis("1980-07-09T12:00+09:00"),
    );

    assert_moment(&solar.meridian(), "1980-07-09T12:28+09:00", 77.0, "altitude");

    let events = solar.events();
    let sunrise = events.get(Event::Sunrise).unwrap();
    assert_moment(sunrise, "1980-07-09T05:16+09:00", 62.0, "azimuth");
    let sunset = events.get(Event::Sunset).unwrap();
    assert_moment(sunset, "1980-07-09T19:40+09:00", 298.0, "azimuth");

    assert_eq!(events.len(), 8);
}

#[test]
fn test_christchurch() {
    let solar = LocalSolar::new(
        -(43.0 + 32.0 / 60.0),
        -(172.0 + 38.0 / 60.0),
        millis("2007-01-07T12:00+14:00"),
    );

    let meridian = solar.meridian();
    assert_moment(&meridian, "2007-01-07T13:35+14:00", 69.0, "altitude");
    // southern summer: the sun culminates due north
    assert!(meridian.azimuth() < 1.0 || meridian.azimuth() > 359.0);

    let events = solar.events();
    assert_moment(
        events.get(Event::Sunrise).unwrap(),
        "2007-01-07T05:57+14:00",
        123.0,
        "azimuth",
    );
    assert_moment(
        events.get(Event::Sunset).unwrap(),
        "2007-01-07T21:13+14:00",
        237.0,
        "azimuth",
    );
}

#[test]
fn test_san_francisco() {
    // 37°47'N 122°25'W
    let solar = LocalSolar::new(
        37.0 + 47.0 / 60.0,
        -(122.0 + 25.0 / 60.0),
        millis("2014-08-29T12:00-07:00"),
    );

    assert_moment(&solar.meridian(), "2014-08-29T13:10-07:00", 61.0, "altitude");

    let events = solar.events();
    assert_moment(
        events.get(Event::Sunrise).unwrap(),
        "2014-08-29T06:37-07:00",
        78.0,
        "azimuth",
    );
    assert_moment(
        events.get(Event::Sunset).unwrap(),
        "2014-08-29T19:43-07:00",
        282.0,
        "azimuth",
    );
}

#[test]
fn test_tromso_white_night() {
    // 69°39'N 18°57'E
    let solar = LocalSolar::new(
        69.0 + 39.0 / 60.0,
        18.0 + 57.0 / 60.0,
        millis("2023-06-14T12:00+02:00"),
    );

    assert_moment(&solar.meridian(), "2023-06-14T12:44+02:00", 44.0, "altitude");

    let events = solar.events();
    assert!(!events.contains(Event::Sunrise));
    assert!(!events.contains(Event::Sunset));
    assert!(events.is_empty());

    // local mean midnight is still above the horizon
    let midnight = solar.moment_at(solar.local_mean_day().start()).unwrap();
    assert!(midnight.altitude() > 0.0);
    assert_eq!(midnight.phase(), Phase::Day);
}

#[test]
fn test_named_time_zones() {
    let cases = [
        (
            Asia::Seoul.with_ymd_and_hms(1980, 7, 9, 12, 0, 0).unwrap().fixed_offset(),
            35.183,
            129.067,
            "1980-07-09T12:28+09:00",
        ),
        (
            America::Los_Angeles
                .with_ymd_and_hms(2014, 8, 29, 12, 0, 0)
                .unwrap()
                .fixed_offset(),
            37.783,
            -122.417,
            "2014-08-29T13:10-07:00",
        ),
        (
            Europe::Oslo.with_ymd_and_hms(2023, 6, 14, 12, 0, 0).unwrap().fixed_offset(),
            69.65,
            18.95,
            "2023-06-14T12:44+02:00",
        ),
    ];

    for (datetime, latitude, longitude, noon) in cases {
        let solar = LocalSolar::from_datetime(latitude, longitude, &datetime);
        assert_eq!(solar.epoch_millis(), datetime.timestamp_millis());
        assert!(
            (solar.solar_noon() - millis(noon)).abs() <= TIME_TOLERANCE_MILLIS,
            "solar noon at ({latitude}, {longitude})"
        );
    }
}

#[test]
fn test_events_are_datetime_convertible() {
    let datetime = Asia::Seoul.with_ymd_and_hms(1980, 7, 9, 12, 0, 0).unwrap();
    let solar = LocalSolar::from_datetime(35.183, 129.067, &datetime);

    for (event, moment) in solar.events().iter() {
        let local = moment.datetime_utc().unwrap().with_timezone(&Asia::Seoul);
        assert_eq!(
            local.date_naive(),
            datetime.date_naive(),
            "{event} falls on another calendar day"
        );
    }
}
