//! Compass classification of the sun's bearing at real events.

use local_solar::compass::AVAILABLE_WINDS;
use local_solar::{CompassPoint, Error, Event, LocalSolar};

/// Busan, 1980-07-09T12:00+09:00
fn busan() -> LocalSolar {
    LocalSolar::new(35.183, 129.067, 331_959_600_000)
}

#[test]
fn test_summer_sunrise_and_sunset_bearings() {
    let events = busan().events();
    let sunrise = events.get(Event::Sunrise).unwrap();
    let sunset = events.get(Event::Sunset).unwrap();

    assert_eq!(sunrise.compass_point(4).unwrap(), CompassPoint::East);
    assert_eq!(sunrise.compass_point(8).unwrap(), CompassPoint::Northeast);
    assert_eq!(sunrise.compass_point(16).unwrap(), CompassPoint::EastNortheast);

    assert_eq!(sunset.compass_point(4).unwrap(), CompassPoint::West);
    assert_eq!(sunset.compass_point(8).unwrap(), CompassPoint::Northwest);
    assert_eq!(sunset.compass_point(16).unwrap(), CompassPoint::WestNorthwest);
}

#[test]
fn test_meridian_bearing() {
    let noon = busan().meridian();
    for wind in AVAILABLE_WINDS {
        assert_eq!(noon.compass_point(wind).unwrap(), CompassPoint::South);
    }
}

#[test]
fn test_invalid_wind_from_moment() {
    let noon = busan().meridian();
    assert_eq!(noon.compass_point(0), Err(Error::InvalidWind { wind: 0 }));
    assert_eq!(noon.compass_point(64), Err(Error::invalid_wind(64)));
}

#[test]
fn test_coarser_rose_is_a_subset() {
    // every answer on a coarse rose is also a point of the finer roses
    for tenth in -3600..3600 {
        let bearing = f64::from(tenth) * 0.1 + 0.03;
        let on_4 = CompassPoint::closest_on_4_wind(bearing);
        let on_32 = CompassPoint::closest_on_32_wind(bearing);

        assert_eq!(on_4.direction() % 90.0, 0.0);
        assert_eq!(CompassPoint::closest(32, on_4.direction()).unwrap(), on_4);

        let distance = (on_32.direction() - bearing.rem_euclid(360.0)).abs();
        assert!(distance.min(360.0 - distance) <= 5.625 + 1e-9);
    }
}

#[test]
fn test_eight_wind_octant_boundaries() {
    for k in 0..8 {
        let boundary = 22.5 + 45.0 * f64::from(k);
        let before = CompassPoint::closest_on_8_wind(boundary - 0.1);
        let after = CompassPoint::closest_on_8_wind(boundary + 0.1);

        assert_eq!(before, CompassPoint::ALL[(k * 4) as usize]);
        assert_eq!(after, CompassPoint::ALL[((k + 1) * 4 % 32) as usize]);
    }
}

#[test]
fn test_labels() {
    assert_eq!(CompassPoint::EastNortheast.abbreviation(), "ENE");
    assert_eq!(CompassPoint::NorthwestByWest.abbreviation(), "NWbW");
    assert_eq!(CompassPoint::SouthSouthwest.label(), "south-southwest");
}
