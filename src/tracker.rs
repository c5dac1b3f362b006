//! Engine reuse for a moving observer.
//!
//! Building a [`LocalSolar`] is cheap but not free. A [`Tracker`] keeps the last engine and
//! answers position queries from it as long as the observer stays close to where it was
//! built and the instant stays inside its local mean day.

use log::{debug, trace};

use crate::error::check_tolerance;
use crate::math::haversine_distance_meters;
use crate::solar::LocalSolar;
use crate::types::Moment;
use crate::Result;

/// Default reuse radius, in meters.
pub const DEFAULT_TOLERANCE_METERS: f64 = 1000.0;

/// Single-slot cache of a [`LocalSolar`] engine.
///
/// Not synchronized: share it behind a mutex or keep one per thread.
///
/// # Example
/// ```
/// use local_solar::Tracker;
///
/// let mut tracker = Tracker::default();
/// let t = 1_688_871_600_000; // 2023-07-09T03:00Z
///
/// let first = tracker.track(37.8087, -122.4098, t);
/// // a few hundred meters away: same engine
/// let second = tracker.track(37.8024, -122.4058, t);
/// assert_eq!(first.time(), second.time());
/// assert_eq!(tracker.local_solar().map(|s| s.latitude()), Some(37.8087));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tracker {
    tolerance_meters: f64,
    cached: Option<LocalSolar>,
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            tolerance_meters: DEFAULT_TOLERANCE_METERS,
            cached: None,
        }
    }
}

impl Tracker {
    /// Creates an empty tracker with the given reuse radius.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` for a negative or non-finite tolerance.
    pub fn new(tolerance_meters: f64) -> Result<Self> {
        check_tolerance(tolerance_meters)?;
        Ok(Self {
            tolerance_meters,
            cached: None,
        })
    }

    /// Reuse radius in meters.
    #[must_use]
    pub const fn tolerance_meters(&self) -> f64 {
        self.tolerance_meters
    }

    /// The cached engine, if any query has been made.
    #[must_use]
    pub const fn local_solar(&self) -> Option<&LocalSolar> {
        self.cached.as_ref()
    }

    /// Drops the cached engine.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    /// Position of the sun for an observer at (`latitude`, `longitude`) at `epoch_millis`.
    ///
    /// Never fails: the instant always lies in the day of the engine used to answer, except
    /// beyond [`crate::time::MAX_EPOCH_MILLIS`] (or before [`crate::time::MIN_EPOCH_MILLIS`])
    /// where the nearest representable day answers.
    pub fn track(&mut self, latitude: f64, longitude: f64, epoch_millis: i64) -> Moment {
        self.track_with_engine(latitude, longitude, epoch_millis).0
    }

    /// Like [`Tracker::track`], but also hands back the engine that answered, for the
    /// day-level context of the moment (noon, events, equation of time).
    pub fn track_with_engine(
        &mut self,
        latitude: f64,
        longitude: f64,
        epoch_millis: i64,
    ) -> (Moment, &LocalSolar) {
        let solar = self.local_solar_for(latitude, longitude, epoch_millis);
        (solar.moment_within_day(epoch_millis), solar)
    }

    /// The engine that answers for (`latitude`, `longitude`) at `epoch_millis`, rebuilding
    /// the cached one when it no longer covers the query.
    pub fn local_solar_for(
        &mut self,
        latitude: f64,
        longitude: f64,
        epoch_millis: i64,
    ) -> &LocalSolar {
        let tolerance = self.tolerance_meters;
        match &self.cached {
            Some(solar) if covers(solar, tolerance, latitude, longitude, epoch_millis) => {
                trace!("reusing solar engine built at ({}, {})", solar.latitude(), solar.longitude());
            }
            Some(solar) => {
                debug!(
                    "solar engine at ({}, {}) does not cover ({latitude}, {longitude}) at {epoch_millis}, rebuilding",
                    solar.latitude(),
                    solar.longitude()
                );
                self.cached = None;
            }
            None => debug!("building solar engine at ({latitude}, {longitude})"),
        }

        self.cached
            .get_or_insert_with(|| LocalSolar::new(latitude, longitude, epoch_millis))
    }
}

fn covers(solar: &LocalSolar, tolerance: f64, latitude: f64, longitude: f64, epoch_millis: i64) -> bool {
    solar.local_mean_day().contains(epoch_millis)
        && haversine_distance_meters(solar.latitude(), solar.longitude(), latitude, longitude)
            <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MILLIS_PER_DAY, MILLIS_PER_HOUR};

    const PIER_39: (f64, f64) = (37.808_700_4, -122.409_845_4);
    const COIT_TOWER: (f64, f64) = (37.802_395_4, -122.405_822_4);
    const FERRY_BUILDING: (f64, f64) = (37.795_451_3, -122.393_755_6);
    const RINCON_CENTER: (f64, f64) = (37.791_620_5, -122.392_118_2);

    /// 2023-07-09T12:00+09:00
    const BUSAN_NOON: i64 = 1_688_871_600_000;
    const BUSAN: (f64, f64) = (35.183_333, 129.066_667);

    fn cached(tracker: &Tracker) -> LocalSolar {
        *tracker.local_solar().unwrap()
    }

    #[test]
    fn test_location_tolerance() {
        let t = BUSAN_NOON;
        let mut tracker = Tracker::default();

        tracker.track(PIER_39.0, PIER_39.1, t);
        let at_pier = cached(&tracker);

        tracker.track(COIT_TOWER.0, COIT_TOWER.1, t);
        assert_eq!(cached(&tracker), at_pier, "Coit Tower is within 1 km of Pier 39");

        tracker.track(FERRY_BUILDING.0, FERRY_BUILDING.1, t);
        let at_ferry = cached(&tracker);
        assert_ne!(at_ferry, at_pier, "Ferry Building is about 2 km away");
        assert_eq!(at_ferry.latitude(), FERRY_BUILDING.0);

        tracker.track(RINCON_CENTER.0, RINCON_CENTER.1, t);
        assert_eq!(cached(&tracker), at_ferry, "Rincon Center is close to the Ferry Building");
    }

    #[test]
    fn test_mean_day_changes() {
        let mut tracker = Tracker::default();

        tracker.track(BUSAN.0, BUSAN.1, BUSAN_NOON);
        let first = cached(&tracker);

        // 20:00 the same evening
        tracker.track(BUSAN.0, BUSAN.1, BUSAN_NOON + 8 * MILLIS_PER_HOUR);
        assert_eq!(cached(&tracker), first);

        // 03:00 the next morning belongs to the next local mean day
        tracker.track(BUSAN.0, BUSAN.1, BUSAN_NOON + 15 * MILLIS_PER_HOUR);
        let second = cached(&tracker);
        assert_ne!(second, first);
        assert_eq!(
            second.local_mean_day().start(),
            first.local_mean_day().end()
        );

        // 20:00 on the next day
        tracker.track(BUSAN.0, BUSAN.1, BUSAN_NOON + 32 * MILLIS_PER_HOUR);
        assert_eq!(cached(&tracker), second);
    }

    #[test]
    fn test_track_matches_fresh_engine() {
        let mut tracker = Tracker::default();
        for hour in 0..48 {
            let t = BUSAN_NOON + hour * MILLIS_PER_HOUR;
            let tracked = tracker.track(BUSAN.0, BUSAN.1, t);
            let fresh = LocalSolar::new(BUSAN.0, BUSAN.1, t).moment_at(t).unwrap();
            assert_eq!(tracked, fresh);
        }
    }

    #[test]
    fn test_moment_comes_with_its_engine() {
        let mut tracker = Tracker::default();

        let (moment, solar) = tracker.track_with_engine(BUSAN.0, BUSAN.1, BUSAN_NOON);
        let solar = *solar;
        assert_eq!(moment.time(), BUSAN_NOON);
        assert!(solar.local_mean_day().contains(moment.time()));
        assert_eq!(solar.moment_at(moment.time()), Ok(moment));
        assert_eq!(cached(&tracker), solar);

        // the engine's day context travels with each answer
        let evening = BUSAN_NOON + 8 * MILLIS_PER_HOUR;
        let (later, same) = tracker.track_with_engine(BUSAN.0, BUSAN.1, evening);
        assert_eq!(*same, solar);
        assert!(later.time() > same.solar_noon());
        assert!(later.altitude() < same.meridian().altitude());
    }

    #[test]
    fn test_extreme_instants_do_not_overflow() {
        let mut tracker = Tracker::default();
        for t in [i64::MAX, i64::MIN, 0, i64::MAX - 1] {
            let (moment, solar) = tracker.track_with_engine(BUSAN.0, BUSAN.1, t);
            assert_eq!(moment.time(), t);
            assert_eq!(solar.local_mean_day().duration(), crate::time::Millis::DAY);
        }
    }

    #[test]
    fn test_zero_tolerance_rebuilds_on_any_move() {
        let mut tracker = Tracker::new(0.0).unwrap();
        tracker.track(10.0, 10.0, 0);
        let first = cached(&tracker);

        tracker.track(10.0, 10.0, 0);
        assert_eq!(cached(&tracker), first);

        tracker.track(10.0, 10.000_1, 0);
        assert_ne!(cached(&tracker), first);
    }

    #[test]
    fn test_nan_location_always_rebuilds() {
        let mut tracker = Tracker::default();
        tracker.track(f64::NAN, 0.0, 0);
        assert!(tracker.local_solar().unwrap().latitude().is_nan());

        tracker.track(1.0, 0.0, MILLIS_PER_DAY / 2);
        assert_eq!(tracker.local_solar().unwrap().latitude(), 1.0);
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(Tracker::new(-1.0).is_err());
        assert!(Tracker::new(f64::NAN).is_err());
        assert!(LocalSolar::tracker(250.0).is_ok());
        assert_eq!(Tracker::default().tolerance_meters(), DEFAULT_TOLERANCE_METERS);
    }

    #[test]
    fn test_reset() {
        let mut tracker = Tracker::default();
        assert!(tracker.local_solar().is_none());
        tracker.track(0.0, 0.0, 0);
        assert!(tracker.local_solar().is_some());
        tracker.reset();
        assert!(tracker.local_solar().is_none());
    }
}
