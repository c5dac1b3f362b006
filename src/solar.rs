//! Sun position over one local mean solar day.
//!
//! A [`LocalSolar`] is bound to one observer and to the 24-hour mean solar day, anchored on
//! the observer's meridian, that contains the instant it was built for. From that day it
//! derives the equation of time, the solar declination and the instant of apparent solar
//! noon, and answers position queries by hour angle.
//!
//! The approximations are low order: expect the sun's position within 1-2° and event
//! times within a couple of minutes. Only a fixed horizon offset accounts for refraction.
//!
//! ## References
//!
//! - [Position of the Sun](https://en.wikipedia.org/wiki/Position_of_the_Sun)
//! - [Equation of time](https://en.wikipedia.org/wiki/Equation_of_time)
//! - [Sunrise equation](https://en.wikipedia.org/wiki/Sunrise_equation)

#![allow(clippy::unreadable_literal)]

use log::trace;

use crate::angle::Angle;
use crate::error::{check_coordinates, check_epoch_millis};
use crate::math::{TAU, acos, asin, cos, sin};
use crate::time::{JAN_1_2000_UTC, MAX_EPOCH_MILLIS, MIN_EPOCH_MILLIS, Millis, TROPICAL_YEAR_DAYS};
use crate::tracker::Tracker;
use crate::types::{Crossing, Event, Events, Horizon, Moment, SolarDay};
use crate::{Error, Result};

/// Maximum declination of the sun (obliquity of the ecliptic), in degrees.
pub const OBLIQUITY_DEGREES: f64 = 23.44;

/// Solar engine for one observer and one local mean solar day.
///
/// All derived quantities are computed once, at construction; every query is a pure
/// function of them. The type is `Copy` and can be shared freely between threads.
///
/// # Example
/// ```
/// use local_solar::{Event, LocalSolar};
///
/// // Busan, 1980-07-09T12:00+09:00
/// let solar = LocalSolar::new(35.183, 129.067, 331_959_600_000);
///
/// let noon = solar.meridian();
/// assert!((noon.altitude() - 77.0).abs() < 2.0);
///
/// let events = solar.events();
/// let sunrise = events.get(Event::Sunrise).unwrap();
/// assert!((sunrise.azimuth() - 62.0).abs() < 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSolar {
    latitude: f64,
    longitude: f64,
    epoch_millis: i64,
    latitude_angle: Angle,
    local_mean_time_offset: Millis,
    local_mean_day: SolarDay,
    equation_of_time: Millis,
    declination: Angle,
    solar_noon: i64,
}

impl LocalSolar {
    /// Builds the engine for the mean solar day containing `epoch_millis`.
    ///
    /// Coordinates are not validated; values outside ±90°/±180° give meaningless but
    /// well-defined numbers, and NaN propagates into the results. Use
    /// [`LocalSolar::try_new`] to reject them instead.
    ///
    /// Instants before [`MIN_EPOCH_MILLIS`] or after [`MAX_EPOCH_MILLIS`] have no
    /// representable day window. They are clamped to that range for the window, so the engine covers the
    /// nearest representable day; [`LocalSolar::epoch_millis`] still reports the instant
    /// as given.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, epoch_millis: i64) -> Self {
        // Longitudes are periodic; reducing keeps the offset under one day
        let local_mean_time_offset = Millis::from_days_f64((longitude % 360.0) / 360.0);

        let anchor = epoch_millis.clamp(MIN_EPOCH_MILLIS, MAX_EPOCH_MILLIS);
        let shifted = Millis::new(anchor) + local_mean_time_offset;
        let start = Millis::from_days(shifted.div_floor(Millis::DAY)) - local_mean_time_offset;
        let local_mean_day = SolarDay::starting_at(start.millis());

        let mean_noon = start + Millis::from_hours(12);
        let days_since_2000 = mean_noon.as_days_f64() - Millis::new(JAN_1_2000_UTC).as_days_f64();

        let equation_of_time = equation_of_time(days_since_2000);
        let declination = declination(days_since_2000);
        let solar_noon = (mean_noon - equation_of_time).millis();

        trace!(
            "local solar day [{}, {}) at ({latitude}, {longitude}): eot={}, declination={:.3}°",
            local_mean_day.start(),
            local_mean_day.end(),
            equation_of_time,
            declination.degrees()
        );

        Self {
            latitude,
            longitude,
            epoch_millis,
            latitude_angle: Angle::from_degrees(latitude),
            local_mean_time_offset,
            local_mean_day,
            equation_of_time,
            declination,
            solar_noon,
        }
    }

    /// Like [`LocalSolar::new`], but rejects coordinates outside ±90° latitude and ±180°
    /// longitude, and instants whose day cannot be represented.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates, and
    /// `UnsupportedInstant` for instants before [`MIN_EPOCH_MILLIS`] or after
    /// [`MAX_EPOCH_MILLIS`].
    pub fn try_new(latitude: f64, longitude: f64, epoch_millis: i64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_epoch_millis(epoch_millis)?;
        Ok(Self::new(latitude, longitude, epoch_millis))
    }

    /// Builds the engine for the mean solar day containing `datetime`.
    ///
    /// The time zone of `datetime` is irrelevant; only the instant matters.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(
        latitude: f64,
        longitude: f64,
        datetime: &chrono::DateTime<Tz>,
    ) -> Self {
        Self::new(latitude, longitude, crate::time::epoch_millis(datetime))
    }

    /// Creates a [`Tracker`] that reuses one engine while the observer stays within
    /// `tolerance_meters` and inside the engine's day.
    ///
    /// # Errors
    /// Returns `InvalidTolerance` for a negative or non-finite tolerance.
    pub fn tracker(tolerance_meters: f64) -> Result<Tracker> {
        Tracker::new(tolerance_meters)
    }

    /// Observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Observer longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The instant this engine was built for.
    #[must_use]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// Longitude as a fraction of a day: how far local mean time runs ahead of UTC.
    #[must_use]
    pub const fn local_mean_time_offset(&self) -> Millis {
        self.local_mean_time_offset
    }

    /// The 24-hour window, local mean midnight to midnight, containing the build instant.
    #[must_use]
    pub const fn local_mean_day(&self) -> SolarDay {
        self.local_mean_day
    }

    /// Apparent (sundial) time minus mean time for this day.
    #[must_use]
    pub const fn equation_of_time(&self) -> Millis {
        self.equation_of_time
    }

    /// The local mean day shifted by the equation of time: apparent midnight to midnight.
    #[must_use]
    pub const fn apparent_solar_day(&self) -> SolarDay {
        SolarDay::starting_at(self.local_mean_day.start() - self.equation_of_time.millis())
    }

    /// Solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination.degrees()
    }

    /// Solar declination as an [`Angle`].
    #[must_use]
    pub const fn declination_angle(&self) -> Angle {
        self.declination
    }

    /// Instant of apparent solar noon, when the sun crosses the local meridian.
    #[must_use]
    pub const fn solar_noon(&self) -> i64 {
        self.solar_noon
    }

    /// Position of the sun at solar noon.
    #[must_use]
    pub fn meridian(&self) -> Moment {
        self.moment_at_hour_angle(self.solar_noon, Angle::ZERO)
    }

    /// Position of the sun at the instant this engine was built for.
    #[must_use]
    pub fn current(&self) -> Moment {
        self.moment_within_day(self.epoch_millis)
    }

    /// Position of the sun at `epoch_millis`.
    ///
    /// Any instant in [`LocalSolar::local_mean_day`] or [`LocalSolar::apparent_solar_day`]
    /// is answered, so every instant reported by [`LocalSolar::events`] can be queried
    /// back even when it lies just outside the mean day.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `epoch_millis` is outside both days; the reported window is
    /// their union. Build a new engine (or use a [`Tracker`]) for other days.
    pub fn moment_at(&self, epoch_millis: i64) -> Result<Moment> {
        let (mean, apparent) = (self.local_mean_day, self.apparent_solar_day());
        if !mean.contains(epoch_millis) && !apparent.contains(epoch_millis) {
            return Err(Error::out_of_range(
                epoch_millis,
                mean.start().min(apparent.start()),
                mean.end().max(apparent.end()),
            ));
        }
        Ok(self.moment_within_day(epoch_millis))
    }

    /// Position at an instant already known to lie in this engine's day.
    pub(crate) fn moment_within_day(&self, epoch_millis: i64) -> Moment {
        let hour_angle =
            Angle::from_rotations(Millis::new(epoch_millis - self.solar_noon).as_days_f64());
        self.moment_at_hour_angle(epoch_millis, hour_angle)
    }

    /// Solves for the instants the sun passes `horizon` on this day.
    ///
    /// When the altitude is never crossed the result says which side of it the sun
    /// stays on. A NaN input (e.g. NaN latitude) is reported as [`Crossing::AllNight`].
    #[must_use]
    pub fn crossing(&self, horizon: Horizon) -> Crossing {
        let transit = self.meridian();
        let altitude = horizon.angle();

        let (sin_delta, cos_delta) = (sin(self.declination.radians()), cos(self.declination.radians()));
        let (sin_phi, cos_phi) = (sin(self.latitude_angle.radians()), cos(self.latitude_angle.radians()));
        let cos_hour_angle =
            (sin(altitude.radians()) - sin_delta * sin_phi) / (cos_delta * cos_phi);

        if cos_hour_angle < -1.0 {
            return Crossing::AllDay { transit };
        }
        if cos_hour_angle.is_nan() || cos_hour_angle > 1.0 {
            return Crossing::AllNight { transit };
        }

        let hour_angle = Angle::from_radians(acos(cos_hour_angle));
        let from_noon = Millis::from_days_f64(hour_angle / Angle::ONE_ROTATION).millis();

        Crossing::Regular {
            rising: Moment::new(
                self.solar_noon - from_noon,
                altitude,
                self.azimuth(altitude, -hour_angle),
            ),
            transit,
            setting: Moment::new(
                self.solar_noon + from_noon,
                altitude,
                self.azimuth(altitude, hour_angle),
            ),
        }
    }

    /// The `(rising, setting)` moments at `horizon`, or `None` when the sun does not
    /// cross it on this day.
    #[must_use]
    pub fn passing_moments(&self, horizon: Horizon) -> Option<(Moment, Moment)> {
        self.crossing(horizon).moments()
    }

    /// Dawns, sunrise, sunset and dusks of this day, in chronological order.
    ///
    /// Thresholds the sun does not cross (polar day or night) leave their events out.
    #[must_use]
    pub fn events(&self) -> Events {
        let mut events = Events::default();
        for horizon in Horizon::BOUNDARIES {
            let (Some((dawn, dusk)), Some((rising, setting))) =
                (horizon.events(), self.passing_moments(horizon))
            else {
                continue;
            };
            events.insert(dawn, rising);
            events.insert(dusk, setting);
        }
        events
    }

    /// Moment of a single event, if it happens on this day.
    #[must_use]
    pub fn event(&self, event: Event) -> Option<Moment> {
        let (rising, setting) = self.passing_moments(event.horizon())?;
        Some(if event.is_rising() { rising } else { setting })
    }

    fn moment_at_hour_angle(&self, epoch_millis: i64, hour_angle: Angle) -> Moment {
        let delta = self.declination.radians();
        let phi = self.latitude_angle.radians();

        let altitude = Angle::from_radians(asin(
            sin(delta) * sin(phi) + cos(delta) * cos(phi) * cos(hour_angle.radians()),
        ));

        Moment::new(epoch_millis, altitude, self.azimuth(altitude, hour_angle))
    }

    /// Azimuth clockwise from north; morning bearings for negative hour angles.
    fn azimuth(&self, altitude: Angle, hour_angle: Angle) -> Angle {
        let delta = self.declination.radians();
        let phi = self.latitude_angle.radians();

        let cos_azimuth = (sin(delta) * cos(phi) - cos(delta) * sin(phi) * cos(hour_angle.radians()))
            / cos(altitude.radians());
        let azimuth = acos(cos_azimuth.clamp(-1.0, 1.0));

        if hour_angle.radians() < 0.0 {
            Angle::from_radians(azimuth)
        } else {
            Angle::from_radians((TAU - azimuth) % TAU)
        }
    }
}

/// Equation of time for a day `days` after 2000-01-01T00:00Z.
///
/// Two-harmonic fit driven by the sun's mean anomaly, good to about half a minute.
fn equation_of_time(days: f64) -> Millis {
    let mean_anomaly = 6.24004077 + 0.01720197 * days;
    let minutes = -7.659 * sin(mean_anomaly) + 9.863 * sin(2.0 * mean_anomaly + 3.5932);
    Millis::from_minutes_f64(minutes)
}

/// Declination for a day `days` after 2000-01-01T00:00Z.
///
/// The ecliptic longitude is counted from the December solstice (10 days before
/// January 1st); 1.914° is the first-order eccentricity term, peaking near perihelion.
fn declination(days: f64) -> Angle {
    let degrees_per_day = 360.0 / TROPICAL_YEAR_DAYS;
    let eccentricity = 1.914 * sin((degrees_per_day * (days - 2.0)).to_radians());
    let longitude = Angle::from_degrees(degrees_per_day * (days + 10.0) + eccentricity);

    Angle::from_radians(-asin(
        sin(OBLIQUITY_DEGREES.to_radians()) * cos(longitude.radians()),
    ))
}
