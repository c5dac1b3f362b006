//! Value types returned by the solar engine.

use core::fmt;

use crate::angle::Angle;
use crate::compass::CompassPoint;
use crate::time::Millis;
use crate::{Error, Result};

/// Altitude thresholds that bound the horizon phases.
///
/// The named variants are the boundaries used for [`Phase`] classification and [`Event`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Sunrise/sunset: the upper limb touches the horizon, with standard refraction (-50′)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle in degrees
    Custom(f64),
}

impl Horizon {
    /// The four phase boundaries, highest first.
    pub const BOUNDARIES: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -50.0 / 60.0,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// The elevation as an [`Angle`].
    #[must_use]
    pub const fn angle(&self) -> Angle {
        Angle::from_degrees(self.elevation_angle())
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }

    /// Dawn-side and dusk-side events bounded by this horizon, if it is a named one.
    #[must_use]
    pub const fn events(&self) -> Option<(Event, Event)> {
        match self {
            Self::SunriseSunset => Some((Event::Sunrise, Event::Sunset)),
            Self::CivilTwilight => Some((Event::CivilDawn, Event::CivilDusk)),
            Self::NauticalTwilight => Some((Event::NauticalDawn, Event::NauticalDusk)),
            Self::AstronomicalTwilight => Some((Event::AstronomicalDawn, Event::AstronomicalDusk)),
            Self::Custom(_) => None,
        }
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::SunriseSunset => 0.hash(state),
            Self::CivilTwilight => 1.hash(state),
            Self::NauticalTwilight => 2.hash(state),
            Self::AstronomicalTwilight => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // -0.0 == 0.0, so they must hash alike
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Horizon phase, determined solely by solar altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Altitude at or above the sunrise/sunset threshold.
    Day,
    /// Between -50′ and -6°.
    CivilTwilight,
    /// Between -6° and -12°.
    NauticalTwilight,
    /// Between -12° and -18°.
    AstronomicalTwilight,
    /// Below -18°.
    Night,
}

impl Phase {
    /// Classifies an altitude in degrees. Each boundary belongs to the brighter phase.
    ///
    /// ```
    /// # use local_solar::Phase;
    /// assert_eq!(Phase::from_altitude(10.0), Phase::Day);
    /// assert_eq!(Phase::from_altitude(-6.0), Phase::CivilTwilight);
    /// assert_eq!(Phase::from_altitude(-6.01), Phase::NauticalTwilight);
    /// assert_eq!(Phase::from_altitude(-45.0), Phase::Night);
    /// ```
    #[must_use]
    pub fn from_altitude(altitude_degrees: f64) -> Self {
        if altitude_degrees >= Horizon::SunriseSunset.elevation_angle() {
            Self::Day
        } else if altitude_degrees >= Horizon::CivilTwilight.elevation_angle() {
            Self::CivilTwilight
        } else if altitude_degrees >= Horizon::NauticalTwilight.elevation_angle() {
            Self::NauticalTwilight
        } else if altitude_degrees >= Horizon::AstronomicalTwilight.elevation_angle() {
            Self::AstronomicalTwilight
        } else {
            Self::Night
        }
    }

    /// Upper-case name, e.g. `CIVIL_TWILIGHT`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::CivilTwilight => "CIVIL_TWILIGHT",
            Self::NauticalTwilight => "NAUTICAL_TWILIGHT",
            Self::AstronomicalTwilight => "ASTRONOMICAL_TWILIGHT",
            Self::Night => "NIGHT",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A horizon crossing that moves the sun from one [`Phase`] into the next.
///
/// Variants are declared in chronological order within a solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Event {
    /// Night → astronomical twilight.
    AstronomicalDawn,
    /// Astronomical → nautical twilight.
    NauticalDawn,
    /// Nautical → civil twilight.
    CivilDawn,
    /// Civil twilight → day.
    Sunrise,
    /// Day → civil twilight.
    Sunset,
    /// Civil → nautical twilight.
    CivilDusk,
    /// Nautical → astronomical twilight.
    NauticalDusk,
    /// Astronomical twilight → night.
    AstronomicalDusk,
}

impl Event {
    /// All events, earliest first.
    pub const ALL: [Self; 8] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Whether the sun is climbing at this event.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(
            self,
            Self::AstronomicalDawn | Self::NauticalDawn | Self::CivilDawn | Self::Sunrise
        )
    }

    /// Whether the sun is descending at this event.
    #[must_use]
    pub const fn is_setting(self) -> bool {
        !self.is_rising()
    }

    /// Phase before the event.
    #[must_use]
    pub const fn previous_phase(self) -> Phase {
        match self {
            Self::AstronomicalDawn => Phase::Night,
            Self::NauticalDawn | Self::AstronomicalDusk => Phase::AstronomicalTwilight,
            Self::CivilDawn | Self::NauticalDusk => Phase::NauticalTwilight,
            Self::Sunrise | Self::CivilDusk => Phase::CivilTwilight,
            Self::Sunset => Phase::Day,
        }
    }

    /// Phase after the event.
    #[must_use]
    pub const fn next_phase(self) -> Phase {
        match self {
            Self::AstronomicalDawn | Self::NauticalDusk => Phase::AstronomicalTwilight,
            Self::NauticalDawn | Self::CivilDusk => Phase::NauticalTwilight,
            Self::CivilDawn | Self::Sunset => Phase::CivilTwilight,
            Self::Sunrise => Phase::Day,
            Self::AstronomicalDusk => Phase::Night,
        }
    }

    /// The altitude threshold crossed at this event.
    #[must_use]
    pub const fn horizon(self) -> Horizon {
        match self {
            Self::AstronomicalDawn | Self::AstronomicalDusk => Horizon::AstronomicalTwilight,
            Self::NauticalDawn | Self::NauticalDusk => Horizon::NauticalTwilight,
            Self::CivilDawn | Self::CivilDusk => Horizon::CivilTwilight,
            Self::Sunrise | Self::Sunset => Horizon::SunriseSunset,
        }
    }

    /// Upper-case name, e.g. `CIVIL_DAWN`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AstronomicalDawn => "ASTRONOMICAL_DAWN",
            Self::NauticalDawn => "NAUTICAL_DAWN",
            Self::CivilDawn => "CIVIL_DAWN",
            Self::Sunrise => "SUNRISE",
            Self::Sunset => "SUNSET",
            Self::CivilDusk => "CIVIL_DUSK",
            Self::NauticalDusk => "NAUTICAL_DUSK",
            Self::AstronomicalDusk => "ASTRONOMICAL_DUSK",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open millisecond window `[start, end)` of one local mean solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDay {
    start: i64,
    end: i64,
}

impl SolarDay {
    pub(crate) const fn starting_at(start: i64) -> Self {
        Self {
            start,
            end: start + Millis::DAY.millis(),
        }
    }

    /// First millisecond of the day.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// First millisecond after the day.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Always exactly one day.
    #[must_use]
    pub const fn duration(&self) -> Millis {
        Millis::new(self.end - self.start)
    }

    /// Whether `epoch_millis` falls inside the window.
    #[must_use]
    pub const fn contains(&self, epoch_millis: i64) -> bool {
        self.start <= epoch_millis && epoch_millis < self.end
    }

    /// Start of the day as a UTC `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn start_datetime_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::time::to_datetime_utc(self.start)
    }
}

/// Position of the sun at one instant, as seen by the engine's observer.
///
/// Azimuth is measured clockwise from north; altitude is above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    time: i64,
    altitude: Angle,
    azimuth: Angle,
}

impl Moment {
    pub(crate) const fn new(time: i64, altitude: Angle, azimuth: Angle) -> Self {
        Self {
            time,
            altitude,
            azimuth,
        }
    }

    /// Instant in epoch milliseconds.
    #[must_use]
    pub const fn time(&self) -> i64 {
        self.time
    }

    /// Altitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude.degrees()
    }

    /// Azimuth in degrees (0° = north, clockwise, 0° to 360°).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth.degrees()
    }

    /// Zenith angle in degrees: `90° - altitude`.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        90.0 - self.altitude()
    }

    /// Altitude as an [`Angle`].
    #[must_use]
    pub const fn altitude_angle(&self) -> Angle {
        self.altitude
    }

    /// Azimuth as an [`Angle`].
    #[must_use]
    pub const fn azimuth_angle(&self) -> Angle {
        self.azimuth
    }

    /// Horizon phase at this moment.
    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::from_altitude(self.altitude())
    }

    /// Checks if the sun is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude() > 0.0
    }

    /// Nearest compass point of the sun's bearing.
    ///
    /// # Errors
    /// Returns `InvalidWind` unless `wind` is 4, 8, 16 or 32.
    pub fn compass_point(&self, wind: u32) -> Result<CompassPoint> {
        CompassPoint::closest(wind, self.azimuth())
    }

    /// The instant as a UTC `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn datetime_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::time::to_datetime_utc(self.time)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moment(time={}, phase={}, altitude={:.2}, azimuth={:.2})",
            self.time,
            self.phase(),
            self.altitude(),
            self.azimuth()
        )
    }
}

/// Outcome of solving for the instants the sun crosses one altitude.
///
/// Polar days and nights are normal outcomes at high latitudes, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossing {
    /// The sun rises through and sets through the altitude once each
    Regular {
        /// Upward crossing, before solar noon
        rising: Moment,
        /// Meridian passage (solar noon)
        transit: Moment,
        /// Downward crossing, after solar noon
        setting: Moment,
    },
    /// Sun stays above the altitude all day
    AllDay {
        /// Meridian passage (solar noon)
        transit: Moment,
    },
    /// Sun stays below the altitude all day
    AllNight {
        /// Meridian passage (highest point, still below the altitude)
        transit: Moment,
    },
}

impl Crossing {
    /// Gets the transit moment for any crossing result.
    #[must_use]
    pub const fn transit(&self) -> &Moment {
        match self {
            Self::Regular { transit, .. } | Self::AllDay { transit } | Self::AllNight { transit } => {
                transit
            }
        }
    }

    /// Checks if the altitude is crossed on this day.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        matches!(self, Self::Regular { .. })
    }

    /// Checks if the sun never drops below the altitude.
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if the sun never reaches the altitude.
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets the rising moment if the altitude is crossed.
    #[must_use]
    pub const fn rising(&self) -> Option<&Moment> {
        if let Self::Regular { rising, .. } = self {
            Some(rising)
        } else {
            None
        }
    }

    /// Gets the setting moment if the altitude is crossed.
    #[must_use]
    pub const fn setting(&self) -> Option<&Moment> {
        if let Self::Regular { setting, .. } = self {
            Some(setting)
        } else {
            None
        }
    }

    /// The `(rising, setting)` pair, or `None` when the altitude is not crossed.
    #[must_use]
    pub const fn moments(&self) -> Option<(Moment, Moment)> {
        if let Self::Regular {
            rising, setting, ..
        } = self
        {
            Some((*rising, *setting))
        } else {
            None
        }
    }
}

/// The day's events, keyed by [`Event`] and iterated in chronological order.
///
/// Events whose altitude is never crossed (polar day or night) are simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Events {
    slots: [Option<Moment>; 8],
}

impl Events {
    pub(crate) fn insert(&mut self, event: Event, moment: Moment) {
        self.slots[event.index()] = Some(moment);
    }

    /// Moment of `event`, if it happens on this day.
    #[must_use]
    pub const fn get(&self, event: Event) -> Option<&Moment> {
        self.slots[event.index()].as_ref()
    }

    /// Whether `event` happens on this day.
    #[must_use]
    pub const fn contains(&self, event: Event) -> bool {
        self.slots[event.index()].is_some()
    }

    /// Number of events present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no threshold is crossed at all (e.g. midsummer at the pole).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present events, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = (Event, &Moment)> + '_ {
        Event::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(event, slot)| slot.as_ref().map(|moment| (*event, moment)))
    }
}

impl core::ops::Index<Event> for Events {
    type Output = Option<Moment>;

    fn index(&self, event: Event) -> &Option<Moment> {
        &self.slots[event.index()]
    }
}
