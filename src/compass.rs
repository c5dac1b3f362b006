//! The 32-point compass rose.
//!
//! Points are 11.25° apart, starting from north and running clockwise. Coarser roses
//! (4, 8 or 16 winds) use every 8th, 4th or 2nd point.

use core::fmt;

use crate::math::fract_positive;
use crate::{Error, Result};

/// Supported compass resolutions.
pub const AVAILABLE_WINDS: [u32; 4] = [4, 8, 16, 32];

const POINTS: usize = 32;

/// One of the 32 named points of the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum CompassPoint {
    North,
    NorthByEast,
    NorthNortheast,
    NortheastByNorth,
    Northeast,
    NortheastByEast,
    EastNortheast,
    EastByNorth,
    East,
    EastBySouth,
    EastSoutheast,
    SoutheastByEast,
    Southeast,
    SoutheastBySouth,
    SouthSoutheast,
    SouthByEast,
    South,
    SouthByWest,
    SouthSouthwest,
    SouthwestBySouth,
    Southwest,
    SouthwestByWest,
    WestSouthwest,
    WestBySouth,
    West,
    WestByNorth,
    WestNorthwest,
    NorthwestByWest,
    Northwest,
    NorthwestByNorth,
    NorthNorthwest,
    NorthByWest,
}

impl CompassPoint {
    /// All points, clockwise from north.
    pub const ALL: [Self; POINTS] = [
        Self::North,
        Self::NorthByEast,
        Self::NorthNortheast,
        Self::NortheastByNorth,
        Self::Northeast,
        Self::NortheastByEast,
        Self::EastNortheast,
        Self::EastByNorth,
        Self::East,
        Self::EastBySouth,
        Self::EastSoutheast,
        Self::SoutheastByEast,
        Self::Southeast,
        Self::SoutheastBySouth,
        Self::SouthSoutheast,
        Self::SouthByEast,
        Self::South,
        Self::SouthByWest,
        Self::SouthSouthwest,
        Self::SouthwestBySouth,
        Self::Southwest,
        Self::SouthwestByWest,
        Self::WestSouthwest,
        Self::WestBySouth,
        Self::West,
        Self::WestByNorth,
        Self::WestNorthwest,
        Self::NorthwestByWest,
        Self::Northwest,
        Self::NorthwestByNorth,
        Self::NorthNorthwest,
        Self::NorthByWest,
    ];

    /// Bearing of this point in degrees, `ordinal × 11.25°`.
    #[must_use]
    pub fn direction(self) -> f64 {
        self as usize as f64 * 360.0 / POINTS as f64
    }

    /// Mariner's abbreviation, e.g. `NEbE`.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[self as usize]
    }

    /// Spelled-out name, e.g. `northeast by east`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Closest point on a `wind`-point rose to a bearing in degrees.
    ///
    /// Any real bearing is accepted; it is reduced modulo 360°. A bearing exactly
    /// halfway between two points resolves to the clockwise one.
    ///
    /// # Errors
    /// Returns `InvalidWind` unless `wind` is 4, 8, 16 or 32.
    ///
    /// # Example
    /// ```
    /// # use local_solar::CompassPoint;
    /// assert_eq!(CompassPoint::closest(8, 44.9).unwrap(), CompassPoint::Northeast);
    /// assert_eq!(CompassPoint::closest(8, 22.4).unwrap(), CompassPoint::North);
    /// assert_eq!(CompassPoint::closest(8, 22.5).unwrap(), CompassPoint::Northeast);
    /// assert_eq!(CompassPoint::closest(4, -80.0).unwrap(), CompassPoint::West);
    /// assert!(CompassPoint::closest(12, 0.0).is_err());
    /// ```
    pub fn closest(wind: u32, direction_degrees: f64) -> Result<Self> {
        if !AVAILABLE_WINDS.contains(&wind) {
            return Err(Error::invalid_wind(wind));
        }
        Ok(Self::closest_on(wind as usize, direction_degrees))
    }

    /// Closest cardinal point.
    #[must_use]
    pub fn closest_on_4_wind(direction_degrees: f64) -> Self {
        Self::closest_on(4, direction_degrees)
    }

    /// Closest cardinal or intercardinal point.
    #[must_use]
    pub fn closest_on_8_wind(direction_degrees: f64) -> Self {
        Self::closest_on(8, direction_degrees)
    }

    /// Closest point of the 16-wind rose.
    #[must_use]
    pub fn closest_on_16_wind(direction_degrees: f64) -> Self {
        Self::closest_on(16, direction_degrees)
    }

    /// Closest point of the full 32-wind rose.
    #[must_use]
    pub fn closest_on_32_wind(direction_degrees: f64) -> Self {
        Self::closest_on(32, direction_degrees)
    }

    fn closest_on(wind: usize, direction_degrees: f64) -> Self {
        // Shift by half a sector so flooring lands on the nearest point
        let turns = fract_positive(direction_degrees / 360.0 + 0.5 / wind as f64);
        let sector = ((turns * wind as f64) as usize).min(wind - 1);
        Self::ALL[sector * (POINTS / wind)]
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

const ABBREVIATIONS: [&str; POINTS] = [
    "N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN", "E", "EbS", "ESE", "SEbE", "SE",
    "SEbS", "SSE", "SbE", "S", "SbW", "SSW", "SWbS", "SW", "SWbW", "WSW", "WbS", "W", "WbN",
    "WNW", "NWbW", "NW", "NWbN", "NNW", "NbW",
];

const LABELS: [&str; POINTS] = [
    "north",
    "north by east",
    "north-northeast",
    "northeast by north",
    "northeast",
    "northeast by east",
    "east-northeast",
    "east by north",
    "east",
    "east by south",
    "east-southeast",
    "southeast by east",
    "southeast",
    "southeast by south",
    "south-southeast",
    "south by east",
    "south",
    "south by west",
    "south-southwest",
    "southwest by south",
    "southwest",
    "southwest by west",
    "west-southwest",
    "west by south",
    "west",
    "west by north",
    "west-northwest",
    "northwest by west",
    "northwest",
    "northwest by north",
    "north-northwest",
    "north by west",
];
