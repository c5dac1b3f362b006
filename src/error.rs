//! Error types for the local solar library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the solar engine, the tracker and the compass classifier.
///
/// A day without a crossing of some altitude is not an error; see [`crate::Crossing`].
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An instant outside the solar day window the engine answers for.
    OutOfRange {
        /// The instant asked for, in epoch milliseconds.
        time: i64,
        /// First millisecond of the window.
        start: i64,
        /// First millisecond after the window.
        end: i64,
    },
    /// An instant too close to the ends of `i64` for its solar day to be represented.
    UnsupportedInstant {
        /// The rejected instant, in epoch milliseconds.
        time: i64,
    },
    /// Compass resolution other than 4, 8, 16 or 32 points.
    InvalidWind {
        /// The rejected resolution.
        wind: u32,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle for a custom horizon.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Negative or non-finite tracker tolerance.
    InvalidTolerance {
        /// The rejected tolerance in meters.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { time, start, end } => {
                write!(f, "time {time} is outside the solar day [{start}, {end})")
            }
            Self::UnsupportedInstant { time } => {
                write!(
                    f,
                    "time {time} is outside the supported range [{}, {}]",
                    crate::time::MIN_EPOCH_MILLIS,
                    crate::time::MAX_EPOCH_MILLIS
                )
            }
            Self::InvalidWind { wind } => {
                write!(f, "invalid wind {wind} (must be one of 4, 8, 16, 32)")
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidTolerance { value } => {
                write!(f, "invalid tolerance {value} m (must be finite and >= 0)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an out-of-range error for `time` against the window `[start, end)`.
    #[must_use]
    pub const fn out_of_range(time: i64, start: i64, end: i64) -> Self {
        Self::OutOfRange { time, start, end }
    }

    /// Creates an unsupported instant error.
    #[must_use]
    pub const fn unsupported_instant(time: i64) -> Self {
        Self::UnsupportedInstant { time }
    }

    /// Creates an invalid wind error.
    #[must_use]
    pub const fn invalid_wind(wind: u32) -> Self {
        Self::InvalidWind { wind }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid tolerance error.
    #[must_use]
    pub const fn invalid_tolerance(value: f64) -> Self {
        Self::InvalidTolerance { value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates that an instant lies between [`crate::time::MIN_EPOCH_MILLIS`] and
/// [`crate::time::MAX_EPOCH_MILLIS`], inclusive.
///
/// # Errors
/// Returns `UnsupportedInstant` for instants within two days of `i64::MIN` or `i64::MAX`.
pub fn check_epoch_millis(epoch_millis: i64) -> Result<()> {
    if !(crate::time::MIN_EPOCH_MILLIS..=crate::time::MAX_EPOCH_MILLIS).contains(&epoch_millis) {
        return Err(Error::unsupported_instant(epoch_millis));
    }
    Ok(())
}

/// Validates a tracker tolerance in meters.
///
/// # Errors
/// Returns `InvalidTolerance` for negative, NaN or infinite values.
pub fn check_tolerance(meters: f64) -> Result<()> {
    if !meters.is_finite() || meters < 0.0 {
        return Err(Error::invalid_tolerance(meters));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
        assert_eq!(
            check_coordinates(10.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_tolerance_validation() {
        assert!(check_tolerance(0.0).is_ok());
        assert!(check_tolerance(1000.0).is_ok());

        assert!(check_tolerance(-1.0).is_err());
        assert!(check_tolerance(f64::NAN).is_err());
        assert!(check_tolerance(f64::INFINITY).is_err());
    }

    #[test]
    fn test_epoch_millis_validation() {
        assert!(check_epoch_millis(0).is_ok());
        assert!(check_epoch_millis(crate::time::MIN_EPOCH_MILLIS).is_ok());
        assert!(check_epoch_millis(crate::time::MAX_EPOCH_MILLIS).is_ok());

        assert_eq!(
            check_epoch_millis(i64::MAX),
            Err(Error::unsupported_instant(i64::MAX))
        );
        assert!(check_epoch_millis(i64::MIN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::out_of_range(5, 10, 20);
        assert_eq!(
            err.to_string(),
            "time 5 is outside the solar day [10, 20)"
        );

        let err = Error::invalid_wind(12);
        assert_eq!(
            err.to_string(),
            "invalid wind 12 (must be one of 4, 8, 16, 32)"
        );

        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );
    }
}
