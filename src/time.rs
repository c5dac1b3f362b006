//! Millisecond time arithmetic.
//!
//! Instants are plain signed milliseconds since the Unix epoch (1970-01-01T00:00:00Z).
//! Calendars and time zones are never consulted; the optional `chrono` helpers only
//! convert at the boundary.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Neg, Rem, Sub, SubAssign};

/// Milliseconds per minute.
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Milliseconds per hour.
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Milliseconds per day (86,400,000).
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// 2000-01-01T00:00:00Z as milliseconds since the Unix epoch (10,957 days).
pub const JAN_1_2000_UTC: i64 = 10_957 * MILLIS_PER_DAY;

/// Earliest instant whose local mean solar day fits in `i64` milliseconds at any longitude.
pub const MIN_EPOCH_MILLIS: i64 = i64::MIN + 2 * MILLIS_PER_DAY;

/// Latest instant whose local mean solar day fits in `i64` milliseconds at any longitude.
pub const MAX_EPOCH_MILLIS: i64 = i64::MAX - 2 * MILLIS_PER_DAY;

/// Mean tropical year on 2000-01-01, in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_189_7;

/// A signed span of milliseconds.
///
/// # Example
/// ```
/// # use local_solar::time::Millis;
/// let t = Millis::from_days(3) + Millis::from_hours(5);
/// assert_eq!(t.div_floor(Millis::DAY), 3);
/// assert_eq!(t.rem_floor(Millis::DAY), Millis::from_hours(5));
///
/// // floor semantics also hold before the epoch
/// let before = Millis::new(-1);
/// assert_eq!(before.div_floor(Millis::DAY), -1);
/// assert_eq!(before.rem_floor(Millis::DAY), Millis::DAY - Millis::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(i64);

impl Millis {
    /// Zero length.
    pub const ZERO: Self = Self(0);
    /// One minute.
    pub const MINUTE: Self = Self(MILLIS_PER_MINUTE);
    /// One hour.
    pub const HOUR: Self = Self(MILLIS_PER_HOUR);
    /// One day.
    pub const DAY: Self = Self(MILLIS_PER_DAY);

    /// Wraps a raw millisecond count.
    #[must_use]
    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Whole minutes.
    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Self {
        Self(minutes * MILLIS_PER_MINUTE)
    }

    /// Whole hours.
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self(hours * MILLIS_PER_HOUR)
    }

    /// Whole days.
    #[must_use]
    pub const fn from_days(days: i64) -> Self {
        Self(days * MILLIS_PER_DAY)
    }

    /// Truncates a fractional day count to whole milliseconds.
    #[must_use]
    pub fn from_days_f64(days: f64) -> Self {
        Self((days * MILLIS_PER_DAY as f64) as i64)
    }

    /// Truncates a fractional minute count to whole milliseconds.
    #[must_use]
    pub fn from_minutes_f64(minutes: f64) -> Self {
        Self((minutes * MILLIS_PER_MINUTE as f64) as i64)
    }

    /// Raw millisecond count.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Length in (fractional) days.
    #[must_use]
    pub fn as_days_f64(self) -> f64 {
        self.0 as f64 / MILLIS_PER_DAY as f64
    }

    /// Length in (fractional) minutes.
    #[must_use]
    pub fn as_minutes_f64(self) -> f64 {
        self.0 as f64 / MILLIS_PER_MINUTE as f64
    }

    /// Number of whole `unit`s, rounded toward negative infinity.
    #[must_use]
    pub const fn div_floor(self, unit: Self) -> i64 {
        self.0.div_euclid(unit.0)
    }

    /// Remainder after [`Millis::div_floor`], always in `[0, unit)` for a positive unit.
    #[must_use]
    pub const fn rem_floor(self, unit: Self) -> Self {
        Self(self.0.rem_euclid(unit.0))
    }

    /// Absolute length.
    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Millis {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Millis {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Millis {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Millis {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Millis {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<i64> for Millis {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Truncated remainder, like `%` on `i64`. Use [`Millis::rem_floor`] for floor semantics.
impl Rem for Millis {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl From<i64> for Millis {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<Millis> for i64 {
    fn from(millis: Millis) -> Self {
        millis.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Converts epoch milliseconds to a UTC `DateTime`, `None` when out of chrono's range.
#[cfg(feature = "chrono")]
#[must_use]
pub fn to_datetime_utc(epoch_millis: i64) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp_millis(epoch_millis)
}

/// Epoch milliseconds of any timezone-aware `DateTime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn epoch_millis<Tz: chrono::TimeZone>(datetime: &chrono::DateTime<Tz>) -> i64 {
    datetime.timestamp_millis()
}
