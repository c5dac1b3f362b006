//! # Local Solar
//!
//! Low-cost sun position and day events for a single observer.
//!
//! Given latitude, longitude and an instant, [`LocalSolar`] binds to the local mean solar
//! day containing that instant and computes the equation of time, the solar declination
//! and the instant of solar noon. From those it answers altitude/azimuth queries at any
//! instant of the day and solves for the instants the sun crosses the sunrise/sunset and
//! twilight altitudes.
//!
//! The model is a low-order approximation (about 1-2° in position, a few minutes in event
//! times), cheap enough to evaluate per frame or per sensor reading.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Allocation-free: every result is a small `Copy` value
//! - [`Tracker`] reuses one engine for an observer that moves or is queried repeatedly
//! - [`CompassPoint`] classifies bearings on 4, 8, 16 or 32-point roses
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! local-solar = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! local-solar = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun position (numeric API)
//! ```rust
//! use local_solar::LocalSolar;
//!
//! // Busan, 1980-07-09T12:00+09:00 as epoch milliseconds
//! let solar = LocalSolar::new(35.183, 129.067, 331_959_600_000);
//!
//! let now = solar.current();
//! println!("Altitude: {:.2}°", now.altitude());
//! println!("Azimuth: {:.2}°", now.azimuth());
//! println!("Phase: {}", now.phase());
//! ```
//!
//! ### Day events (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use local_solar::{Crossing, Horizon, LocalSolar};
//!
//! let datetime = "2026-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let solar = LocalSolar::from_datetime(37.7749, -122.4194, &datetime);
//!
//! match solar.crossing(Horizon::SunriseSunset) {
//!     Crossing::Regular { rising, transit, setting } => {
//!         println!("Sunrise: {:?}", rising.datetime_utc());
//!         println!("Solar noon: {:?}", transit.datetime_utc());
//!         println!("Sunset: {:?}", setting.datetime_utc());
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//!
//! for (event, moment) in solar.events().iter() {
//!     println!("{event}: {:.1}°", moment.azimuth());
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Altitude**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Time**: milliseconds since 1970-01-01T00:00Z

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::angle::Angle;
pub use crate::compass::CompassPoint;
pub use crate::error::{Error, Result};
pub use crate::solar::LocalSolar;
pub use crate::tracker::Tracker;
pub use crate::types::{Crossing, Event, Events, Horizon, Moment, Phase, SolarDay};

// Engine modules
pub mod solar;
pub mod tracker;

// Core modules
pub mod angle;
pub mod compass;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
