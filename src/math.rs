//! Float helpers that dispatch to `std` or `libm`, plus the spherical geometry the tracker needs.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature for floating point math");

/// One full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Mean Earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

macro_rules! unary_float_fn {
    ($(#[$doc:meta] $name:ident => $libm:ident),* $(,)?) => {
        $(
            #[$doc]
            #[inline]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                return x.$name();

                #[cfg(not(feature = "std"))]
                return libm::$libm(x);
            }
        )*
    };
}

unary_float_fn! {
    /// Sine of an angle in radians.
    sin => sin,
    /// Cosine of an angle in radians.
    cos => cos,
    /// Arcsine in radians; NaN outside [-1, 1].
    asin => asin,
    /// Arccosine in radians; NaN outside [-1, 1].
    acos => acos,
    /// Square root.
    sqrt => sqrt,
    /// Largest integer less than or equal to `x`.
    floor => floor,
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Fractional part of `x` in [0, 1), also for negative inputs.
pub fn fract_positive(x: f64) -> f64 {
    let f = x - floor(x);
    // x - floor(x) rounds up to exactly 1.0 for tiny negative x
    if f >= 1.0 { 0.0 } else { f }
}

/// Great-circle distance between two points given in degrees (haversine formula).
pub fn haversine_distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let s_phi = sin(d_phi / 2.0);
    let s_lambda = sin(d_lambda / 2.0);
    let a = s_phi * s_phi + cos(phi1) * cos(phi2) * s_lambda * s_lambda;

    2.0 * EARTH_RADIUS_METERS * atan2(sqrt(a), sqrt(1.0 - a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_fract_positive() {
        assert!((fract_positive(1.25) - 0.25).abs() < EPSILON);
        assert!((fract_positive(-0.25) - 0.75).abs() < EPSILON);
        assert_eq!(fract_positive(3.0), 0.0);
        assert_eq!(fract_positive(-1e-20), 0.0);
    }

    #[test]
    fn test_trigonometric_functions() {
        assert!(sin(0.0).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((asin(1.0) - PI / 2.0).abs() < EPSILON);
        assert!((acos(-1.0) - PI).abs() < EPSILON);
        assert!(acos(1.5).is_nan());
    }

    #[test]
    fn test_haversine_distance() {
        assert_eq!(haversine_distance_meters(10.0, 20.0, 10.0, 20.0), 0.0);

        // One degree of latitude along a meridian
        let one_degree = haversine_distance_meters(0.0, 0.0, 1.0, 0.0);
        assert!((one_degree - EARTH_RADIUS_METERS * PI / 180.0).abs() < 1e-6);

        // Pier 39 to Coit Tower, San Francisco (~780 m)
        let d = haversine_distance_meters(37.808_689_5, -122.409_976_6, 37.802_381_3, -122.405_978_4);
        assert!((700.0..850.0).contains(&d), "distance was {d}");

        // Antipodes are half the circumference apart
        let half = haversine_distance_meters(0.0, 0.0, 0.0, 180.0);
        assert!((half - EARTH_RADIUS_METERS * PI).abs() < 1e-6);
    }
}
