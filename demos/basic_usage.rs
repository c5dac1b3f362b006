//! Basic sun position example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use local_solar::LocalSolar;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Same instant, two time zones
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc
        .with_ymd_and_hms(2023, 6, 21, 19, 0, 0)
        .single()
        .ok_or("ambiguous datetime")?; // 19:00 UTC = 12:00 PDT
    let latitude = 37.7749; // San Francisco
    let longitude = -122.4194;

    let solar_fixed = LocalSolar::try_new(latitude, longitude, datetime_fixed.timestamp_millis())?;
    let solar_utc = LocalSolar::from_datetime(latitude, longitude, &datetime_utc);

    println!("Sun over San Francisco on June 21, 2023 at noon Pacific Time:");
    println!();

    let now = solar_fixed.current();
    println!("FixedOffset (-07:00):");
    println!("  Altitude: {:.2}°", now.altitude());
    println!("  Azimuth: {:.2}°", now.azimuth());
    println!("  Zenith: {:.2}°", now.zenith());
    println!("  Phase: {}", now.phase());
    println!("  Bearing: {}", now.compass_point(16)?);
    println!();

    let now = solar_utc.current();
    println!("UTC:");
    println!("  Altitude: {:.2}°", now.altitude());
    println!("  Azimuth: {:.2}°", now.azimuth());
    println!();

    println!("Day:");
    println!(
        "  Local mean day starts: {:?}",
        solar_utc.local_mean_day().start_datetime_utc()
    );
    println!(
        "  Equation of time: {:.1} min",
        solar_utc.equation_of_time().as_minutes_f64()
    );
    println!("  Declination: {:.2}°", solar_utc.declination());
    println!("  Solar noon: {:?}", solar_utc.meridian().datetime_utc());
    println!("  Noon altitude: {:.2}°", solar_utc.meridian().altitude());

    Ok(())
}
