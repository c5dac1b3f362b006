//! Example demonstrating usage without chrono.
//!
//! Everything in the numeric API works on epoch milliseconds, so it is available in
//! `no_std` builds (with the `libm` feature) where callers handle their own clocks.

use local_solar::time::{MILLIS_PER_HOUR, Millis};
use local_solar::{Event, Horizon, LocalSolar};

fn main() {
    // 2024-06-21T12:00:00Z, Vienna: 48.21°N, 16.37°E
    let epoch_millis = 1_718_971_200_000;
    let solar = LocalSolar::new(48.21, 16.37, epoch_millis);

    println!("Local solar without chrono\n");

    let day = solar.local_mean_day();
    println!("Local mean day: [{}, {})", day.start(), day.end());
    println!(
        "Local mean time offset: {:.2} h",
        solar.local_mean_time_offset().millis() as f64 / MILLIS_PER_HOUR as f64
    );
    println!("Equation of time: {}", solar.equation_of_time());
    println!("Declination: {:.3}", solar.declination_angle());
    println!();

    let noon = solar.meridian();
    println!("Solar noon: {} ms after midnight", noon.time() - day.start());
    println!("  Altitude: {:.3}°", noon.altitude());
    println!("  Azimuth: {:.3}°", noon.azimuth());
    println!();

    if let Some((rising, setting)) = solar.passing_moments(Horizon::SunriseSunset) {
        let length = Millis::new(setting.time() - rising.time());
        println!("Day length: {:.1} min", length.as_minutes_f64());
    }

    if let Some(dusk) = solar.event(Event::CivilDusk) {
        println!("Civil dusk: {dusk}");
    }

    // Hourly positions through the day
    for hour in (0..24).step_by(3) {
        let t = day.start() + hour * MILLIS_PER_HOUR;
        if let Ok(moment) = solar.moment_at(t) {
            println!("  +{hour:02}h  {moment}");
        }
    }
}
