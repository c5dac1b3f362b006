//! Following the sun from a moving observer with engine reuse.

use chrono::{DateTime, Duration, Utc};
use local_solar::LocalSolar;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = "2014-08-29T19:00:00Z".parse::<DateTime<Utc>>()?;
    let mut tracker = LocalSolar::tracker(1000.0)?;

    println!("Walking from Pier 39 toward Rincon Center\n");

    let mut engines = 0;
    let mut last_origin = None;

    for step in 0..30_i32 {
        let latitude = 37.8087 - f64::from(step) * 0.000_6;
        let longitude = -122.4098 + f64::from(step) * 0.000_5;
        let when = start + Duration::minutes(i64::from(step) * 2);

        let (moment, solar) = tracker.track_with_engine(latitude, longitude, when.timestamp_millis());

        let origin = Some((solar.latitude(), solar.longitude()));
        if origin != last_origin {
            engines += 1;
            last_origin = origin;
        }

        println!(
            "{}  ({latitude:.4}, {longitude:.4})  altitude {:5.2}°  azimuth {:6.2}°",
            when.format("%H:%M"),
            moment.altitude(),
            moment.azimuth()
        );
    }

    println!("\n30 samples answered by {engines} engines");
    Ok(())
}
