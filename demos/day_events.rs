//! Dawns, sunrise, sunset and dusks across diverse global locations.

use chrono::{DateTime, Utc};
use local_solar::{Crossing, Horizon, LocalSolar};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
        City {
            name: "Busan, South Korea",
            latitude: 35.183333,
            longitude: 129.066667,
        },
    ];

    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>()?;
    println!("Solar events around {datetime}\n");

    for city in &cities {
        let solar = LocalSolar::try_new(city.latitude, city.longitude, datetime.timestamp_millis())?;
        println!("{} ({:.2}°, {:.2}°)", city.name, city.latitude, city.longitude);

        match solar.crossing(Horizon::SunriseSunset) {
            Crossing::Regular { rising, transit, setting } => {
                let hours = (setting.time() - rising.time()) as f64 / 3_600_000.0;
                println!("  Day length: {hours:.2} h, noon altitude {:.1}°", transit.altitude());
            }
            Crossing::AllDay { transit } => {
                println!("  Midnight sun, noon altitude {:.1}°", transit.altitude());
            }
            Crossing::AllNight { transit } => {
                println!("  Polar night, noon altitude {:.1}°", transit.altitude());
            }
        }

        for (event, moment) in solar.events().iter() {
            let time = moment
                .datetime_utc()
                .map_or_else(|| moment.time().to_string(), |dt| dt.format("%H:%M UTC").to_string());
            println!(
                "  {:<18} {time}  azimuth {:6.1}° ({})",
                event.name(),
                moment.azimuth(),
                moment.compass_point(16)?
            );
        }
        println!();
    }

    Ok(())
}
