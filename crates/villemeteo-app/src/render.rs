//! Text cards for display records.

use std::fmt::Write;

use villemeteo_weather::{describe, DisplayRecord};

/// "habitants" for more than one inhabitant, "habitant" otherwise.
pub fn population_label(population: u64) -> &'static str {
    if population > 1 {
        "habitants"
    } else {
        "habitant"
    }
}

/// Render one record as a multi-line card using today's forecast.
pub fn render_record(record: &DisplayRecord) -> String {
    let commune = &record.commune;
    let today = record.today();
    let mut card = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(card, "Nom : {}", commune.name);
    let _ = writeln!(card, "Code INSEE : {}", commune.insee_code);
    let _ = writeln!(card, "Département : {}", commune.department_code);
    let _ = writeln!(card, "📭 Codes postaux : {}", commune.postal_codes.join(", "));
    let _ = writeln!(
        card,
        "👤 Population : {} {}",
        commune.population,
        population_label(commune.population)
    );
    match today {
        Some(day) => {
            let _ = writeln!(card, "🌡️ Température : min {}°C - max {}°C", day.t_min, day.t_max);
        }
        None => {
            let _ = writeln!(card, "🌡️ Température : non disponible");
        }
    }
    let _ = write!(card, "🌦️ Temps : {}", describe(today.map(|d| d.weather_code)));

    card
}
