//! Event duration helpers.
//!
//! Durations travel as minutes on the wire; users enter them in the unit
//! tags the backend understands (`"minutos"`, `"horas"`, `"dias"`). Display
//! strings match the product's Portuguese copy.

pub const UNIT_MINUTES: &str = "minutos";
pub const UNIT_HOURS: &str = "horas";
pub const UNIT_DAYS: &str = "dias";

/// Formats a duration in minutes for display.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} minuto{}", plural(minutes));
    }

    if minutes < 1440 {
        let hours = f64::from(minutes) / 60.0;
        return format!(
            "{} hora{}",
            trim_fraction(hours),
            plural(hours.ceil() as u32)
        );
    }

    let days = f64::from(minutes) / 1440.0;
    format!("{} dia{}", trim_fraction(days), plural(days.ceil() as u32))
}

/// Converts a user-entered value and unit tag to minutes.
pub fn parse_duration_to_minutes(value: u32, unit: &str) -> u32 {
    match unit {
        UNIT_DAYS => value * 1440,
        UNIT_HOURS => value * 60,
        _ => value,
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn trim_fraction(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u32)
    } else {
        format!("{value:.1}")
    }
}
