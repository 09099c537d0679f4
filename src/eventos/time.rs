use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TWELVE_HOUR_REGEX: Regex =
        Regex::new(r"(?i)(\d+):(\d+)\s*(AM|PM)").expect("Failed to create time regex");
}

/// Converts "H:MM AM/PM" to 24-hour format. Input already in 24-hour format
/// is returned unchanged.
///
/// The hour keeps whatever width the input had ("9:15 AM" stays "9:15"),
/// except for midnight which becomes "00".
pub fn to_24_hour(hora: &str) -> String {
    if hora.is_empty() {
        return String::new();
    }
    if !hora.contains("AM") && !hora.contains("PM") {
        return hora.to_string();
    }

    let (time, modifier) = hora.split_once(' ').unwrap_or((hora, ""));
    let (hours, minutes) = time.split_once(':').unwrap_or((time, "00"));

    let hours = if hours == "12" { "00" } else { hours };
    let hours = if modifier == "PM" {
        (hours.parse::<u32>().unwrap_or(0) + 12).to_string()
    } else {
        hours.to_string()
    };

    format!("{hours}:{minutes}")
}

/// Converts "HH:MM" (24-hour) to "H:MM AM/PM". Hour 0 displays as 12 AM,
/// hour 12 as 12 PM.
pub fn to_12_hour(hora: &str) -> String {
    if hora.is_empty() {
        return String::new();
    }

    let (hours, minutes) = hora.split_once(':').unwrap_or((hora, "00"));
    let hours = hours.parse::<u32>().unwrap_or(0);

    let period = if hours >= 12 { "PM" } else { "AM" };
    let hours = match hours % 12 {
        0 => 12,
        reduced => reduced,
    };

    format!("{hours}:{minutes} {period}")
}

/// Minutes since midnight, accepting either textual form. The 12-hour pattern
/// is tried first; anything else is read as 24-hour components. Missing or
/// unparseable components count as zero.
pub fn to_minutes(hora: &str) -> u32 {
    if hora.is_empty() {
        return 0;
    }

    if let Some(captures) = TWELVE_HOUR_REGEX.captures(hora) {
        let mut hours: u32 = captures[1].parse().unwrap_or(0);
        let minutes: u32 = captures[2].parse().unwrap_or(0);
        let period = captures[3].to_uppercase();

        if period == "PM" && hours != 12 {
            hours += 12;
        }
        if period == "AM" && hours == 12 {
            hours = 0;
        }

        return hours * 60 + minutes;
    }

    let mut parts = hora.split(':');
    let hours: u32 = parts.next().and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);

    hours * 60 + minutes
}
