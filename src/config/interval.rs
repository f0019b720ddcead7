//! Human-readable durations: "10s", "30m", "1h", "1d" or bare seconds.

use std::time::Duration;

use serde::{de, Deserialize, Deserializer};

/// Longest accepted interval: one year.
pub const MAX_INTERVAL: Duration = Duration::from_secs(365 * 86400);

/// Parse an interval string like "1h", "30m", "10s", "1d" or "3600".
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();

    let secs = if let Some(hours) = s.strip_suffix('h') {
        scaled(hours, 3600).ok_or_else(|| format!("Invalid hours: {}", hours))?
    } else if let Some(minutes) = s.strip_suffix('m') {
        scaled(minutes, 60).ok_or_else(|| format!("Invalid minutes: {}", minutes))?
    } else if let Some(days) = s.strip_suffix('d') {
        scaled(days, 86400).ok_or_else(|| format!("Invalid days: {}", days))?
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.trim()
            .parse::<u64>()
            .map_err(|_| format!("Invalid seconds: {}", secs))?
    } else {
        s.parse::<u64>()
            .map_err(|_| format!("Invalid interval: {}. Use format like '10s', '30m', '1h'", s))?
    };

    checked_secs(secs)
}

fn scaled(count: &str, unit: u64) -> Option<u64> {
    count.trim().parse::<u64>().ok()?.checked_mul(unit)
}

fn checked_secs(secs: u64) -> Result<Duration, String> {
    if secs == 0 {
        return Err("Interval must be greater than zero".to_string());
    }
    let interval = Duration::from_secs(secs);
    if interval > MAX_INTERVAL {
        return Err(format!(
            "Interval must be at most {}",
            format_interval(MAX_INTERVAL)
        ));
    }
    Ok(interval)
}

/// Format an interval for display, using the largest unit that divides it.
pub fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    if secs == 0 {
        format!("{}ms", interval.as_millis())
    } else if secs >= 86400 && secs % 86400 == 0 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 && secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Accepts either an interval string or an integer number of seconds.
pub fn deserialize_interval<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Secs(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Secs(secs) => checked_secs(secs).map_err(de::Error::custom),
        Raw::Text(text) => parse_interval(&text).map_err(de::Error::custom),
    }
}
