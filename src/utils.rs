//! Utility functions

use crate::constants::APP_NAME;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Per-user data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Render hashtags as `#tag #tag`, without doubling a `#` the backend already added
pub fn format_hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim().trim_start_matches('#'))
        .filter(|t| !t.is_empty())
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable distance from `then` to `now`, e.g. "3 hours ago"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();
    if secs < 45 {
        return "just now".to_string();
    }

    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    let minutes = (secs + 30) / 60;
    if minutes < 60 {
        return plural(minutes.max(1), "minute");
    }
    let hours = (minutes + 30) / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = (hours + 12) / 24;
    if days < 30 {
        return plural(days, "day");
    }
    then.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_hashtags() {
        let tags = vec![
            "#fitness".to_string(),
            "gym".to_string(),
            "  ".to_string(),
            "##double".to_string(),
        ];
        assert_eq!(format_hashtags(&tags), "#fitness #gym #double");
        assert_eq!(format_hashtags(&[]), "");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now - Duration::seconds(10), now), "just now");
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now + Duration::minutes(5), now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(50), now), "1 minute ago");
        assert_eq!(format_relative(now - Duration::minutes(12), now), "12 minutes ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_relative(now - Duration::hours(30), now), "1 day ago");
        assert_eq!(format_relative(now - Duration::days(6), now), "6 days ago");
        assert_eq!(
            format_relative(Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(), now),
            "Jan 2, 2024"
        );
    }
}
