use chrono::{DateTime, Utc};

/// Fixed-length units, largest first. Months and years are not calendar aware.
const UNITS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

/// Coarse English label for how long ago `created_at` was, e.g. "3 days ago".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds_ago = (now - created_at).num_milliseconds().div_euclid(1000);

    for (label, seconds) in UNITS {
        let count = seconds_ago / seconds;
        if count >= 1 {
            return format!("{} {}{} ago", count, label, if count > 1 { "s" } else { "" });
        }
    }

    "just now".to_string()
}
