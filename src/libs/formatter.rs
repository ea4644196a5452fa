use chrono::{Duration, NaiveDate, NaiveDateTime};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size label stored with an uploaded material, e.g. `"2.5 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / BYTES_PER_MB)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_datetime(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}

/// "Apr 24, 2025 - Apr 28, 2025 (5 days)"
pub fn format_date_range(from: &NaiveDate, to: &NaiveDate) -> String {
    let days = (*to - *from).num_days() + 1;
    let unit = if days == 1 { "day" } else { "days" };
    format!("{} - {} ({} {})", format_date(from), format_date(to), days, unit)
}

/// Human distance between `then` and `now`, as shown on notice cards.
pub fn format_relative(then: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let elapsed = *now - *then;
    let (distance, past) = if elapsed < Duration::zero() { (-elapsed, false) } else { (elapsed, true) };
    let text = distance_in_words(distance);
    if past {
        format!("{} ago", text)
    } else {
        format!("in {}", text)
    }
}

fn distance_in_words(distance: Duration) -> String {
    let seconds = distance.num_seconds();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    match minutes {
        0 if seconds < 30 => "less than a minute".to_string(),
        0 | 1 => "1 minute".to_string(),
        2..=44 => format!("{} minutes", minutes),
        45..=89 => "about 1 hour".to_string(),
        90..=1439 => format!("about {} hours", (minutes as f64 / 60.0).round() as i64),
        1440..=2519 => "1 day".to_string(),
        2520..=43199 => format!("{} days", (minutes as f64 / 1440.0).round() as i64),
        43200..=64799 => "about 1 month".to_string(),
        64800..=86399 => "about 2 months".to_string(),
        86400..=525599 => format!("{} months", (minutes as f64 / 43200.0).round() as i64),
        _ => {
            let years = minutes / 525600;
            if years == 1 {
                "about 1 year".to_string()
            } else {
                format!("about {} years", years)
            }
        }
    }
}

/// Text shown next to the star rating.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "",
    }
}

/// Five-star bar, filled up to `rating`.
pub fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
