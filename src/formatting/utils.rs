use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

fn parse_date(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local).naive_local());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render a backend date-string as `YYYY-MM-DD`, or verbatim when unparseable.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(parsed) => parsed.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

pub fn format_relative_time(timestamp: &str) -> String {
    let Some(parsed) = parse_date(timestamp) else {
        return "unknown".to_string();
    };
    let duration = Utc::now().naive_utc().signed_duration_since(parsed);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 30 {
        format!("{}mo ago", duration.num_days() / 30)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// "6h" for a present hours value, "-" otherwise.
pub fn format_hours(hours: Option<&str>) -> String {
    match hours.map(str::trim) {
        Some(h) if !h.is_empty() => format!("{}h", h),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long team name", 10), "a long ...");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-05-01"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T10:30:00"), "2024-05-01");
        assert_eq!(format_date("next week"), "next week");
    }

    #[test]
    fn test_relative_time_unparseable() {
        assert_eq!(format_relative_time("soon"), "unknown");
        assert!(format_relative_time("2001-01-01").ends_with("y ago"));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(Some("6")), "6h");
        assert_eq!(format_hours(Some(" ")), "-");
        assert_eq!(format_hours(None), "-");
    }
}
