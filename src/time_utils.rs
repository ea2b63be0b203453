use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;

/// Zone the report's date and time are displayed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl Default for ReportZone {
    fn default() -> Self {
        ReportZone::Fixed(Utc.fix())
    }
}

fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (sign, rest) = match trimmed.chars().next()? {
        '+' => (1, &trimmed[1..]),
        '-' => (-1, &trimmed[1..]),
        _ => return None,
    };

    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }

    let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else if rest.len() > 2 {
        let (h, m) = rest.split_at(rest.len() - 2);
        (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?)
    } else {
        (rest.parse::<i32>().ok()?, 0)
    };

    if hours > 14 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Accepts `UTC`, `GMT`, `UTC+02:00` style offsets and IANA names.
pub fn parse_timezone(raw: &str) -> Option<ReportZone> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if upper == "UTC" || upper == "GMT" {
        return Some(ReportZone::default());
    }

    if upper.starts_with("UTC") || upper.starts_with("GMT") {
        return parse_fixed_offset(trimmed.get(3..)?).map(ReportZone::Fixed);
    }

    let name = if trimmed == "Europe/Kiev" {
        "Europe/Kyiv"
    } else {
        trimmed
    };

    name.parse::<Tz>().ok().map(ReportZone::Named)
}

fn local_naive(zone: ReportZone, utc_dt: DateTime<Utc>) -> NaiveDateTime {
    match zone {
        ReportZone::Named(tz) => utc_dt.with_timezone(&tz).naive_local(),
        ReportZone::Fixed(offset) => utc_dt.with_timezone(&offset).naive_local(),
    }
}

/// Long en-US date and 2-digit 12-hour time, e.g. `("October 16, 2026", "03:07 PM")`.
pub fn format_report_datetime(zone: ReportZone, utc_dt: DateTime<Utc>) -> (String, String) {
    let local = local_naive(zone, utc_dt);
    (
        local.format("%B %-d, %Y").to_string(),
        local.format("%I:%M %p").to_string(),
    )
}
