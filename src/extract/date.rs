// 📅 Date Extraction
// Numeric dates, spelled-out Spanish months, and relative "hoy"/"ayer".
// Anything unparseable (including impossible day/month combinations)
// resolves to `today`; the pipeline never fails on a bad date.

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

fn numeric_4y() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})").expect("date d/m/yyyy"))
}

fn numeric_2y() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{2})\b").expect("date d/m/yy"))
}

fn spelled_month() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)(?:el\s+)?(\d{1,2})\s+de\s+(enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)",
        )
        .expect("date spelled month")
    })
}

/// Extract a calendar date from a line of free text.
///
/// Order: numeric with 4-digit year, numeric with 2-digit year (+2000),
/// "(el) N de <mes>" assuming the current year, then the relative terms
/// "hoy" and "ayer". Falls back to `today` when nothing matches or the
/// matched combination is not a real date.
pub fn extract_date(text: &str, today: NaiveDate) -> NaiveDate {
    if let Some(caps) = numeric_4y().captures(text) {
        if let Some(date) = build_date(&caps[3], &caps[2], &caps[1], None) {
            return date;
        }
        return today;
    }

    if let Some(caps) = numeric_2y().captures(text) {
        if let Some(date) = build_date(&caps[3], &caps[2], &caps[1], Some(2000)) {
            return date;
        }
        return today;
    }

    if let Some(caps) = spelled_month().captures(text) {
        let month_name = caps[2].to_lowercase();
        let month = MONTHS.iter().position(|m| *m == month_name).map(|i| i as u32 + 1);
        let day = caps[1].parse::<u32>().ok();
        if let (Some(month), Some(day)) = (month, day) {
            if let Some(date) = NaiveDate::from_ymd_opt(today.year(), month, day) {
                return date;
            }
        }
        return today;
    }

    if contains_word_ci(text, "hoy") {
        return today;
    }
    if contains_word_ci(text, "ayer") {
        return today - Duration::days(1);
    }

    today
}

fn build_date(year: &str, month: &str, day: &str, year_offset: Option<i32>) -> Option<NaiveDate> {
    let year = year.parse::<i32>().ok()? + year_offset.unwrap_or(0);
    let month = month.parse::<u32>().ok()?;
    let day = day.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn contains_word_ci(text: &str, word: &str) -> bool {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphabetic())
        .any(|w| w == word)
}
