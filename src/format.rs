use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use regex::{NoExpand, Regex};
use once_cell::sync::Lazy;
use std::time::Duration;

/// Pattern used for log line timestamps
pub const LOG_DATE_PATTERN: &str = "[yyyy-MM-jj hh:mm:ss.SSSS]";

static YEAR: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)y{4}"));
static MONTH: Lazy<Regex> = Lazy::new(|| pattern(r"M{2}"));
static DAY: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)[dj]{2}"));
static HOUR: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)h{2}"));
static MINUTE: Lazy<Regex> = Lazy::new(|| pattern(r"m{2}"));
static SECOND: Lazy<Regex> = Lazy::new(|| pattern(r"s{2}"));
static MILLIS: Lazy<Regex> = Lazy::new(|| pattern(r"S{4}"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("date patterns are valid regexes")
}

/// Left-pads a number with zeros up to `size` digits
pub fn add_missing_zeros(number: u64, size: usize) -> String {
    format!("{:0>size$}", number, size = size)
}

/// Substitutes date tokens in `pattern` with the parts of `date`
///
/// Supported tokens:
/// - `yyyy` year (case-insensitive)
/// - `MM` month
/// - `dd` / `jj` day (case-insensitive)
/// - `hh` hours (case-insensitive)
/// - `mm` minutes
/// - `ss` seconds
/// - `SSSS` milliseconds
pub fn parse_date(pattern: &str, date: &NaiveDateTime) -> String {
    substitute_date(
        pattern,
        date.year().to_string(),
        date.month() as u64,
        date.day() as u64,
        date,
    )
}

/// Same tokens as [`parse_date`], filled with an elapsed span
///
/// Years, months and days count from zero, so three days and two hours
/// render `dd hh` as `03 02`. Months are calendar months from the epoch.
pub fn parse_relative_date(pattern: &str, elapsed: Duration) -> String {
    let span = chrono::Duration::from_std(elapsed).unwrap_or(chrono::Duration::MAX);
    let date = DateTime::<Utc>::UNIX_EPOCH
        .naive_utc()
        .checked_add_signed(span)
        .unwrap_or(NaiveDateTime::MAX);

    substitute_date(
        pattern,
        (date.year() - 1970).to_string(),
        date.month0() as u64,
        date.day0() as u64,
        &date,
    )
}

fn substitute_date(pattern: &str, year: String, month: u64, day: u64, time: &NaiveDateTime) -> String {
    let month = add_missing_zeros(month, 2);
    let day = add_missing_zeros(day, 2);
    let hour = add_missing_zeros(time.hour() as u64, 2);
    let minute = add_missing_zeros(time.minute() as u64, 2);
    let second = add_missing_zeros(time.second() as u64, 2);
    let millis = add_missing_zeros((time.nanosecond() / 1_000_000).min(999) as u64, 3);

    let result = YEAR.replace_all(pattern, NoExpand(&year));
    let result = MONTH.replace_all(&result, NoExpand(&month));
    let result = DAY.replace_all(&result, NoExpand(&day));
    let result = HOUR.replace_all(&result, NoExpand(&hour));
    let result = MINUTE.replace_all(&result, NoExpand(&minute));
    let result = SECOND.replace_all(&result, NoExpand(&second));
    MILLIS.replace_all(&result, NoExpand(&millis)).into_owned()
}

/// Formats a byte count as bytes, KB, MB or GB (decimal units)
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < 1_000 {
        format!("{} bytes", bytes)
    } else if bytes < 1_000_000 {
        format!("{:.3} KB", bytes as f64 / 1_000.0)
    } else if bytes < 1_000_000_000 {
        format!("{:.3} MB", bytes as f64 / 1_000_000.0)
    } else {
        format!("{:.3} GB", bytes as f64 / 1_000_000_000.0)
    }
}

/// Unit of a parsed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    fn millis(self) -> u64 {
        match self {
            TimeUnit::Days => 86_400_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Seconds => 1_000,
        }
    }
}

/// A duration parsed from free text such as `"5h"` or `"wait 10 minutes"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub unit: TimeUnit,
    pub millis: u64,
}

impl TimeSpan {
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

// Longest suffixes first so "minutes" is not read as "<n>minute" + "s".
const UNIT_SUFFIXES: &[(&str, TimeUnit)] = &[
    ("secondes", TimeUnit::Seconds),
    ("seconde", TimeUnit::Seconds),
    ("seconds", TimeUnit::Seconds),
    ("minutes", TimeUnit::Minutes),
    ("second", TimeUnit::Seconds),
    ("heures", TimeUnit::Hours),
    ("minute", TimeUnit::Minutes),
    ("heure", TimeUnit::Hours),
    ("hours", TimeUnit::Hours),
    ("jours", TimeUnit::Days),
    ("days", TimeUnit::Days),
    ("hour", TimeUnit::Hours),
    ("jour", TimeUnit::Days),
    ("day", TimeUnit::Days),
    ("d", TimeUnit::Days),
    ("j", TimeUnit::Days),
    ("h", TimeUnit::Hours),
    ("m", TimeUnit::Minutes),
    ("s", TimeUnit::Seconds),
];

/// Parses a duration from the last word of `text`, falling back to the first
/// word. Returns `None` when neither carries a number with a known unit.
pub fn parse_duration(text: &str) -> Option<TimeSpan> {
    let lowered = text.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let last = words.last().and_then(|word| parse_time_word(word));
    last.or_else(|| words.first().and_then(|word| parse_time_word(word)))
}

fn parse_time_word(word: &str) -> Option<TimeSpan> {
    UNIT_SUFFIXES.iter().find_map(|(suffix, unit)| {
        let amount = word.strip_suffix(suffix)?.trim().parse::<u64>().ok()?;
        Some(TimeSpan {
            unit: *unit,
            millis: amount.checked_mul(unit.millis())?,
        })
    })
}

/// Cuts `text` to at most `max` characters, ending with `...` when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Maps a character to its Unicode superscript form, if there is one
fn superscript(c: char) -> Option<char> {
    let sup = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        _ => return None,
    };
    Some(sup)
}

/// Transliterates text to superscript, leaving unmapped characters as-is
pub fn to_superscript(text: &str) -> String {
    text.chars().map(|c| superscript(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 5, 2)
            .unwrap()
            .and_hms_milli_opt(1, 7, 9, 45)
            .unwrap()
    }

    #[test]
    fn test_parse_date_tokens() {
        let result = parse_date(LOG_DATE_PATTERN, &sample_date());
        assert_eq!(result, "[2020-05-02 01:07:09.045]");
    }

    #[test]
    fn test_parse_date_keeps_other_text() {
        let result = parse_date("Il est hh heure et mm minutes.", &sample_date());
        assert_eq!(result, "Il est 01 heure et 07 minutes.");
    }

    #[test]
    fn test_parse_relative_date() {
        let elapsed = Duration::from_millis(((3 * 24 + 2) * 3600 + 5 * 60 + 9) * 1000 + 45);
        assert_eq!(
            parse_relative_date("jj:hh:mm:ss.SSSS", elapsed),
            "03:02:05:09.045"
        );
        assert_eq!(
            parse_relative_date("yyyy MM jj", Duration::from_secs(400 * 86_400)),
            "1 01 04"
        );
        assert_eq!(parse_relative_date("hh:mm", Duration::ZERO), "00:00");
    }

    #[test]
    fn test_add_missing_zeros() {
        assert_eq!(add_missing_zeros(5, 2), "05");
        assert_eq!(add_missing_zeros(123, 2), "123");
    }

    #[test]
    fn test_format_byte_size() {
        assert_eq!(format_byte_size(999), "999 bytes");
        assert_eq!(format_byte_size(1_500), "1.500 KB");
        assert_eq!(format_byte_size(2_000_000), "2.000 MB");
        assert_eq!(format_byte_size(3_250_000_000), "3.250 GB");
    }

    #[test]
    fn test_parse_duration_last_word() {
        let span = parse_duration("Je veux attendre 5h").unwrap();
        assert_eq!(span.unit, TimeUnit::Hours);
        assert_eq!(span.millis, 5 * 60 * 60 * 1000);
    }

    #[test]
    fn test_parse_duration_long_suffixes() {
        assert_eq!(parse_duration("10minutes").unwrap().unit, TimeUnit::Minutes);
        assert_eq!(parse_duration("2jours").unwrap().millis, 2 * 86_400_000);
        assert_eq!(
            parse_duration("30s").unwrap().as_duration(),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_parse_duration_falls_back_to_first_word() {
        let span = parse_duration("3d from now").unwrap();
        assert_eq!(span.unit, TimeUnit::Days);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("soon").is_none());
        assert!(parse_duration("5ms").is_none());
    }

    #[test]
    fn test_truncate_short_text_is_unchanged() {
        let text = "a".repeat(1024);
        assert_eq!(truncate(&text, 1024), text);
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "é".repeat(1500);
        let result = truncate(&text, 1024);
        assert_eq!(result.chars().count(), 1024);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_to_superscript() {
        assert_eq!(to_superscript("10-3"), "¹⁰⁻³");
        assert_eq!(to_superscript("2n Q"), "²ⁿ Q");
    }
}
