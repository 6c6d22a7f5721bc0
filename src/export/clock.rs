// Timestamp providers for the export header
//
// Exported configs carry a "Generated on ..." line. The wall clock and the
// locale-dependent formatting live behind `Clock` so rendering stays a pure
// function of its inputs.

use chrono::{DateTime, Local, Locale, TimeZone};
use std::fmt::Display;
use thiserror::Error;

/// Locale name not known to the date formatter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale {0:?} (expected a name like en_US or ru_RU)")]
pub struct UnknownLocale(pub String);

/// Supplies the human-readable generation timestamp
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Always returns the same text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

/// Local wall-clock time, formatted for a locale
#[derive(Clone)]
pub struct SystemClock {
    locale: Locale,
    format: String,
}

impl SystemClock {
    pub fn new(locale: Locale, format: impl Into<String>) -> Self {
        Self {
            locale,
            format: format.into(),
        }
    }

    /// Build from a locale name such as "en_US" or "ru_RU"
    pub fn from_locale_name(name: &str, format: impl Into<String>) -> Result<Self, UnknownLocale> {
        Ok(Self::new(parse_locale(name)?, format))
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        format_timestamp(&Local::now(), &self.format, self.locale)
    }
}

/// Resolve a POSIX-style locale name ("ru_RU", "de_DE")
pub fn parse_locale(name: &str) -> Result<Locale, UnknownLocale> {
    Locale::try_from(name).map_err(|_| UnknownLocale(name.to_string()))
}

/// Format `at` with a strftime pattern in the given locale
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format_localized(format, locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_is_constant() {
        let clock = FixedClock::new("05 March 2024, 14:07");
        assert_eq!(clock.timestamp(), clock.timestamp());
        assert_eq!(clock.timestamp(), "05 March 2024, 14:07");
    }

    #[test]
    fn test_format_timestamp_english() {
        let text = format_timestamp(&fixed_instant(), "%d %B %Y, %H:%M", Locale::en_US);
        assert_eq!(text, "05 March 2024, 14:07");
    }

    #[test]
    fn test_format_timestamp_is_locale_dependent() {
        let en = format_timestamp(&fixed_instant(), "%d %B %Y, %H:%M", Locale::en_US);
        let ru = format_timestamp(&fixed_instant(), "%d %B %Y, %H:%M", Locale::ru_RU);
        assert_ne!(en, ru);
        assert!(ru.starts_with("05 "));
        assert!(ru.ends_with("2024, 14:07"));
    }

    #[test]
    fn test_parse_locale() {
        assert!(parse_locale("ru_RU").is_ok());
        assert_eq!(
            parse_locale("xx_YY").err(),
            Some(UnknownLocale("xx_YY".to_string()))
        );
    }

    #[test]
    fn test_system_clock_produces_text() {
        let clock = SystemClock::from_locale_name("en_US", "%Y").unwrap();
        let year = clock.timestamp();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }
}
