use std::fmt;

use chrono::{DateTime, Locale, TimeZone};

/// Abbreviated weekday, then `dd.mm.yyyy`.
pub const DATE_FORMAT: &str = "%a, %d.%m.%Y";

/// Formats the date part of `at` for the badge, e.g. `Fri, 15.03.2024`.
///
/// Weekday names come from `locale`.
pub fn format_date<Tz>(at: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format_localized(DATE_FORMAT, locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn posix_uses_english_abbreviations() {
        let label = format_date(&date(2024, 3, 15), Locale::POSIX);
        assert_eq!(label, "Fri, 15.03.2024");
    }

    #[test]
    fn day_and_month_are_zero_padded() {
        let label = format_date(&date(2023, 1, 2), Locale::POSIX);
        assert_eq!(label, "Mon, 02.01.2023");
    }

    #[test]
    fn weekday_follows_locale() {
        let label = format_date(&date(2024, 3, 15), Locale::de_DE);
        assert_eq!(label, "Fr, 15.03.2024");
    }
}
