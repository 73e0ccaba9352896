use chrono::Locale;

/// Environment variables consulted for the time locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Resolves the host's time-formatting locale from the environment.
///
/// Falls back to `POSIX` when nothing is set or the locale is unknown, so date
/// formatting never fails on a missing locale.
pub fn host_locale() -> Locale {
    locale_from(|var| std::env::var(var).ok())
}

/// Picks the first non-blank value of [`LOCALE_VARS`] returned by `lookup`.
fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|&var| lookup(var))
        .find(|value| !value.trim().is_empty())
        .map(|value| parse_locale(&value))
        .unwrap_or(Locale::POSIX)
}

/// Parses a POSIX locale string such as `de_DE.UTF-8` or `sr_RS@latin`.
///
/// Codeset and modifier suffixes are ignored, `-` is accepted in place of `_`.
pub fn parse_locale(tag: &str) -> Locale {
    let name = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    match name.as_str() {
        "" | "C" | "POSIX" => Locale::POSIX,
        _ => Locale::try_from(name.as_str()).unwrap_or_else(|_| {
            log::debug!("unknown locale {tag:?}, formatting dates with POSIX");
            Locale::POSIX
        }),
    }
}
