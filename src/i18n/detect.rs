//! Locale detection from the POSIX locale environment.

use crate::error::LocaleError;
use tracing::debug;

/// Locale used when none can be detected
pub const DEFAULT_LOCALE: &str = "C";

/// Checked in order; the first non-empty one wins.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// The user's locale, e.g. `en_US`, or [`DEFAULT_LOCALE`]. Never fails.
pub fn detect() -> String {
    detect_with(system_locale)
}

/// Run `detector`, falling back to [`DEFAULT_LOCALE`] if it fails.
pub fn detect_with<F>(detector: F) -> String
where
    F: FnOnce() -> Result<String, LocaleError>,
{
    match detector() {
        Ok(locale) => locale,
        Err(e) => {
            debug!(error = %e, "locale detection failed, using {}", DEFAULT_LOCALE);
            DEFAULT_LOCALE.to_string()
        }
    }
}

/// Locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, without encoding or
/// modifier (`de_DE.UTF-8@euro` -> `de_DE`).
pub fn system_locale() -> Result<String, LocaleError> {
    locale_from(|name| std::env::var(name).ok())
}

fn locale_from<L>(lookup: L) -> Result<String, LocaleError>
where
    L: Fn(&str) -> Option<String>,
{
    let raw = LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .ok_or(LocaleError::NotSet)?;

    let locale = raw.split(['.', '@']).next().unwrap_or("").trim();
    if locale.is_empty() {
        return Err(LocaleError::Malformed(raw));
    }
    Ok(locale.to_string())
}
