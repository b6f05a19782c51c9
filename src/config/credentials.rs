//! API key resolution.
//!
//! Keys come from the config file first and fall back to environment
//! variables. They are wrapped in [`SecureString`] before reaching an
//! adapter so they never show up in logs.

use super::types::Config;

pub const WEATHER_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const OMDB_KEY_ENV: &str = "OMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Fill missing API keys from the environment.
///
/// `lookup` is `std::env::var(..).ok()` in production; tests pass a closure.
/// Blank values from either source are treated as missing.
pub fn resolve_api_keys<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    config.weather.api_key = pick_key(config.weather.api_key.take(), || lookup(WEATHER_KEY_ENV));
    config.movies.api_key = pick_key(config.movies.api_key.take(), || lookup(OMDB_KEY_ENV));
}

fn pick_key<F>(configured: Option<String>, fallback: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(fallback)
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_string_hides_value() {
        let key = SecureString::new("abc123".into());
        assert_eq!(format!("{key}"), "••••••••");
        assert!(!format!("{key:?}").contains("abc123"));
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn config_key_wins_over_env() {
        let mut config = Config::default();
        config.weather.api_key = Some("from-file".into());
        resolve_api_keys(&mut config, |_| Some("from-env".into()));
        assert_eq!(config.weather.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.movies.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn blank_keys_are_missing() {
        let mut config = Config::default();
        config.movies.api_key = Some("   ".into());
        resolve_api_keys(&mut config, |name| {
            (name == OMDB_KEY_ENV).then(|| String::new())
        });
        assert!(config.movies.api_key.is_none());
        assert!(config.weather.api_key.is_none());
    }
}
