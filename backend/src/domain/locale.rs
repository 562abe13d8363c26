//! Locale preference persisted in a single cookie.
//!
//! The store only reads and writes the cookie; checking that a requested
//! locale is supported happens at the caller boundary via [`Locale::from_str`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cookie holding the locale preference.
pub const LOCALE_COOKIE_NAME: &str = "NEXT_LOCALE";

/// Locale used when no preference cookie is present.
pub const DEFAULT_LOCALE: Locale = Locale::Id;

/// Lifetime of the locale cookie (one year).
pub const LOCALE_COOKIE_MAX_AGE: Duration = Duration::from_secs(31_536_000);

/// Supported interface locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Bahasa Indonesia.
    Id,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Self; 2] = [Self::Id, Self::En];

    /// Cookie and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a locale string is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{value}'")]
pub struct UnsupportedLocale {
    /// Raw value supplied by the caller.
    pub value: String,
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| UnsupportedLocale {
                value: s.to_owned(),
            })
    }
}

/// `SameSite` attribute for cookies written through a [`CookieStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSitePolicy {
    /// Sent on top-level navigations and same-site requests.
    Lax,
    /// Sent on same-site requests only.
    Strict,
    /// Sent on every request; requires `Secure`.
    None,
}

/// Attributes attached to a cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Hide the cookie from client-side scripts.
    pub http_only: bool,
    /// Only send over HTTPS.
    pub secure: bool,
    /// Cross-site policy.
    pub same_site: SameSitePolicy,
    /// Lifetime from the time of writing.
    pub max_age: Duration,
    /// Path scope.
    pub path: &'static str,
}

/// Narrow key/value view over request and response cookies.
///
/// Implementations must not cache: `get` after `set` within the same store
/// observes the written value, and nothing else.
pub trait CookieStore {
    /// Current value of `name`, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// Write `name` with the given attributes.
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions);
}

/// Reads and writes the locale preference cookie.
///
/// # Examples
/// ```
/// use housing::domain::{Locale, LocaleStore, MemoryCookieStore};
///
/// let store = LocaleStore::new(false);
/// let mut cookies = MemoryCookieStore::default();
/// assert_eq!(store.user_locale(&cookies), Locale::Id);
///
/// store.set_user_locale(&mut cookies, Locale::En);
/// assert_eq!(store.user_locale(&cookies), Locale::En);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStore {
    secure: bool,
}

impl LocaleStore {
    /// Build a store; `secure` should be true for production builds only.
    #[must_use]
    pub const fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Attributes used for every locale write.
    #[must_use]
    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            http_only: true,
            secure: self.secure,
            same_site: SameSitePolicy::Lax,
            max_age: LOCALE_COOKIE_MAX_AGE,
            path: "/",
        }
    }

    /// Locale from the cookie, or [`DEFAULT_LOCALE`] when unset.
    ///
    /// A cookie carrying an unsupported value is treated as unset.
    pub fn user_locale<S: CookieStore + ?Sized>(&self, cookies: &S) -> Locale {
        match cookies.get(LOCALE_COOKIE_NAME) {
            Some(raw) => raw.parse().unwrap_or_else(|err: UnsupportedLocale| {
                debug!(value = %err.value, "ignoring unsupported locale cookie");
                DEFAULT_LOCALE
            }),
            None => DEFAULT_LOCALE,
        }
    }

    /// Persist `locale` in the cookie.
    pub fn set_user_locale<S: CookieStore + ?Sized>(&self, cookies: &mut S, locale: Locale) {
        cookies.set(LOCALE_COOKIE_NAME, locale.as_str(), &self.cookie_options());
    }
}

/// In-memory [`CookieStore`] keeping the last write per name.
#[derive(Debug, Default, Clone)]
pub struct MemoryCookieStore {
    cookies: HashMap<String, (String, CookieOptions)>,
}

impl MemoryCookieStore {
    /// Options recorded with the last write of `name`.
    #[must_use]
    pub fn options(&self, name: &str) -> Option<&CookieOptions> {
        self.cookies.get(name).map(|(_, options)| options)
    }

    /// Number of distinct cookies written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether no cookie has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|(value, _)| value.clone())
    }

    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) {
        self.cookies
            .insert(name.to_owned(), (value.to_owned(), options.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("id", Locale::Id)]
    #[case("en", Locale::En)]
    fn parses_supported_locales(#[case] raw: &str, #[case] expected: Locale) {
        assert_eq!(raw.parse::<Locale>(), Ok(expected));
    }

    #[rstest]
    #[case("fr")]
    #[case("EN")]
    #[case("")]
    fn rejects_unsupported_locales(#[case] raw: &str) {
        let err = raw.parse::<Locale>().expect_err("unsupported");
        assert_eq!(err.value, raw);
    }

    #[rstest]
    fn missing_cookie_reads_default() {
        let cookies = MemoryCookieStore::default();
        assert_eq!(LocaleStore::new(false).user_locale(&cookies), DEFAULT_LOCALE);
    }

    #[rstest]
    fn unsupported_cookie_value_reads_default() {
        let store = LocaleStore::new(false);
        let mut cookies = MemoryCookieStore::default();
        cookies.set(LOCALE_COOKIE_NAME, "fr", &store.cookie_options());
        assert_eq!(store.user_locale(&cookies), Locale::Id);
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn writes_cookie_with_expected_flags(#[case] secure: bool) {
        let store = LocaleStore::new(secure);
        let mut cookies = MemoryCookieStore::default();
        store.set_user_locale(&mut cookies, Locale::En);

        let options = cookies.options(LOCALE_COOKIE_NAME).expect("cookie written");
        assert!(options.http_only);
        assert_eq!(options.secure, secure);
        assert_eq!(options.same_site, SameSitePolicy::Lax);
        assert_eq!(options.max_age, Duration::from_secs(31_536_000));
        assert_eq!(options.path, "/");
    }

    #[rstest]
    fn setting_twice_matches_setting_once() {
        let store = LocaleStore::new(false);
        let mut once = MemoryCookieStore::default();
        store.set_user_locale(&mut once, Locale::En);

        let mut twice = MemoryCookieStore::default();
        store.set_user_locale(&mut twice, Locale::En);
        store.set_user_locale(&mut twice, Locale::En);

        assert_eq!(twice.len(), 1);
        assert_eq!(twice.get(LOCALE_COOKIE_NAME), once.get(LOCALE_COOKIE_NAME));
        assert_eq!(
            twice.options(LOCALE_COOKIE_NAME),
            once.options(LOCALE_COOKIE_NAME)
        );
    }
}
