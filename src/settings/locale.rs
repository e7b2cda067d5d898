//! Locale selection.
//!
//! Only *which* locale is selected belongs to this crate; date and number
//! formatting against it happens in the renderer. A [`Locale`] is therefore
//! a validated tag, not a formatting ruleset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValueParseError;

/// A locale tag of the form `language[_COUNTRY[_VARIANT]]`.
///
/// Both `_` and `-` separators are accepted on input; the canonical textual
/// form uses `_` (`en_US`, `pt_BR`, `de_DE_phonebook`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// ISO 639 language code, lower case.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 3166 country code (or UN M.49 area number), if present.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Vendor or script variant, if present.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The ambient process default.
    ///
    /// Resolved from the `LC_ALL`, `LC_MESSAGES`, and `LANG` environment
    /// variables in that order, ignoring the `C`/`POSIX` pseudo-locales.
    /// Falls back to `en_US` when the environment names nothing usable.
    pub fn platform_default() -> Locale {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(raw) = std::env::var(var) {
                if let Some(locale) = Locale::from_env_tag(&raw) {
                    return locale;
                }
            }
        }
        Locale {
            language: "en".to_string(),
            country: Some("US".to_string()),
            variant: None,
        }
    }

    /// Parses an environment-style tag such as `en_US.UTF-8@euro`, dropping
    /// the codeset and modifier suffixes.
    fn from_env_tag(raw: &str) -> Option<Locale> {
        let tag = raw.split(['.', '@']).next()?;
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return None;
        }
        tag.parse().ok()
    }
}

impl FromStr for Locale {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ValueParseError::MalformedLocale {
            tag: s.to_string(),
            reason,
        };

        let mut parts = s.split(['_', '-']);

        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(malformed("language must be 2-3 ASCII letters"));
        }

        let country = match parts.next() {
            None => None,
            Some(part) => {
                let alpha2 = part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic());
                let numeric3 = part.len() == 3 && part.chars().all(|c| c.is_ascii_digit());
                if !alpha2 && !numeric3 {
                    return Err(malformed("country must be 2 ASCII letters or 3 digits"));
                }
                Some(part.to_uppercase())
            }
        };

        let variant = match parts.next() {
            None => None,
            Some(part) => {
                if part.is_empty()
                    || part.len() > 8
                    || !part.chars().all(|c| c.is_ascii_alphanumeric())
                {
                    return Err(malformed("variant must be 1-8 ASCII letters or digits"));
                }
                Some(part.to_string())
            }
        };

        if parts.next().is_some() {
            return Err(malformed("too many subtags"));
        }

        Ok(Locale {
            language: language.to_lowercase(),
            country,
            variant,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Locale {
    type Error = ValueParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> String {
        locale.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "en".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), None);
        assert_eq!(locale.variant(), None);
    }

    #[test]
    fn test_parse_language_and_country() {
        let locale: Locale = "en_US".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), Some("US"));
    }

    #[test]
    fn test_parse_dash_separator_and_case_normalization() {
        let dashed: Locale = "PT-br".parse().unwrap();
        let underscored: Locale = "pt_BR".parse().unwrap();
        assert_eq!(dashed, underscored);
        assert_eq!(dashed.to_string(), "pt_BR");
    }

    #[test]
    fn test_parse_variant() {
        let locale: Locale = "de_DE_phonebook".parse().unwrap();
        assert_eq!(locale.variant(), Some("phonebook"));
        assert_eq!(locale.to_string(), "de_DE_phonebook");
    }

    #[test]
    fn test_parse_numeric_country() {
        let locale: Locale = "es_419".parse().unwrap();
        assert_eq!(locale.country(), Some("419"));
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["", "e", "engl", "en_U", "en_USAX", "en_US_x_y", "en US"] {
            let err = tag.parse::<Locale>().unwrap_err();
            assert!(
                matches!(err, ValueParseError::MalformedLocale { .. }),
                "tag '{}' should be rejected as malformed",
                tag
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for tag in ["en", "en_US", "de_DE_phonebook", "es_419"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(locale.to_string(), tag);
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    #[serial]
    fn test_platform_default_reads_lc_all() {
        let saved = std::env::var("LC_ALL").ok();
        std::env::set_var("LC_ALL", "fr_FR.UTF-8@euro");
        assert_eq!(
            Locale::platform_default(),
            "fr_FR".parse::<Locale>().unwrap()
        );
        match saved {
            Some(value) => std::env::set_var("LC_ALL", value),
            None => std::env::remove_var("LC_ALL"),
        }
    }

    #[test]
    #[serial]
    fn test_platform_default_skips_posix_pseudo_locale() {
        let saved: Vec<_> = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .map(|var| (*var, std::env::var(var).ok()))
            .collect();
        std::env::set_var("LC_ALL", "C");
        std::env::set_var("LC_MESSAGES", "POSIX");
        std::env::set_var("LANG", "ja_JP.UTF-8");
        assert_eq!(
            Locale::platform_default(),
            "ja_JP".parse::<Locale>().unwrap()
        );
        for (var, value) in saved {
            match value {
                Some(value) => std::env::set_var(var, value),
                None => std::env::remove_var(var),
            }
        }
    }

    #[test]
    #[serial]
    fn test_platform_default_falls_back_to_en_us() {
        let saved: Vec<_> = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .map(|var| (*var, std::env::var(var).ok()))
            .collect();
        for (var, _) in &saved {
            std::env::remove_var(var);
        }
        assert_eq!(
            Locale::platform_default(),
            "en_US".parse::<Locale>().unwrap()
        );
        for (var, value) in saved {
            match value {
                Some(value) => std::env::set_var(var, value),
                None => std::env::remove_var(var),
            }
        }
    }
}
