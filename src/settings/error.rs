//! Errors raised by the settings registry.
//!
//! Two layers make up the taxonomy:
//!
//! - [`SettingError`] is what registry operations return. It identifies the
//!   setting involved and, for conversion failures, carries the cause.
//! - [`ValueParseError`] is the conversion-failure domain: why a raw string
//!   could not become the setting's typed value. It bottoms out at the
//!   underlying parse error (e.g. [`std::num::ParseIntError`] for a
//!   malformed numeric literal), so callers can walk the full cause chain
//!   via [`std::error::Error::source`].
//!
//! All failures are synchronous; none are retried internally. The caller
//! decides whether to try again with a corrected value.

use thiserror::Error;

/// Failure converting a raw string into a setting's typed value.
#[derive(Debug, Error)]
pub enum ValueParseError {
    /// Malformed numeric literal.
    #[error("malformed number")]
    Number(#[from] std::num::ParseIntError),

    /// The value is not one of the accepted spellings.
    #[error("expected one of [{expected}], got '{got}'")]
    UnknownVariant {
        got: String,
        expected: &'static str,
    },

    /// No output format is registered under the given short name.
    ///
    /// The message names the "undefined" fallback format explicitly, since
    /// the usual mistake is passing `null` instead of a format name.
    #[error(
        "no output format registered under '{name}' \
         (templates without a format use the \"undefined\" output format)"
    )]
    UnregisteredOutputFormat { name: String },

    /// The locale tag does not follow `language[_COUNTRY[_VARIANT]]`.
    #[error("malformed locale tag '{tag}': {reason}")]
    MalformedLocale {
        tag: String,
        reason: &'static str,
    },

    /// The time zone is neither UTC, a `GMT±HH:MM` offset, nor a
    /// recognizable zone identifier.
    #[error("unrecognized time zone '{id}'")]
    UnknownTimeZone { id: String },

    /// The charset name matches no supported encoding.
    #[error("unrecognized charset '{name}'")]
    UnknownCharset { name: String },
}

/// Error raised by the settings registry.
#[derive(Debug, Error)]
pub enum SettingError {
    /// A setting with no computed default was read before being set.
    ///
    /// Every core setting has a default, so this fires for custom settings
    /// only; the key is the one passed to
    /// [`custom_setting`](crate::SettingsBuilder::custom_setting).
    #[error("custom setting \"{key}\" is not set")]
    CustomSettingNotSet { key: String },

    /// A raw string could not be converted into the setting's typed value.
    #[error("invalid value '{value}' for setting '{name}'")]
    InvalidValue {
        /// Canonical (snake_case) setting name.
        name: &'static str,
        /// The rejected raw string.
        value: String,
        #[source]
        cause: ValueParseError,
    },

    /// The name matches no setting in either spelling.
    #[error("unknown setting '{name}'. Available: {}", available.join(", "))]
    UnknownSetting {
        name: String,
        /// Canonical names of every registered setting.
        available: Vec<String>,
    },

    /// A typed setter was given a value outside the setting's legal range.
    #[error("value {value} for setting '{name}' is out of range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}
