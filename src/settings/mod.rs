//! Engine configuration: the settings registry, its value domain, and the
//! error taxonomy.
//!
//! This module provides:
//!
//! - [`SettingsBuilder`]: the mutable registry settings accumulate in
//! - [`Settings`]: the immutable snapshot the builder produces
//! - [`ProcessingSettings`]: the inherited processing-layer slice
//! - [`keys`]: canonical setting names and introspection
//! - the typed values settings hold ([`Locale`], [`TimeZone`], [`Charset`],
//!   [`AutoEscapingPolicy`], [`NamingConvention`])
//! - [`SettingError`] / [`ValueParseError`]: what goes wrong and why

mod builder;
mod charset;
mod error;
pub mod keys;
mod locale;
mod policy;
mod timezone;

pub use builder::{
    ProcessingSettings, Settings, SettingsBuilder, DEFAULT_SENTINEL, DEFAULT_TAB_SIZE,
    MAX_TAB_SIZE, MIN_TAB_SIZE, NULL_SENTINEL, PLATFORM_DEFAULT_SENTINEL,
};
pub use charset::Charset;
pub use error::{SettingError, ValueParseError};
pub use locale::Locale;
pub use policy::{AutoEscapingPolicy, NamingConvention};
pub use timezone::TimeZone;
