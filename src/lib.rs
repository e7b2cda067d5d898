//! Typed, alias-aware configuration for template rendering.
//!
//! `veneer` is the settings layer of a template engine. A mutable
//! [`SettingsBuilder`] accumulates named settings — auto-escaping policy,
//! output format, tab size, naming convention, locale, time zone, source
//! encoding, lazy-import behavior — and produces an immutable [`Settings`]
//! snapshot for the parser and renderer to read.
//!
//! Each setting can be addressed three ways, all equivalent:
//!
//! - typed accessors: `builder.set_tab_size(4)` / `builder.tab_size()`
//! - the canonical snake_case name: `builder.set_setting("tab_size", "4")`
//! - the camelCase alias: `builder.set_setting("tabSize", "4")`
//!
//! Settings distinguish *explicit* from *defaulted*: an unset setting shows
//! its computed default (which for locale, time zone, and source encoding
//! comes from the ambient platform), and the string `"default"` reverts an
//! explicit setting. Invalid values fail synchronously with an error chain
//! that preserves the underlying conversion failure.
//!
//! # Example
//!
//! ```rust
//! use veneer::{OutputFormat, SettingsBuilder};
//!
//! let mut builder = SettingsBuilder::new();
//! builder.set_setting("outputFormat", "HTML")?;
//! builder.set_setting("tab_size", "4")?;
//!
//! let settings = builder.build();
//! assert_eq!(settings.output_format(), OutputFormat::Html);
//! assert_eq!(settings.tab_size(), 4);
//! assert!(settings.auto_escaping_enabled());
//! # Ok::<(), veneer::SettingError>(())
//! ```
//!
//! Template parsing and evaluation live elsewhere; this crate only decides
//! *which* locale, format, and policies the engine should use.

pub mod output;
pub mod settings;
pub mod util;

pub use output::OutputFormat;
pub use settings::{
    AutoEscapingPolicy, Charset, Locale, NamingConvention, ProcessingSettings, SettingError,
    Settings, SettingsBuilder, TimeZone, ValueParseError,
};
