//! Canonical setting names and the static descriptor table.
//!
//! Every setting has exactly two textual spellings: the canonical
//! snake_case name (the `*_KEY` constants) and a camelCase alias (the
//! `*_KEY_CAMEL_CASE` constants). Both resolve to the same [`SettingKey`].
//!
//! The descriptor table is the single source of truth for introspection.
//! Inherited (processing-layer) settings come first, and each segment is
//! sorted by its snake_case spelling; [`setting_names`] exposes that order
//! directly. Tests on this module enforce the bidirectional completeness
//! invariant: every enumerated name has a key constant, every key constant
//! is enumerated, and each camelCase alias is the mechanical conversion of
//! its snake_case name.

use std::fmt;

pub const LAZY_AUTO_IMPORTS_KEY: &str = "lazy_auto_imports";
pub const LAZY_AUTO_IMPORTS_KEY_CAMEL_CASE: &str = "lazyAutoImports";

pub const LAZY_IMPORTS_KEY: &str = "lazy_imports";
pub const LAZY_IMPORTS_KEY_CAMEL_CASE: &str = "lazyImports";

pub const LOCALE_KEY: &str = "locale";
pub const LOCALE_KEY_CAMEL_CASE: &str = "locale";

pub const TIME_ZONE_KEY: &str = "time_zone";
pub const TIME_ZONE_KEY_CAMEL_CASE: &str = "timeZone";

pub const AUTO_ESCAPING_POLICY_KEY: &str = "auto_escaping_policy";
pub const AUTO_ESCAPING_POLICY_KEY_CAMEL_CASE: &str = "autoEscapingPolicy";

pub const NAMING_CONVENTION_KEY: &str = "naming_convention";
pub const NAMING_CONVENTION_KEY_CAMEL_CASE: &str = "namingConvention";

pub const OUTPUT_FORMAT_KEY: &str = "output_format";
pub const OUTPUT_FORMAT_KEY_CAMEL_CASE: &str = "outputFormat";

pub const RECOGNIZE_STANDARD_FILE_EXTENSIONS_KEY: &str = "recognize_standard_file_extensions";
pub const RECOGNIZE_STANDARD_FILE_EXTENSIONS_KEY_CAMEL_CASE: &str =
    "recognizeStandardFileExtensions";

pub const SOURCE_ENCODING_KEY: &str = "source_encoding";
pub const SOURCE_ENCODING_KEY_CAMEL_CASE: &str = "sourceEncoding";

pub const TAB_SIZE_KEY: &str = "tab_size";
pub const TAB_SIZE_KEY_CAMEL_CASE: &str = "tabSize";

/// Identity of one registry setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    LazyAutoImports,
    LazyImports,
    Locale,
    TimeZone,
    AutoEscapingPolicy,
    NamingConvention,
    OutputFormat,
    RecognizeStandardFileExtensions,
    SourceEncoding,
    TabSize,
}

impl SettingKey {
    /// Canonical (snake_case) spelling.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::LazyAutoImports => LAZY_AUTO_IMPORTS_KEY,
            SettingKey::LazyImports => LAZY_IMPORTS_KEY,
            SettingKey::Locale => LOCALE_KEY,
            SettingKey::TimeZone => TIME_ZONE_KEY,
            SettingKey::AutoEscapingPolicy => AUTO_ESCAPING_POLICY_KEY,
            SettingKey::NamingConvention => NAMING_CONVENTION_KEY,
            SettingKey::OutputFormat => OUTPUT_FORMAT_KEY,
            SettingKey::RecognizeStandardFileExtensions => RECOGNIZE_STANDARD_FILE_EXTENSIONS_KEY,
            SettingKey::SourceEncoding => SOURCE_ENCODING_KEY,
            SettingKey::TabSize => TAB_SIZE_KEY,
        }
    }

    /// camelCase spelling.
    pub fn camel_case_name(self) -> &'static str {
        match self {
            SettingKey::LazyAutoImports => LAZY_AUTO_IMPORTS_KEY_CAMEL_CASE,
            SettingKey::LazyImports => LAZY_IMPORTS_KEY_CAMEL_CASE,
            SettingKey::Locale => LOCALE_KEY_CAMEL_CASE,
            SettingKey::TimeZone => TIME_ZONE_KEY_CAMEL_CASE,
            SettingKey::AutoEscapingPolicy => AUTO_ESCAPING_POLICY_KEY_CAMEL_CASE,
            SettingKey::NamingConvention => NAMING_CONVENTION_KEY_CAMEL_CASE,
            SettingKey::OutputFormat => OUTPUT_FORMAT_KEY_CAMEL_CASE,
            SettingKey::RecognizeStandardFileExtensions => {
                RECOGNIZE_STANDARD_FILE_EXTENSIONS_KEY_CAMEL_CASE
            }
            SettingKey::SourceEncoding => SOURCE_ENCODING_KEY_CAMEL_CASE,
            SettingKey::TabSize => TAB_SIZE_KEY_CAMEL_CASE,
        }
    }

    /// Whether the setting belongs to the inherited processing layer.
    pub fn is_inherited(self) -> bool {
        matches!(
            self,
            SettingKey::LazyAutoImports
                | SettingKey::LazyImports
                | SettingKey::Locale
                | SettingKey::TimeZone
        )
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All settings, inherited layer first, each segment sorted by snake_case
/// name.
pub(crate) static SETTING_KEYS: &[SettingKey] = &[
    // Inherited (processing) layer.
    SettingKey::LazyAutoImports,
    SettingKey::LazyImports,
    SettingKey::Locale,
    SettingKey::TimeZone,
    // Own (parsing) layer.
    SettingKey::AutoEscapingPolicy,
    SettingKey::NamingConvention,
    SettingKey::OutputFormat,
    SettingKey::RecognizeStandardFileExtensions,
    SettingKey::SourceEncoding,
    SettingKey::TabSize,
];

/// Resolves either spelling of a setting name to its key.
pub(crate) fn resolve(name: &str) -> Option<SettingKey> {
    SETTING_KEYS
        .iter()
        .copied()
        .find(|key| key.name() == name || key.camel_case_name() == name)
}

/// Every setting name, inherited prefix first, each segment sorted.
///
/// The sequence is lazy and deterministic; pass `camel_case` to choose the
/// spelling.
pub fn setting_names(camel_case: bool) -> impl Iterator<Item = &'static str> {
    SETTING_KEYS.iter().map(move |key| {
        if camel_case {
            key.camel_case_name()
        } else {
            key.name()
        }
    })
}

/// Names of the inherited processing layer only, sorted.
pub fn inherited_setting_names(camel_case: bool) -> impl Iterator<Item = &'static str> {
    SETTING_KEYS
        .iter()
        .filter(|key| key.is_inherited())
        .map(move |key| {
            if camel_case {
                key.camel_case_name()
            } else {
                key.name()
            }
        })
}
