//! The mutable settings registry and its immutable snapshot.
//!
//! [`SettingsBuilder`] is the registry: it accumulates explicit values,
//! shows computed defaults for everything else, and validates on
//! assignment. [`Settings`] is the snapshot [`SettingsBuilder::build`]
//! produces, with every default resolved; it is plain owned data and safe
//! to share across threads read-only.
//!
//! The inherited processing-layer settings (locale, time zone, lazy
//! imports, custom settings) live in [`ProcessingSettings`]; the builder
//! embeds one and adds the parsing-layer settings on top. Setting names
//! enumerate in that layer order, inherited names first.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value as CustomValue;
use tracing::{debug, trace};

use crate::output::OutputFormat;

use super::charset::Charset;
use super::error::{SettingError, ValueParseError};
use super::keys::{self, SettingKey};
use super::locale::Locale;
use super::policy::{AutoEscapingPolicy, NamingConvention};
use super::timezone::TimeZone;

/// Smallest accepted `tab_size`.
pub const MIN_TAB_SIZE: u32 = 1;
/// Largest accepted `tab_size`.
pub const MAX_TAB_SIZE: u32 = 256;
/// `tab_size` shown while unset.
pub const DEFAULT_TAB_SIZE: u32 = 8;

/// Sentinel accepted by every setting to revert to the computed default.
pub const DEFAULT_SENTINEL: &str = "default";
/// Sentinel accepted by nullable settings to explicitly select null.
pub const NULL_SENTINEL: &str = "null";
/// Sentinel accepted by ambient-backed settings (locale, time zone, source
/// encoding) to explicitly select the platform default.
pub const PLATFORM_DEFAULT_SENTINEL: &str = "platform default";

fn parse_bool(s: &str) -> Result<bool, ValueParseError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValueParseError::UnknownVariant {
            got: s.to_string(),
            expected: "true, false",
        }),
    }
}

/// The inherited (processing-time) slice of the registry.
///
/// These are the settings a rendering environment consults while a
/// template runs, as opposed to the parsing-layer settings that only
/// matter while reading template source. [`SettingsBuilder`] embeds one
/// and re-exposes its accessors, so most callers never touch this type
/// directly.
#[derive(Debug, Clone, Default)]
pub struct ProcessingSettings {
    locale: Option<Locale>,
    time_zone: Option<TimeZone>,
    lazy_imports: Option<bool>,
    lazy_auto_imports: Option<Option<bool>>,
    custom: BTreeMap<String, CustomValue>,
}

impl ProcessingSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the inherited layer, sorted, in the requested convention.
    pub fn setting_names(camel_case: bool) -> impl Iterator<Item = &'static str> {
        keys::inherited_setting_names(camel_case)
    }

    /// Current locale, or the platform default while unset.
    pub fn locale(&self) -> Locale {
        self.locale.clone().unwrap_or_else(Locale::platform_default)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }

    pub fn unset_locale(&mut self) {
        self.locale = None;
    }

    pub fn is_locale_set(&self) -> bool {
        self.locale.is_some()
    }

    /// Current time zone, or the platform default while unset.
    pub fn time_zone(&self) -> TimeZone {
        self.time_zone
            .clone()
            .unwrap_or_else(TimeZone::platform_default)
    }

    pub fn set_time_zone(&mut self, time_zone: TimeZone) {
        self.time_zone = Some(time_zone);
    }

    pub fn unset_time_zone(&mut self) {
        self.time_zone = None;
    }

    pub fn is_time_zone_set(&self) -> bool {
        self.time_zone.is_some()
    }

    /// Whether `<#import>` directives run lazily. Defaults to `false`.
    pub fn lazy_imports(&self) -> bool {
        self.lazy_imports.unwrap_or(false)
    }

    pub fn set_lazy_imports(&mut self, lazy: bool) {
        self.lazy_imports = Some(lazy);
    }

    pub fn unset_lazy_imports(&mut self) {
        self.lazy_imports = None;
    }

    pub fn is_lazy_imports_set(&self) -> bool {
        self.lazy_imports.is_some()
    }

    /// Tri-state override of [`lazy_imports`](Self::lazy_imports) for
    /// auto-imports. `None` means "fall back to `lazy_imports`", and can
    /// itself be either the unset default or an explicit assignment — see
    /// [`is_lazy_auto_imports_set`](Self::is_lazy_auto_imports_set).
    pub fn lazy_auto_imports(&self) -> Option<bool> {
        self.lazy_auto_imports.flatten()
    }

    pub fn set_lazy_auto_imports(&mut self, lazy: Option<bool>) {
        self.lazy_auto_imports = Some(lazy);
    }

    pub fn unset_lazy_auto_imports(&mut self) {
        self.lazy_auto_imports = None;
    }

    pub fn is_lazy_auto_imports_set(&self) -> bool {
        self.lazy_auto_imports.is_some()
    }

    /// Stores an application-defined setting under `key`.
    pub fn set_custom_setting(&mut self, key: impl Into<String>, value: CustomValue) {
        let key = key.into();
        trace!(key = key.as_str(), "custom setting assigned");
        self.custom.insert(key, value);
    }

    /// Looks up an application-defined setting.
    ///
    /// Custom settings have no computed default, so this is the one getter
    /// that can fail: reading an unset key raises
    /// [`SettingError::CustomSettingNotSet`].
    pub fn custom_setting(&self, key: &str) -> Result<&CustomValue, SettingError> {
        self.custom
            .get(key)
            .ok_or_else(|| SettingError::CustomSettingNotSet {
                key: key.to_string(),
            })
    }

    pub fn unset_custom_setting(&mut self, key: &str) {
        self.custom.remove(key);
    }

    pub fn is_custom_setting_set(&self, key: &str) -> bool {
        self.custom.contains_key(key)
    }

    /// Keys of all explicitly set custom settings, sorted.
    pub fn custom_setting_names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(String::as_str)
    }
}

/// Mutable registry for every engine setting.
///
/// Each setting can be addressed through typed accessors or through
/// [`set_setting`](Self::set_setting) with either its canonical snake_case
/// name or its camelCase alias; both spellings are equivalent. A setting
/// starts unset, showing its computed default; assigning marks it
/// explicit; `unset_*` (or the string `"default"`) reverts it.
///
/// # Example
///
/// ```rust
/// use veneer::{AutoEscapingPolicy, SettingsBuilder};
///
/// let mut builder = SettingsBuilder::new();
/// assert!(!builder.is_auto_escaping_policy_set());
///
/// builder.set_setting("autoEscapingPolicy", "disable")?;
/// assert_eq!(builder.auto_escaping_policy(), AutoEscapingPolicy::Disable);
///
/// builder.set_setting("auto_escaping_policy", "default")?;
/// assert!(!builder.is_auto_escaping_policy_set());
/// # Ok::<(), veneer::SettingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    processing: ProcessingSettings,
    auto_escaping_policy: Option<AutoEscapingPolicy>,
    naming_convention: Option<NamingConvention>,
    output_format: Option<OutputFormat>,
    recognize_standard_file_extensions: Option<bool>,
    source_encoding: Option<Charset>,
    tab_size: Option<u32>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every setting name: the inherited processing-layer prefix first,
    /// then the parsing layer, each segment sorted.
    pub fn setting_names(camel_case: bool) -> impl Iterator<Item = &'static str> {
        keys::setting_names(camel_case)
    }

    // ---- parsing-layer settings ----

    /// Current policy, or `EnableIfDefault` while unset.
    pub fn auto_escaping_policy(&self) -> AutoEscapingPolicy {
        self.auto_escaping_policy.unwrap_or_default()
    }

    pub fn set_auto_escaping_policy(&mut self, policy: AutoEscapingPolicy) {
        self.auto_escaping_policy = Some(policy);
    }

    pub fn unset_auto_escaping_policy(&mut self) {
        self.auto_escaping_policy = None;
    }

    pub fn is_auto_escaping_policy_set(&self) -> bool {
        self.auto_escaping_policy.is_some()
    }

    /// Current convention, or `AutoDetect` while unset.
    pub fn naming_convention(&self) -> NamingConvention {
        self.naming_convention.unwrap_or_default()
    }

    pub fn set_naming_convention(&mut self, convention: NamingConvention) {
        self.naming_convention = Some(convention);
    }

    pub fn unset_naming_convention(&mut self) {
        self.naming_convention = None;
    }

    pub fn is_naming_convention_set(&self) -> bool {
        self.naming_convention.is_some()
    }

    /// Current format, or `Undefined` while unset.
    ///
    /// Note that `Undefined` can also be assigned explicitly; the two
    /// states differ only in [`is_output_format_set`](Self::is_output_format_set).
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = Some(format);
    }

    pub fn unset_output_format(&mut self) {
        self.output_format = None;
    }

    pub fn is_output_format_set(&self) -> bool {
        self.output_format.is_some()
    }

    /// Whether `*.html.tmpl`-style extensions imply an output format.
    /// Defaults to `true`.
    pub fn recognize_standard_file_extensions(&self) -> bool {
        self.recognize_standard_file_extensions.unwrap_or(true)
    }

    pub fn set_recognize_standard_file_extensions(&mut self, recognize: bool) {
        self.recognize_standard_file_extensions = Some(recognize);
    }

    pub fn unset_recognize_standard_file_extensions(&mut self) {
        self.recognize_standard_file_extensions = None;
    }

    pub fn is_recognize_standard_file_extensions_set(&self) -> bool {
        self.recognize_standard_file_extensions.is_some()
    }

    /// Current source encoding, or the platform default while unset.
    pub fn source_encoding(&self) -> Charset {
        self.source_encoding.unwrap_or_else(Charset::platform_default)
    }

    pub fn set_source_encoding(&mut self, charset: Charset) {
        self.source_encoding = Some(charset);
    }

    pub fn unset_source_encoding(&mut self) {
        self.source_encoding = None;
    }

    pub fn is_source_encoding_set(&self) -> bool {
        self.source_encoding.is_some()
    }

    /// Current tab size in columns, or 8 while unset.
    pub fn tab_size(&self) -> u32 {
        self.tab_size.unwrap_or(DEFAULT_TAB_SIZE)
    }

    /// Sets the tab size. Only values in
    /// [`MIN_TAB_SIZE`]`..=`[`MAX_TAB_SIZE`] are legal.
    pub fn set_tab_size(&mut self, size: u32) -> Result<(), SettingError> {
        if !(MIN_TAB_SIZE..=MAX_TAB_SIZE).contains(&size) {
            return Err(SettingError::OutOfRange {
                name: keys::TAB_SIZE_KEY,
                value: i64::from(size),
                min: i64::from(MIN_TAB_SIZE),
                max: i64::from(MAX_TAB_SIZE),
            });
        }
        self.tab_size = Some(size);
        Ok(())
    }

    pub fn unset_tab_size(&mut self) {
        self.tab_size = None;
    }

    pub fn is_tab_size_set(&self) -> bool {
        self.tab_size.is_some()
    }

    // ---- inherited processing-layer settings ----

    /// The embedded processing layer.
    pub fn processing(&self) -> &ProcessingSettings {
        &self.processing
    }

    pub fn locale(&self) -> Locale {
        self.processing.locale()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.processing.set_locale(locale);
    }

    pub fn unset_locale(&mut self) {
        self.processing.unset_locale();
    }

    pub fn is_locale_set(&self) -> bool {
        self.processing.is_locale_set()
    }

    pub fn time_zone(&self) -> TimeZone {
        self.processing.time_zone()
    }

    pub fn set_time_zone(&mut self, time_zone: TimeZone) {
        self.processing.set_time_zone(time_zone);
    }

    pub fn unset_time_zone(&mut self) {
        self.processing.unset_time_zone();
    }

    pub fn is_time_zone_set(&self) -> bool {
        self.processing.is_time_zone_set()
    }

    pub fn lazy_imports(&self) -> bool {
        self.processing.lazy_imports()
    }

    pub fn set_lazy_imports(&mut self, lazy: bool) {
        self.processing.set_lazy_imports(lazy);
    }

    pub fn unset_lazy_imports(&mut self) {
        self.processing.unset_lazy_imports();
    }

    pub fn is_lazy_imports_set(&self) -> bool {
        self.processing.is_lazy_imports_set()
    }

    pub fn lazy_auto_imports(&self) -> Option<bool> {
        self.processing.lazy_auto_imports()
    }

    pub fn set_lazy_auto_imports(&mut self, lazy: Option<bool>) {
        self.processing.set_lazy_auto_imports(lazy);
    }

    pub fn unset_lazy_auto_imports(&mut self) {
        self.processing.unset_lazy_auto_imports();
    }

    pub fn is_lazy_auto_imports_set(&self) -> bool {
        self.processing.is_lazy_auto_imports_set()
    }

    pub fn set_custom_setting(&mut self, key: impl Into<String>, value: CustomValue) {
        self.processing.set_custom_setting(key, value);
    }

    pub fn custom_setting(&self, key: &str) -> Result<&CustomValue, SettingError> {
        self.processing.custom_setting(key)
    }

    pub fn unset_custom_setting(&mut self, key: &str) {
        self.processing.unset_custom_setting(key);
    }

    pub fn is_custom_setting_set(&self, key: &str) -> bool {
        self.processing.is_custom_setting_set(key)
    }

    // ---- string-keyed access ----

    /// Assigns a setting from its textual form.
    ///
    /// `name` may be either spelling. The string `"default"` reverts the
    /// setting instead of assigning; `"null"` explicitly assigns null to
    /// `lazy_auto_imports` (the one nullable setting); locale, time zone,
    /// and source encoding additionally accept `"platform default"` as an
    /// explicit assignment of the ambient default.
    ///
    /// # Errors
    ///
    /// [`SettingError::UnknownSetting`] when `name` matches nothing,
    /// [`SettingError::InvalidValue`] (cause chain attached) when the
    /// string cannot be converted, and [`SettingError::OutOfRange`] when
    /// the converted value is illegal.
    pub fn set_setting(&mut self, name: &str, value: &str) -> Result<(), SettingError> {
        let key = keys::resolve(name).ok_or_else(|| SettingError::UnknownSetting {
            name: name.to_string(),
            available: keys::setting_names(false).map(str::to_string).collect(),
        })?;

        if value == DEFAULT_SENTINEL {
            self.unset(key);
            return Ok(());
        }

        let invalid = |cause: ValueParseError| SettingError::InvalidValue {
            name: key.name(),
            value: value.to_string(),
            cause,
        };

        match key {
            SettingKey::AutoEscapingPolicy => {
                self.set_auto_escaping_policy(value.parse().map_err(invalid)?);
            }
            SettingKey::NamingConvention => {
                self.set_naming_convention(value.parse().map_err(invalid)?);
            }
            SettingKey::OutputFormat => {
                let format = OutputFormat::by_name(value).ok_or_else(|| {
                    invalid(ValueParseError::UnregisteredOutputFormat {
                        name: value.to_string(),
                    })
                })?;
                self.set_output_format(format);
            }
            SettingKey::RecognizeStandardFileExtensions => {
                self.set_recognize_standard_file_extensions(parse_bool(value).map_err(invalid)?);
            }
            SettingKey::SourceEncoding => {
                if value == PLATFORM_DEFAULT_SENTINEL {
                    self.set_source_encoding(Charset::platform_default());
                } else {
                    self.set_source_encoding(value.parse().map_err(invalid)?);
                }
            }
            SettingKey::TabSize => {
                let size: u32 = value
                    .parse()
                    .map_err(|e: std::num::ParseIntError| invalid(e.into()))?;
                self.set_tab_size(size)?;
            }
            SettingKey::Locale => {
                if value == PLATFORM_DEFAULT_SENTINEL {
                    self.set_locale(Locale::platform_default());
                } else {
                    self.set_locale(value.parse().map_err(invalid)?);
                }
            }
            SettingKey::TimeZone => {
                if value == PLATFORM_DEFAULT_SENTINEL {
                    self.set_time_zone(TimeZone::platform_default());
                } else {
                    self.set_time_zone(value.parse().map_err(invalid)?);
                }
            }
            SettingKey::LazyImports => {
                self.set_lazy_imports(parse_bool(value).map_err(invalid)?);
            }
            SettingKey::LazyAutoImports => {
                if value == NULL_SENTINEL {
                    self.set_lazy_auto_imports(None);
                } else {
                    self.set_lazy_auto_imports(Some(parse_bool(value).map_err(invalid)?));
                }
            }
        }

        debug!(setting = key.name(), value, "setting assigned");
        Ok(())
    }

    /// Applies `(name, value)` string pairs in order through
    /// [`set_setting`](Self::set_setting), stopping at the first failure.
    pub fn set_settings<K, V, I>(&mut self, pairs: I) -> Result<(), SettingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            self.set_setting(name.as_ref(), value.as_ref())?;
        }
        Ok(())
    }

    fn unset(&mut self, key: SettingKey) {
        trace!(setting = key.name(), "setting reverted to default");
        match key {
            SettingKey::AutoEscapingPolicy => self.unset_auto_escaping_policy(),
            SettingKey::NamingConvention => self.unset_naming_convention(),
            SettingKey::OutputFormat => self.unset_output_format(),
            SettingKey::RecognizeStandardFileExtensions => {
                self.unset_recognize_standard_file_extensions()
            }
            SettingKey::SourceEncoding => self.unset_source_encoding(),
            SettingKey::TabSize => self.unset_tab_size(),
            SettingKey::Locale => self.unset_locale(),
            SettingKey::TimeZone => self.unset_time_zone(),
            SettingKey::LazyImports => self.unset_lazy_imports(),
            SettingKey::LazyAutoImports => self.unset_lazy_auto_imports(),
        }
    }

    /// Produces the immutable snapshot, resolving every default now.
    ///
    /// Ambient defaults (platform locale, time zone) are captured at this
    /// point; later environment changes do not affect the snapshot.
    pub fn build(&self) -> Settings {
        debug!("building settings snapshot");
        Settings {
            auto_escaping_policy: self.auto_escaping_policy(),
            naming_convention: self.naming_convention(),
            output_format: self.output_format(),
            recognize_standard_file_extensions: self.recognize_standard_file_extensions(),
            source_encoding: self.source_encoding(),
            tab_size: self.tab_size(),
            locale: self.locale(),
            time_zone: self.time_zone(),
            lazy_imports: self.lazy_imports(),
            lazy_auto_imports: self.lazy_auto_imports(),
            custom: self.processing.custom.clone(),
        }
    }
}

/// Immutable configuration snapshot with every default resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    auto_escaping_policy: AutoEscapingPolicy,
    naming_convention: NamingConvention,
    output_format: OutputFormat,
    recognize_standard_file_extensions: bool,
    source_encoding: Charset,
    tab_size: u32,
    locale: Locale,
    time_zone: TimeZone,
    lazy_imports: bool,
    lazy_auto_imports: Option<bool>,
    custom: BTreeMap<String, CustomValue>,
}

impl Settings {
    /// A fresh registry to accumulate settings in.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    pub fn auto_escaping_policy(&self) -> AutoEscapingPolicy {
        self.auto_escaping_policy
    }

    pub fn naming_convention(&self) -> NamingConvention {
        self.naming_convention
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn recognize_standard_file_extensions(&self) -> bool {
        self.recognize_standard_file_extensions
    }

    pub fn source_encoding(&self) -> Charset {
        self.source_encoding
    }

    pub fn tab_size(&self) -> u32 {
        self.tab_size
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn lazy_imports(&self) -> bool {
        self.lazy_imports
    }

    pub fn lazy_auto_imports(&self) -> Option<bool> {
        self.lazy_auto_imports
    }

    /// Whether auto-imports run lazily: the tri-state override if present,
    /// otherwise `lazy_imports`.
    pub fn effective_lazy_auto_imports(&self) -> bool {
        self.lazy_auto_imports.unwrap_or(self.lazy_imports)
    }

    /// See [`ProcessingSettings::custom_setting`].
    pub fn custom_setting(&self, key: &str) -> Result<&CustomValue, SettingError> {
        self.custom
            .get(key)
            .ok_or_else(|| SettingError::CustomSettingNotSet {
                key: key.to_string(),
            })
    }

    pub fn is_custom_setting_set(&self, key: &str) -> bool {
        self.custom.contains_key(key)
    }

    /// Whether auto-escaping is on for the configured output format under
    /// the configured policy.
    pub fn auto_escaping_enabled(&self) -> bool {
        match self.auto_escaping_policy {
            AutoEscapingPolicy::Disable => false,
            AutoEscapingPolicy::EnableIfSupported => self.output_format.supports_escaping(),
            AutoEscapingPolicy::EnableIfDefault => self.output_format.escapes_by_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_custom_setting_lifecycle() {
        let mut builder = SettingsBuilder::new();

        assert!(!builder.is_custom_setting_set("report_title"));
        assert!(matches!(
            builder.custom_setting("report_title"),
            Err(SettingError::CustomSettingNotSet { key }) if key == "report_title"
        ));

        builder.set_custom_setting("report_title", json!("Quarterly"));
        assert!(builder.is_custom_setting_set("report_title"));
        assert_eq!(
            builder.custom_setting("report_title").unwrap(),
            &json!("Quarterly")
        );

        builder.unset_custom_setting("report_title");
        assert!(matches!(
            builder.custom_setting("report_title"),
            Err(SettingError::CustomSettingNotSet { .. })
        ));
    }

    #[test]
    fn test_custom_setting_names_sorted() {
        let mut processing = ProcessingSettings::new();
        processing.set_custom_setting("zeta", json!(1));
        processing.set_custom_setting("alpha", json!(2));
        let names: Vec<_> = processing.custom_setting_names().collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn test_set_settings_applies_in_order() {
        let mut builder = SettingsBuilder::new();
        builder
            .set_settings([("tab_size", "4"), ("tabSize", "2"), ("lazyImports", "true")])
            .unwrap();
        assert_eq!(builder.tab_size(), 2);
        assert!(builder.lazy_imports());
    }

    #[test]
    fn test_set_settings_stops_at_first_failure() {
        let mut builder = SettingsBuilder::new();
        let result = builder.set_settings([
            ("tab_size", "4"),
            ("no_such_setting", "1"),
            ("lazy_imports", "true"),
        ]);
        assert!(matches!(result, Err(SettingError::UnknownSetting { .. })));
        assert_eq!(builder.tab_size(), 4);
        assert!(!builder.is_lazy_imports_set());
    }

    #[test]
    fn test_unknown_setting_lists_canonical_names() {
        let mut builder = SettingsBuilder::new();
        let err = builder.set_setting("tabsize", "4").unwrap_err();
        match err {
            SettingError::UnknownSetting { name, available } => {
                assert_eq!(name, "tabsize");
                assert_eq!(
                    available,
                    SettingsBuilder::setting_names(false)
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                );
            }
            other => panic!("expected UnknownSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_build_resolves_defaults() {
        let settings = SettingsBuilder::new().build();
        assert_eq!(settings.tab_size(), DEFAULT_TAB_SIZE);
        assert_eq!(settings.output_format(), OutputFormat::Undefined);
        assert_eq!(
            settings.auto_escaping_policy(),
            AutoEscapingPolicy::EnableIfDefault
        );
        assert_eq!(settings.naming_convention(), NamingConvention::AutoDetect);
        assert!(settings.recognize_standard_file_extensions());
        assert!(!settings.lazy_imports());
        assert_eq!(settings.lazy_auto_imports(), None);
        assert_eq!(settings.source_encoding(), Charset::platform_default());
    }

    #[test]
    fn test_build_carries_explicit_values_and_custom_settings() {
        let mut builder = Settings::builder();
        builder.set_setting("outputFormat", "XML").unwrap();
        builder.set_lazy_auto_imports(Some(true));
        builder.set_custom_setting("theme", json!({"dark": true}));

        let settings = builder.build();
        assert_eq!(settings.output_format(), OutputFormat::Xml);
        assert_eq!(settings.lazy_auto_imports(), Some(true));
        assert!(settings.effective_lazy_auto_imports());
        assert_eq!(
            settings.custom_setting("theme").unwrap(),
            &json!({"dark": true})
        );
        assert!(matches!(
            settings.custom_setting("missing"),
            Err(SettingError::CustomSettingNotSet { .. })
        ));
    }

    #[test]
    fn test_effective_lazy_auto_imports_falls_back_to_lazy_imports() {
        let mut builder = SettingsBuilder::new();
        builder.set_lazy_imports(true);
        assert!(builder.build().effective_lazy_auto_imports());

        builder.set_lazy_auto_imports(Some(false));
        assert!(!builder.build().effective_lazy_auto_imports());
    }

    #[test]
    fn test_auto_escaping_enabled_combines_policy_and_format() {
        let mut builder = SettingsBuilder::new();

        // Undefined format never escapes by default.
        assert!(!builder.build().auto_escaping_enabled());

        builder.set_output_format(OutputFormat::Html);
        assert!(builder.build().auto_escaping_enabled());

        builder.set_auto_escaping_policy(AutoEscapingPolicy::Disable);
        assert!(!builder.build().auto_escaping_enabled());

        builder.set_auto_escaping_policy(AutoEscapingPolicy::EnableIfSupported);
        builder.set_output_format(OutputFormat::PlainText);
        assert!(!builder.build().auto_escaping_enabled());
        builder.set_output_format(OutputFormat::Rtf);
        assert!(builder.build().auto_escaping_enabled());
    }

    #[test]
    fn test_snapshot_is_detached_from_builder() {
        let mut builder = SettingsBuilder::new();
        builder.set_tab_size(4).unwrap();
        let settings = builder.build();
        builder.set_tab_size(2).unwrap();
        assert_eq!(settings.tab_size(), 4);
    }

    proptest! {
        #[test]
        fn prop_tab_size_accepts_exactly_the_legal_range(size in 0u32..=512) {
            let mut builder = SettingsBuilder::new();
            let result = builder.set_tab_size(size);
            if (MIN_TAB_SIZE..=MAX_TAB_SIZE).contains(&size) {
                prop_assert!(result.is_ok());
                prop_assert_eq!(builder.tab_size(), size);
            } else {
                let is_out_of_range = matches!(result, Err(SettingError::OutOfRange { .. }));
                prop_assert!(is_out_of_range);
                prop_assert!(!builder.is_tab_size_set());
            }
        }

        #[test]
        fn prop_string_and_typed_tab_size_agree(size in 1u32..=256) {
            let mut via_string = SettingsBuilder::new();
            via_string.set_setting("tab_size", &size.to_string()).unwrap();
            let mut via_typed = SettingsBuilder::new();
            via_typed.set_tab_size(size).unwrap();
            prop_assert_eq!(via_string.tab_size(), via_typed.tab_size());
        }
    }
}
