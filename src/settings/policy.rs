//! Enumerated policy settings.
//!
//! Both enums accept their string values in either naming convention, the
//! same way setting names themselves do: `enableIfSupported` and
//! `enable_if_supported` select the same policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValueParseError;

/// When the engine turns auto-escaping on for a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoEscapingPolicy {
    /// Escape when the output format escapes by default.
    #[default]
    EnableIfDefault,
    /// Escape whenever the output format supports escaping at all.
    EnableIfSupported,
    /// Never auto-escape.
    Disable,
}

impl AutoEscapingPolicy {
    const ACCEPTED: &'static str =
        "enableIfDefault, enable_if_default, enableIfSupported, enable_if_supported, disable";
}

impl FromStr for AutoEscapingPolicy {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enableIfDefault" | "enable_if_default" => Ok(AutoEscapingPolicy::EnableIfDefault),
            "enableIfSupported" | "enable_if_supported" => {
                Ok(AutoEscapingPolicy::EnableIfSupported)
            }
            "disable" => Ok(AutoEscapingPolicy::Disable),
            _ => Err(ValueParseError::UnknownVariant {
                got: s.to_string(),
                expected: Self::ACCEPTED,
            }),
        }
    }
}

impl fmt::Display for AutoEscapingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AutoEscapingPolicy::EnableIfDefault => "enableIfDefault",
            AutoEscapingPolicy::EnableIfSupported => "enableIfSupported",
            AutoEscapingPolicy::Disable => "disable",
        })
    }
}

/// Which spelling of directive and built-in names the parser expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NamingConvention {
    /// Decide per template from the first name encountered.
    #[default]
    AutoDetect,
    /// The historical all-lower-case convention.
    Legacy,
    /// camelCase names only.
    CamelCase,
}

impl NamingConvention {
    const ACCEPTED: &'static str = "autoDetect, auto_detect, legacy, camelCase, camel_case";
}

impl FromStr for NamingConvention {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "autoDetect" | "auto_detect" => Ok(NamingConvention::AutoDetect),
            "legacy" => Ok(NamingConvention::Legacy),
            "camelCase" | "camel_case" => Ok(NamingConvention::CamelCase),
            _ => Err(ValueParseError::UnknownVariant {
                got: s.to_string(),
                expected: Self::ACCEPTED,
            }),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NamingConvention::AutoDetect => "autoDetect",
            NamingConvention::Legacy => "legacy",
            NamingConvention::CamelCase => "camelCase",
        })
    }
}
