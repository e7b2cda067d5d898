//! Output formats selectable through the `output_format` setting.
//!
//! Only format *selection* lives here. The escaping pipeline that acts on
//! the selected format belongs to the renderer and is out of scope for the
//! configuration layer.
//!
//! Formats are looked up by their registered short name (`HTML`, `XML`,
//! `plainText`, ...). The [`Undefined`](OutputFormat::Undefined) format is
//! what an unconfigured engine uses; assigning it by name and leaving the
//! setting unset differ only in the explicit-assignment flag.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::settings::ValueParseError;

/// A markup dialect the engine can escape output for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// No known markup; auto-escaping is unavailable.
    #[default]
    Undefined,
    Html,
    Xhtml,
    Xml,
    Rtf,
    /// Plain text: a known format, but one with nothing to escape.
    PlainText,
}

/// Registered formats, keyed by short name.
static REGISTRY: Lazy<HashMap<&'static str, OutputFormat>> = Lazy::new(|| {
    OutputFormat::ALL
        .iter()
        .map(|format| (format.name(), *format))
        .collect()
});

impl OutputFormat {
    /// Every registered format.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Undefined,
        OutputFormat::Html,
        OutputFormat::Xhtml,
        OutputFormat::Xml,
        OutputFormat::Rtf,
        OutputFormat::PlainText,
    ];

    /// Registered short name, e.g. `HTML`.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Undefined => "undefined",
            OutputFormat::Html => "HTML",
            OutputFormat::Xhtml => "XHTML",
            OutputFormat::Xml => "XML",
            OutputFormat::Rtf => "RTF",
            OutputFormat::PlainText => "plainText",
        }
    }

    /// Looks up a registered format by short name. Lookup is exact;
    /// unknown names return `None`.
    pub fn by_name(name: &str) -> Option<OutputFormat> {
        REGISTRY.get(name).copied()
    }

    /// Whether output escaping is possible for this format at all.
    pub fn supports_escaping(self) -> bool {
        !matches!(self, OutputFormat::Undefined | OutputFormat::PlainText)
    }

    /// Whether this format asks for escaping without being told to.
    ///
    /// Markup formats do; `undefined` and `plainText` do not. The
    /// `auto_escaping_policy` setting consults this for its
    /// `enableIfDefault` policy.
    pub fn escapes_by_default(self) -> bool {
        self.supports_escaping()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ValueParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        OutputFormat::by_name(&s).ok_or(ValueParseError::UnregisteredOutputFormat { name: s })
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> String {
        format.name().to_string()
    }
}
