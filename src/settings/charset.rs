//! Source encoding selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValueParseError;

/// Character encodings the engine can read template sources in.
///
/// Names are matched case-insensitively and common aliases are accepted
/// (`utf8`, `latin1`, `ascii`, `cp1252`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    Utf8,
    Utf16,
    Utf16Be,
    Utf16Le,
    Iso8859_1,
    UsAscii,
    Windows1252,
}

impl Charset {
    /// Canonical IANA-style name, e.g. `UTF-8`.
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::UsAscii => "US-ASCII",
            Charset::Windows1252 => "windows-1252",
        }
    }

    /// The ambient process default. Rust strings are UTF-8, so that is
    /// always the answer here.
    pub fn platform_default() -> Charset {
        Charset::Utf8
    }
}

impl FromStr for Charset {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "utf-16" | "utf16" => Ok(Charset::Utf16),
            "utf-16be" | "utf16be" => Ok(Charset::Utf16Be),
            "utf-16le" | "utf16le" => Ok(Charset::Utf16Le),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Charset::Iso8859_1),
            "us-ascii" | "ascii" => Ok(Charset::UsAscii),
            "windows-1252" | "cp1252" => Ok(Charset::Windows1252),
            _ => Err(ValueParseError::UnknownCharset {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Charset {
    type Error = ValueParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Charset> for String {
    fn from(charset: Charset) -> String {
        charset.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("UTF-8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("ISO-8859-1".parse::<Charset>().unwrap(), Charset::Iso8859_1);
        assert_eq!("US-ASCII".parse::<Charset>().unwrap(), Charset::UsAscii);
        assert_eq!(
            "windows-1252".parse::<Charset>().unwrap(),
            Charset::Windows1252
        );
    }

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("Latin1".parse::<Charset>().unwrap(), Charset::Iso8859_1);
        assert_eq!("ASCII".parse::<Charset>().unwrap(), Charset::UsAscii);
        assert_eq!("CP1252".parse::<Charset>().unwrap(), Charset::Windows1252);
        assert_eq!("utf-16be".parse::<Charset>().unwrap(), Charset::Utf16Be);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "EBCDIC".parse::<Charset>().unwrap_err();
        assert!(matches!(err, ValueParseError::UnknownCharset { .. }));
        assert!(err.to_string().contains("EBCDIC"));
    }

    #[test]
    fn test_name_roundtrip() {
        for charset in [
            Charset::Utf8,
            Charset::Utf16,
            Charset::Utf16Be,
            Charset::Utf16Le,
            Charset::Iso8859_1,
            Charset::UsAscii,
            Charset::Windows1252,
        ] {
            assert_eq!(charset.name().parse::<Charset>().unwrap(), charset);
        }
    }

    #[test]
    fn test_platform_default_is_utf8() {
        assert_eq!(Charset::platform_default(), Charset::Utf8);
    }
}
