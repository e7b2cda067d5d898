//! Time zone selection.
//!
//! As with [`Locale`](super::Locale), only the *selection* is modeled:
//! a zone is either UTC, a fixed offset, or a named identifier that the
//! renderer's date machinery resolves later. Offsets use
//! [`chrono::FixedOffset`].

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::error::ValueParseError;

/// A selected time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZone {
    /// Coordinated universal time. `GMT±00:00` offsets normalize to this.
    Utc,
    /// A fixed offset from UTC, e.g. `GMT+02:00`.
    ///
    /// The textual form has minute precision; a sub-minute offset built
    /// directly from a [`FixedOffset`] keeps its seconds for comparison
    /// but displays (and serializes) with the seconds truncated.
    Fixed(FixedOffset),
    /// A named zone: an IANA identifier (`Europe/Berlin`) or an
    /// abbreviation (`PST`). Stored as given; resolution against the zone
    /// database is the renderer's concern.
    Named(String),
}

impl TimeZone {
    /// The ambient process default.
    ///
    /// Resolved from the `TZ` environment variable (with the leading `:`
    /// of the `TZ=:Area/City` form stripped); falls back to UTC when `TZ`
    /// is absent or unparseable.
    pub fn platform_default() -> TimeZone {
        match std::env::var("TZ") {
            Ok(raw) => raw
                .strip_prefix(':')
                .unwrap_or(&raw)
                .parse()
                .unwrap_or(TimeZone::Utc),
            Err(_) => TimeZone::Utc,
        }
    }

    fn parse_offset(s: &str) -> Option<TimeZone> {
        let (sign, rest) = match s.as_bytes().first()? {
            b'+' => (1, &s[1..]),
            b'-' => (-1, &s[1..]),
            _ => return None,
        };
        let (hours, minutes) = match rest.split_once(':') {
            Some((h, m)) => (h, m),
            None => (rest, "0"),
        };
        // Pure digits only: i32's own parser would accept a second sign.
        let field_ok = |field: &str| {
            (1..=2).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
        };
        if !field_ok(hours) || !field_ok(minutes) {
            return None;
        }
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        let seconds = sign * (hours * 3600 + minutes * 60);
        if seconds == 0 {
            return Some(TimeZone::Utc);
        }
        FixedOffset::east_opt(seconds).map(TimeZone::Fixed)
    }

    fn is_iana_id(s: &str) -> bool {
        s.contains('/')
            && s.split('/').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
            })
    }

    fn is_abbreviation(s: &str) -> bool {
        (3..=5).contains(&s.len()) && s.chars().all(|c| c.is_ascii_uppercase())
    }
}

impl FromStr for TimeZone {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "UTC" | "GMT" | "Z") {
            return Ok(TimeZone::Utc);
        }
        let offset_part = s
            .strip_prefix("GMT")
            .or_else(|| s.strip_prefix("UTC"))
            .unwrap_or(s);
        if let Some(zone) = TimeZone::parse_offset(offset_part) {
            return Ok(zone);
        }
        if TimeZone::is_iana_id(s) || TimeZone::is_abbreviation(s) {
            return Ok(TimeZone::Named(s.to_string()));
        }
        Err(ValueParseError::UnknownTimeZone { id: s.to_string() })
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZone::Utc => f.write_str("UTC"),
            TimeZone::Fixed(offset) => {
                let total = offset.local_minus_utc();
                let sign = if total < 0 { '-' } else { '+' };
                let total = total.abs();
                write!(f, "GMT{}{:02}:{:02}", sign, total / 3600, total % 3600 / 60)
            }
            TimeZone::Named(id) => f.write_str(id),
        }
    }
}

impl TryFrom<String> for TimeZone {
    type Error = ValueParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeZone> for String {
    fn from(zone: TimeZone) -> String {
        zone.to_string()
    }
}
