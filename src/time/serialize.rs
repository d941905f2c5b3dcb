//! Serde adapters for [`Instant`](crate::time::Instant) fields.
//!
//! Instants are written as ISO-8601 strings and read back either from a
//! string (RFC 3339, calendar date or epoch milliseconds) or from a bare
//! epoch-millisecond number.

use serde_derive::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstant {
    Millis(i64),
    Fractional(f64),
    Text(String),
}

impl RawInstant {
    fn resolve(self) -> Result<crate::time::Instant, String> {
        use crate::time::epoch::{from_epoch_millis, parse_instant};
        match self {
            RawInstant::Millis(millis) => {
                from_epoch_millis(millis).ok_or_else(|| format!("{} is out of time range", millis))
            }
            RawInstant::Fractional(millis) if millis.is_finite() => {
                from_epoch_millis(millis.trunc() as i64)
                    .ok_or_else(|| format!("{} is out of time range", millis))
            }
            RawInstant::Fractional(millis) => Err(format!("{} is not a point in time", millis)),
            RawInstant::Text(text) => parse_instant(text.as_str()).map_err(|err| err.to_string()),
        }
    }
}

pub mod instant {
    use super::RawInstant;
    use crate::time::epoch::format_instant;
    use crate::time::Instant;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(format_instant(instant).as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Instant, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawInstant::deserialize(deserializer)?
            .resolve()
            .map_err(D::Error::custom)
    }
}

pub mod optional_instant {
    use super::RawInstant;
    use crate::time::epoch::format_instant;
    use crate::time::Instant;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) => serializer.serialize_str(format_instant(instant).as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawInstant>::deserialize(deserializer)? {
            Some(raw) => raw.resolve().map(Some).map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
