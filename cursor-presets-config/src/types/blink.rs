//! Blink settings: the on/off toggle and the seconds-based durations.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether the blinking facility is switched on.
///
/// Written as an integer in preset files: positive enables, zero or negative
/// disables (`1` / `-1` by convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlinkMode {
    Enable,
    Disable,
}

impl BlinkMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, BlinkMode::Enable)
    }

    /// Conventional integer form
    pub fn as_arg(self) -> i64 {
        match self {
            BlinkMode::Enable => 1,
            BlinkMode::Disable => -1,
        }
    }
}

impl From<i64> for BlinkMode {
    fn from(arg: i64) -> Self {
        if arg > 0 {
            BlinkMode::Enable
        } else {
            BlinkMode::Disable
        }
    }
}

impl Serialize for BlinkMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_arg())
    }
}

impl<'de> Deserialize<'de> for BlinkMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(BlinkMode::from)
    }
}

/// Serde adapter for `Option<Duration>` written as fractional seconds.
pub(crate) mod opt_secs {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(secs) => Duration::try_from_secs_f64(secs)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid duration {secs}: {e}"))),
            None => Ok(None),
        }
    }
}
