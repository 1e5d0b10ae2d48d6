//! Requested time precision of a query

use std::fmt;

use serde::{Deserialize, Serialize};

/// Time unit the server was asked to report timestamps in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Precision {
    #[serde(rename = "n")]
    Nanoseconds,
    #[serde(rename = "u")]
    Microseconds,
    #[default]
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "d")]
    Days,
}

impl Precision {
    /// Short unit string, as used on the wire
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Nanoseconds => "n",
            Precision::Microseconds => "u",
            Precision::Milliseconds => "ms",
            Precision::Seconds => "s",
            Precision::Minutes => "m",
            Precision::Hours => "h",
            Precision::Days => "d",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_unit_strings() {
        let encoded = serde_json::to_string(&Precision::Microseconds).ok();
        assert_eq!(encoded.as_deref(), Some("\"u\""));

        let decoded: Option<Precision> = serde_json::from_str("\"ms\"").ok();
        assert_eq!(decoded, Some(Precision::Milliseconds));
        assert_eq!(Precision::default().to_string(), "ms");
    }
}
