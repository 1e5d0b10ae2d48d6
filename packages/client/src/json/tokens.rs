//! Token kinds named in decoding errors

use std::fmt;

/// Kind of a JSON token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonToken {
    /// `{`
    BeginObject,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// `]`
    EndArray,
    /// String value
    String,
    /// Numeric value, integral or not
    Number,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
}

impl JsonToken {
    /// The closing token spelled by `byte`, if any
    #[inline]
    #[must_use]
    pub fn closing(byte: u8) -> Option<Self> {
        match byte {
            b'}' => Some(JsonToken::EndObject),
            b']' => Some(JsonToken::EndArray),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonToken::BeginObject => "BEGIN_OBJECT",
            JsonToken::EndObject => "END_OBJECT",
            JsonToken::BeginArray => "BEGIN_ARRAY",
            JsonToken::EndArray => "END_ARRAY",
            JsonToken::String => "STRING",
            JsonToken::Number => "NUMBER",
            JsonToken::Boolean => "BOOLEAN",
            JsonToken::Null => "NULL",
        }
    }
}

impl fmt::Display for JsonToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
