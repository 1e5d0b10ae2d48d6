//! Decoding of one series object and its rows
//!
//! `serde_json` drives the parse; the seeds below enforce the field order of a
//! series object and apply the positional numeric typing to each row.

use std::fmt;
use std::io::BufRead;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::error::{self, Error, StreamError};
use crate::json::{JsonSource, JsonToken};
use crate::series::{Series, SeriesBuilder, Value};

/// A decoded series and whether the input ended right after it
#[derive(Debug)]
pub(super) struct Decoded {
    pub series: Series,
    pub end_of_stream: bool,
}

/// Decodes the object at the cursor. The caller has already ruled out end of
/// input.
pub(super) fn decode_series<R: BufRead>(
    source: &mut JsonSource<R>,
    integral_columns: usize,
) -> error::Result<Decoded> {
    let parsed = {
        let mut de = serde_json::Deserializer::from_reader(&mut *source);
        SeriesSeed { integral_columns }.deserialize(&mut de)
    };
    let series = parsed.map_err(|e| json_error(e, source))?;

    // Each series object is followed by the next object or by end of input.
    let end_of_stream = !source.skip_whitespace()?;

    Ok(Decoded {
        series,
        end_of_stream,
    })
}

/// A syntax error on a closing bracket names the bracket, the same way a
/// misplaced value does.
fn json_error<R>(e: serde_json::Error, source: &JsonSource<R>) -> Error {
    if e.is_syntax() {
        if let Some(token) = source.last_byte().and_then(JsonToken::closing) {
            return error::malformed(StreamError::UnexpectedToken {
                token,
                offset: source.offset().saturating_sub(1),
            });
        }
    }
    e.into()
}

/// Reads `{"name": .., "columns": [..], "points": [[..], ..]}` in that order.
/// Fields after `points` are skipped.
#[derive(Clone, Copy)]
struct SeriesSeed {
    integral_columns: usize,
}

impl<'de> DeserializeSeed<'de> for SeriesSeed {
    type Value = Series;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Series, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for SeriesSeed {
    type Value = Series;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a series object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Series, A::Error> {
        expect_key(&mut map, "name", "series name")?;
        let mut builder = SeriesBuilder::new(map.next_value::<String>()?);

        expect_key(&mut map, "columns", "series columns")?;
        builder.add_columns(map.next_value::<Vec<String>>()?);

        expect_key(&mut map, "points", "series points")?;
        map.next_value_seed(PointsSeed {
            integral_columns: self.integral_columns,
            builder: &mut builder,
        })?;

        while map.next_key::<IgnoredAny>()?.is_some() {
            map.next_value::<IgnoredAny>()?;
        }
        Ok(builder.build())
    }
}

fn expect_key<'de, A: MapAccess<'de>>(
    map: &mut A,
    field: &str,
    what: &'static str,
) -> Result<(), A::Error> {
    match map.next_key::<String>()? {
        Some(key) if key == field => Ok(()),
        _ => Err(de::Error::custom(StreamError::Incomplete(what))),
    }
}

struct PointsSeed<'a> {
    integral_columns: usize,
    builder: &'a mut SeriesBuilder,
}

impl<'de> DeserializeSeed<'de> for PointsSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for PointsSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of rows")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let row = RowSeed {
            integral_columns: self.integral_columns,
        };
        while let Some(values) = seq.next_element_seed(row)? {
            self.builder.add_row(values);
        }
        Ok(())
    }
}

/// One row array. Numbers below `integral_columns` become `i64`, the rest
/// `f64`; strings are kept as is.
#[derive(Clone, Copy)]
struct RowSeed {
    integral_columns: usize,
}

impl<'de> DeserializeSeed<'de> for RowSeed {
    type Value = Vec<Value>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<Value>, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for RowSeed {
    type Value = Vec<Value>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a row array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<Value>, A::Error> {
        let mut row = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        loop {
            let cell = CellSeed {
                position: row.len(),
                integral: row.len() < self.integral_columns,
            };
            match seq.next_element_seed(cell)? {
                Some(value) => row.push(value),
                None => break,
            }
        }
        Ok(row)
    }
}

struct CellSeed {
    position: usize,
    integral: bool,
}

impl CellSeed {
    fn not_integral<E: de::Error>(&self, literal: impl ToString) -> E {
        E::custom(StreamError::NumberFormat {
            expected: "an integer",
            literal: literal.to_string(),
            position: self.position,
        })
    }
}

fn unexpected<E: de::Error>(token: JsonToken) -> E {
    E::custom(StreamError::UnexpectedValue(token))
}

impl<'de> DeserializeSeed<'de> for CellSeed {
    type Value = Value;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
impl<'de> Visitor<'de> for CellSeed {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(if self.integral {
            Value::Integer(v)
        } else {
            Value::Float(v as f64)
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        if self.integral {
            i64::try_from(v)
                .map(Value::Integer)
                .map_err(|_| self.not_integral(v))
        } else {
            Ok(Value::Float(v as f64))
        }
    }

    // Integral-valued literals such as `10.0` or `1e3` still fit an integral
    // position.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        if !self.integral {
            return Ok(Value::Float(v));
        }
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(Value::Integer(v as i64))
        } else {
            Err(self.not_integral(v))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Value, E> {
        Err(unexpected(JsonToken::Boolean))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Err(unexpected(JsonToken::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Err(unexpected(JsonToken::Null))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<Value, A::Error> {
        Err(unexpected(JsonToken::BeginArray))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<Value, A::Error> {
        Err(unexpected(JsonToken::BeginObject))
    }
}
