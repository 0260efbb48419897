//! Conversions between [`Value`] and `serde_json::Value`
//!
//! Available behind the `json` feature. JSON is a strict subset of the value
//! model: every JSON document converts losslessly into a [`Value`], while
//! the reverse direction fails for symbols, callables, and non-finite
//! numbers, none of which have a JSON form.
//!
//! # Example
//!
//! ```
//! use attest::{is_object_with, Value};
//! use serde_json::json;
//!
//! let user = Value::from(json!({"name": "ada", "age": 36}));
//! assert_eq!(is_object_with(&user, &Value::from("name"), false), Ok(true));
//! ```

use crate::{Error, Key, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (Key::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = Error;

    fn try_from(v: &Value) -> Result<Self, Error> {
        match v {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            // Integral values go back as JSON integers so a document survives
            // a round trip structurally intact.
            Value::Number(n) if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 => {
                Ok(serde_json::Value::Number(serde_json::Number::from(*n as i64)))
            }
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| Error::invalid_argument("number has no JSON form")),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(serde_json::Value::Array),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| match k {
                    Key::Str(s) => Ok((s.clone(), serde_json::Value::try_from(v)?)),
                    Key::Sym(_) => {
                        Err(Error::invalid_argument("symbol keys have no JSON form"))
                    }
                })
                .collect::<Result<serde_json::Map<_, _>, _>>()
                .map(serde_json::Value::Object),
            Value::Symbol(_) => Err(Error::invalid_argument("symbols have no JSON form")),
            Value::Function(_) => Err(Error::invalid_argument("callables have no JSON form")),
        }
    }
}
