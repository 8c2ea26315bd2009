//! Reduces heterogeneous values to a single comparable string token.
//!
//! Every value goes through the same ordered checks: error message, integer,
//! text, then structured JSON. Object keys are sorted before rendering, so
//! two values that only differ in field order produce the same token. NaN and
//! infinities have no JSON form and are rejected instead of becoming `null`.

pub mod errors;
mod finite;

pub use errors::NormalizeError;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;

/// A value handed to a test, tagged with the capability used to normalize it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Error(String),
    Integer(i128),
    Text(String),
    Structured(serde_json::Value),
    Unsupported(String),
}

impl Value {
    /// Uses the error's message text.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Value::Error(err.to_string())
    }

    /// Serializes any `Serialize` value. Failures, including non-finite
    /// floats anywhere in the value, are kept as `Unsupported` and surface when
    /// the value is normalized.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        if let Err(e) = finite::check(value) {
            return Value::Unsupported(e.to_string());
        }
        match serde_json::to_value(value) {
            Ok(json) => Value::Structured(json),
            Err(e) => Value::Unsupported(e.to_string()),
        }
    }
}

macro_rules! integer_values {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value as i128)
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Structured(serde_json::Value::Bool(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::structured(&value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::structured(&value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::Structured(value)
    }
}

impl From<std::io::Error> for Value {
    fn from(err: std::io::Error) -> Self {
        Value::error(&err)
    }
}

impl From<anyhow::Error> for Value {
    fn from(err: anyhow::Error) -> Self {
        Value::Error(err.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Structured(serde_json::Value::Null),
        }
    }
}

/// The canonical string form used for equality checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparable(String);

impl Comparable {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(value: &Value) -> Result<Comparable, NormalizeError> {
    let token = match value {
        Value::Error(message) => message.clone(),
        Value::Integer(n) => n.to_string(),
        Value::Text(text) => text.clone(),
        Value::Structured(json) => to_canonical_json(json)?,
        Value::Unsupported(reason) => return Err(NormalizeError::unsupported(reason.as_str())),
    };
    Ok(Comparable(token))
}

pub fn compare(a: &Comparable, b: &Comparable) -> bool {
    a.0 == b.0
}

// `serde_json::Map` keeps insertion order when `preserve_order` is enabled
// anywhere in the build, so keys are sorted here rather than relied upon.
fn sort_keys(json: &serde_json::Value) -> serde_json::Value {
    match json {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_keys(value)))
                    .collect(),
            )
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(sort_keys).collect())
        }
        other => other.clone(),
    }
}

fn to_canonical_json(json: &serde_json::Value) -> Result<String, NormalizeError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    sort_keys(json)
        .serialize(&mut serializer)
        .map_err(|e| NormalizeError::unsupported(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| NormalizeError::unsupported(e.to_string()))
}
