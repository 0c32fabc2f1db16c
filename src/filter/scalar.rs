use serde_json::Value;
use std::fmt;

use super::error::FilterError;

/// Operand of a filter: the scalar kinds a language record carries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl Scalar {
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "string",
            Scalar::Integer(_) => "integer",
            Scalar::Boolean(_) => "boolean",
        }
    }

    /// Whether two scalars are of the same kind
    pub fn same_kind(&self, other: &Scalar) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl TryFrom<Value> for Scalar {
    type Error = FilterError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Scalar::Text(s)),
            Value::Bool(b) => Ok(Scalar::Boolean(b)),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Integer)
                .ok_or_else(|| FilterError::UnsupportedValue(format!("number {}", n))),
            Value::Null => Err(FilterError::UnsupportedValue("null".to_string())),
            Value::Array(_) => Err(FilterError::UnsupportedValue("array".to_string())),
            Value::Object(_) => Err(FilterError::UnsupportedValue("object".to_string())),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{:?}", s),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Boolean(b) => write!(f, "{}", b),
        }
    }
}
