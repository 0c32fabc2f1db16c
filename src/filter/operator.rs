use std::fmt;
use std::str::FromStr;

use super::error::FilterError;

/// Comparison operators accepted in a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    GreaterOrEqual,
    LessOrEqual,
}

impl Operator {
    /// Wire representation used in filter expressions
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::GreaterOrEqual => "gte",
            Operator::LessOrEqual => "lte",
        }
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Operator::Equals),
            "gte" => Ok(Operator::GreaterOrEqual),
            "lte" => Ok(Operator::LessOrEqual),
            _ => Err(FilterError::InvalidOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
