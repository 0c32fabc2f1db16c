use std::fmt;

use super::scalar::Scalar;

/// Store-agnostic condition on a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Criterion {
    Equal(String, Scalar),
    GreaterThanOrEqual(String, Scalar),
    LessThanOrEqual(String, Scalar),
    /// Closed interval: `attribute >= from AND attribute <= to`
    Between(String, Scalar, Scalar),
}

impl Criterion {
    pub fn attribute(&self) -> &str {
        match self {
            Criterion::Equal(attr, _)
            | Criterion::GreaterThanOrEqual(attr, _)
            | Criterion::LessThanOrEqual(attr, _)
            | Criterion::Between(attr, _, _) => attr,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Equal(attr, value) => write!(f, "{} == {}", attr, value),
            Criterion::GreaterThanOrEqual(attr, value) => write!(f, "{} >= {}", attr, value),
            Criterion::LessThanOrEqual(attr, value) => write!(f, "{} <= {}", attr, value),
            Criterion::Between(attr, from, to) => write!(f, "{} in [{}, {}]", attr, from, to),
        }
    }
}
